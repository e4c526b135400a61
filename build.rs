//! Build script for jira-md.
//!
//! Exposes build metadata to the `version` subcommand through `env!`.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
  emit_build_env();

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
  println!("cargo:rerun-if-env-changed=TARGET");
}

/// Emits `GIT_HASH`, `BUILD_TIMESTAMP`, `TARGET` and `RUSTC_VERSION`.
///
/// Missing tools degrade to empty or `unknown` values rather than failing
/// the build.
fn emit_build_env() {
  let git_hash = command_stdout("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_default();
  println!("cargo:rustc-env=GIT_HASH={git_hash}");

  let timestamp = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|elapsed| elapsed.as_secs())
    .unwrap_or_default();
  println!("cargo:rustc-env=BUILD_TIMESTAMP={timestamp}");

  println!("cargo:rustc-env=TARGET={}", env::var("TARGET").unwrap_or_default());

  let rustc = command_stdout("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());
  println!("cargo:rustc-env=RUSTC_VERSION={rustc}");
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
  let output = Command::new(program).args(args).output().ok()?;
  let text = String::from_utf8(output.stdout).ok()?;
  Some(text.trim().to_string())
}
