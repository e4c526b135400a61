//! Command-line interface definitions for jira-md.
//!
//! This module defines the CLI structure using clap derives and dispatches to
//! the handlers in [`crate::commands`].

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::color::ColorScheme;
use crate::commands::completions::handle_completions_command;
use crate::commands::convert::handle_convert_command;
use crate::commands::export_url::handle_export_url_command;
use crate::commands::version::handle_version_command;
use crate::format::OutputFormat;
use crate::jira::is_ticket_key;

/// jira-md - Convert Jira issue exports to Markdown
#[derive(Debug, Parser)]
#[command(
  name = "jira-md",
  version,
  about = "Convert Jira issue exports to Markdown",
  long_about = "A command-line tool for converting a single Jira issue-xml export into Markdown.\n\
                Reads the export from a file, stdin, or a Jira URL, and writes the rendered ticket\n\
                to stdout or a file.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Export file, `-` for stdin, a Jira URL, or a ticket key such as PROJ-123
  #[arg(value_name = "INPUT")]
  pub input: Option<String>,

  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Option<Command>,

  /// Jira connection options
  #[command(flatten)]
  pub jira: JiraOptions,

  /// Output options
  #[command(flatten)]
  pub output: OutputOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Subcommands for introspection and shell integration
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the issue-xml export URL a browse URL maps to
  ExportUrl {
    /// Browse URL such as https://example.atlassian.net/browse/PROJ-123
    #[arg(value_name = "URL")]
    url: String,
  },

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Shells supported by the `completions` subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

/// Normalize a URL by adding https:// if no scheme is present
fn normalize_url(url: &str) -> Result<String, String> {
  let trimmed = url.trim();

  let parsed = if trimmed.contains("://") {
    Url::parse(trimmed).map_err(|e| format!("Invalid URL: {e}"))?
  } else {
    Url::parse(&format!("https://{trimmed}")).map_err(|e| format!("Invalid URL: {e}"))?
  };

  let mut url_str = parsed.to_string();
  if url_str.ends_with('/') {
    url_str.pop();
  }

  Ok(url_str)
}

/// Jira connection options
#[derive(Debug, Parser)]
pub struct JiraOptions {
  /// Jira base URL, used to resolve bare ticket keys
  #[arg(long, env = "JIRA_URL", value_name = "URL", value_parser = normalize_url)]
  pub url: Option<String>,

  /// HTTP request timeout in seconds
  #[arg(long, env = "JIRA_MD_TIMEOUT", default_value = "10", value_name = "SECONDS")]
  pub timeout: u64,
}

/// Output options
#[derive(Debug, Parser)]
pub struct OutputOptions {
  /// Write to this file (or into this directory) instead of stdout
  #[arg(short, long, value_name = "PATH")]
  pub output: Option<PathBuf>,

  /// Overwrite an existing output file
  #[arg(long, requires = "output")]
  pub overwrite: bool,

  /// Output format
  #[arg(long, value_enum, default_value = "markdown", value_name = "FORMAT")]
  pub format: OutputFormat,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

impl Cli {
  /// Parse CLI arguments from the environment
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if let Some(ref input) = self.input
      && is_ticket_key(input)
      && !Path::new(input).exists()
      && self.jira.url.is_none()
    {
      return Err("--url is required when using a ticket key".to_string());
    }

    if self.jira.timeout == 0 {
      return Err("--timeout must be at least 1 second".to_string());
    }

    Ok(())
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse_args();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  if let Some(ref command) = cli.command {
    match command {
      Command::ExportUrl { url } => {
        handle_export_url_command(url);
      }
      Command::Version { json, short } => {
        handle_version_command(*json, *short, &colors);
      }
      Command::Completions { shell } => {
        handle_completions_command(*shell);
      }
    }
    return;
  }

  handle_convert_command(cli.input.as_deref(), &cli, &colors).await;
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
