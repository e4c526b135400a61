//! CLI subcommand handlers.
//!
//! This module groups the implementations for each `jira-md` command, keeping
//! `cli.rs` focused on argument definitions while the handlers share the
//! conversion helpers in [`convert`].

pub mod completions;
pub mod convert;
pub mod export_url;
pub mod version;
