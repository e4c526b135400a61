//! Output format definitions and utilities.

use clap::ValueEnum;

/// Renderings available for a converted ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// Markdown document (default)
  #[default]
  #[value(alias = "md")]
  Markdown,
  /// Parsed ticket record as pretty-printed JSON
  Json,
}

impl OutputFormat {
  /// Returns the file extension for this output format.
  pub fn file_extension(&self) -> &'static str {
    match self {
      OutputFormat::Markdown => "md",
      OutputFormat::Json => "json",
    }
  }
}
