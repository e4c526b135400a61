//! Color utilities for terminal output
//!
//! Styling is applied only when the user asked for it or stdout is a
//! terminal, so piped Markdown never picks up escape codes.

use std::fmt::Display;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::cli::ColorOption;

/// Semantic color palette for status messages.
pub struct ColorScheme {
  enabled: bool,
}

impl ColorScheme {
  /// Create a new color scheme based on user preference and terminal
  /// capabilities
  pub fn new(color_option: ColorOption) -> Self {
    let enabled = match color_option {
      ColorOption::Always => true,
      ColorOption::Never => false,
      ColorOption::Auto => std::io::stdout().is_terminal(),
    };

    Self { enabled }
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  fn paint<T: Display>(&self, text: T, style: impl FnOnce(&T) -> String) -> String {
    if self.enabled { style(&text) } else { text.to_string() }
  }

  /// Success markers and messages (green)
  pub fn success<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.green().to_string())
  }

  /// Error markers and messages (bright red, bold)
  pub fn error<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.bright_red().bold().to_string())
  }

  /// Labels and ticket keys (bright white, bold)
  pub fn emphasis<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.bright_white().bold().to_string())
  }

  /// File paths (magenta)
  pub fn path<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.magenta().to_string())
  }

  /// Version numbers (bright blue)
  pub fn number<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.bright_blue().to_string())
  }

  /// Commit hashes and other identifiers (bright green)
  pub fn code<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.bright_green().to_string())
  }

  /// Secondary details (dimmed)
  pub fn dimmed<T: Display>(&self, text: T) -> String {
    self.paint(text, |text| text.dimmed().to_string())
  }
}
