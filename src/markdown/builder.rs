//! Line-buffer builder for assembling Markdown documents.

use crate::jira::CustomFieldValue;

/// Accumulates Markdown lines and joins them with paragraph spacing.
///
/// Every `add_*` method is a no-op when its content is absent, so callers can
/// feed optional ticket fields straight through.
#[derive(Debug, Clone, Default)]
pub struct MarkdownBuilder {
  lines: Vec<String>,
}

impl MarkdownBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Lines buffered so far, before paragraph spacing is applied.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Push an ATX header followed by a blank line.
  pub fn add_header(&mut self, text: &str, level: usize) {
    self.lines.push(format!("{} {text}", "#".repeat(level)));
    self.lines.push(String::new());
  }

  pub fn add_line(&mut self, text: impl Into<String>) {
    self.lines.push(text.into());
  }

  pub fn add_line_break(&mut self) {
    self.lines.push(String::new());
  }

  /// Push `**label:** value` when `value` is present and non-empty.
  pub fn add_field(&mut self, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
      self.lines.push(format!("**{label}:** {value}"));
    }
  }

  /// Push `**label:** a, b, c` when `items` is non-empty.
  pub fn add_list(&mut self, label: &str, items: &[String]) {
    if !items.is_empty() {
      self.lines.push(format!("**{label}:** {}", items.join(", ")));
    }
  }

  /// Push a header, `content`, and a blank line, unless `content` is empty.
  pub fn add_section(&mut self, title: &str, content: &str, level: usize) {
    if content.is_empty() {
      return;
    }

    self.add_header(title, level);
    self.lines.push(content.to_string());
    self.lines.push(String::new());
  }

  /// Push one `- **name:** value` bullet per entry. List values are joined
  /// with commas.
  pub fn add_bullet_list<'a>(&mut self, items: impl IntoIterator<Item = (&'a str, &'a CustomFieldValue)>) {
    for (name, value) in items {
      self.lines.push(format!("- **{name}:** {value}"));
    }
  }

  /// Join the buffered lines.
  ///
  /// A blank line is inserted between two adjacent non-empty lines unless
  /// either of them is a bullet.
  pub fn build(&self) -> String {
    let mut output = Vec::with_capacity(self.lines.len() * 2);

    for (index, line) in self.lines.iter().enumerate() {
      output.push(line.as_str());

      if let Some(next) = self.lines.get(index + 1)
        && !line.is_empty()
        && !next.is_empty()
        && !is_bullet(line)
        && !is_bullet(next)
      {
        output.push("");
      }
    }

    output.join("\n")
  }
}

fn is_bullet(line: &str) -> bool {
  line.starts_with("- ")
}
