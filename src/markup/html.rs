//! Flattening of short inline-HTML snippets, such as custom field values.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("space pattern is valid"));
static BR_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br pattern is valid"));
static P_CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p>").expect("p pattern is valid"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Reduce an HTML snippet to plain text.
///
/// `<br>` becomes a newline and paragraphs are set on their own lines. Blank
/// lines collapse to one and space runs to a single space. A snippet that
/// yields no HTML content at all (whitespace, a lone comment) goes through
/// plain text substitution instead.
///
/// `None` and the empty string both yield an empty string.
pub fn strip_html(html: Option<&str>) -> String {
  let Some(html) = html.filter(|html| !html.is_empty()) else {
    return String::new();
  };

  let text = match fragment_text(html) {
    Some(text) => text,
    None => {
      debug!("HTML fragment has no content nodes, falling back to tag substitution");
      substitute_tags(html)
    }
  };

  collapse_whitespace(&text)
}

/// Parse `html` as a body fragment and collect its text, or `None` when the
/// fragment holds nothing but whitespace.
fn fragment_text(html: &str) -> Option<String> {
  let fragment = Html::parse_fragment(html);
  let root = fragment.root_element();

  let has_content = (*root).descendants().skip(1).any(|node| {
    node.value().is_element() || node.value().as_text().is_some_and(|text| !text.trim().is_empty())
  });
  if !has_content {
    return None;
  }

  let mut text = String::new();
  collect_text(root, &mut text);
  Some(text)
}

/// Text content with a newline after every `br` and around every `p`.
fn collect_text(element: ElementRef, text: &mut String) {
  for child in element.children() {
    if let Some(fragment) = child.value().as_text() {
      text.push_str(fragment);
    } else if let Some(child) = ElementRef::wrap(child) {
      match child.value().name() {
        "br" => text.push('\n'),
        "p" => {
          text.push('\n');
          collect_text(child, text);
          text.push('\n');
        }
        _ => collect_text(child, text),
      }
    }
  }
}

fn substitute_tags(html: &str) -> String {
  let text = BR_TAG.replace_all(html, "\n");
  let text = P_CLOSE_TAG.replace_all(&text, "\n\n");
  let text = ANY_TAG.replace_all(&text, "");
  html_escape::decode_html_entities(&text).into_owned()
}

fn collapse_whitespace(text: &str) -> String {
  let text = BLANK_LINES.replace_all(text, "\n\n");
  let text = SPACE_RUNS.replace_all(&text, " ");
  text.trim().to_string()
}
