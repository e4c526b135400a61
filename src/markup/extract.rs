//! Structure-preserving text extraction for HTML embedded in Jira XML.
//!
//! Descriptions and comment bodies arrive as XHTML subtrees. Collecting their
//! text content would fold every paragraph and list into one line, so block
//! elements are mapped onto newlines and `- ` bullets instead.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::{Node, NodeType};

use super::utils::{html_tag_name, text_content};

/// Nesting depth past which subtrees are flattened to their plain text
/// content instead of being walked recursively.
pub const MAX_NESTING_DEPTH: usize = 512;

static EXCESS_NEWLINES: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("newline pattern is valid"));
static DOUBLE_DASH_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n--([^-])").expect("double dash pattern is valid"));
static LEADING_DOUBLE_DASH: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^--([^-])").expect("leading double dash pattern is valid"));

/// Convert an element's subtree into plain text with paragraph, list and
/// line-break structure intact.
///
/// - `p`, `div` and `h1`..`h6` become newline-delimited blocks.
/// - Each line of an `li` becomes its own `- ` bullet.
/// - `br` becomes a newline.
/// - Every other element, `ul` and `ol` included, is inlined.
///
/// The result has runs of blank lines collapsed to one and is trimmed.
pub fn extract_all_text(node: Node) -> String {
  extract_bounded(node, MAX_NESTING_DEPTH)
}

fn extract_bounded(node: Node, remaining_depth: usize) -> String {
  if remaining_depth == 0 {
    return tidy_text(&text_content(node));
  }

  let mut pieces = String::new();

  for child in node.children() {
    match child.node_type() {
      // Covers both the element's leading text and the tail after each child.
      // Whitespace-only runs are formatting between tags and are dropped.
      NodeType::Text => {
        if let Some(text) = child.text().filter(|text| !text.trim().is_empty()) {
          pieces.push_str(text);
        }
      }
      NodeType::Element => push_element_text(&mut pieces, child, remaining_depth - 1),
      _ => {}
    }
  }

  tidy_text(&pieces)
}

fn push_element_text(pieces: &mut String, element: Node, remaining_depth: usize) {
  match html_tag_name(element).as_str() {
    "p" | "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
      let text = extract_bounded(element, remaining_depth);
      if !text.is_empty() {
        pieces.push('\n');
        pieces.push_str(&text);
        pieces.push('\n');
      }
    }
    "li" => {
      let text = extract_bounded(element, remaining_depth);
      for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        pieces.push_str("\n- ");
        pieces.push_str(line);
      }
    }
    "br" => pieces.push('\n'),
    // `ul`/`ol` land here too: bullets come from their `li` children.
    _ => pieces.push_str(&extract_bounded(element, remaining_depth)),
  }
}

fn tidy_text(text: &str) -> String {
  let text = EXCESS_NEWLINES.replace_all(text, "\n\n");
  let text = DOUBLE_DASH_LINE.replace_all(&text, "\n- ${1}");
  let text = LEADING_DOUBLE_DASH.replace(&text, "- ${1}");
  text.trim().to_string()
}
