//! Helpers for navigating `roxmltree` trees.

use roxmltree::Node;

/// Tests whether `node` is an element whose local name is `name`.
pub fn matches_tag(node: Node, name: &str) -> bool {
  node.is_element() && node.tag_name().name() == name
}

/// Lower-cased local tag name, used when dispatching on HTML element names.
pub fn html_tag_name(node: Node) -> String {
  node.tag_name().name().to_ascii_lowercase()
}

/// Finds the first direct child element with the given tag name.
pub fn find_child_by_tag<'a, 'input>(node: Node<'a, 'input>, tag_name: &str) -> Option<Node<'a, 'input>> {
  node.children().find(|child| matches_tag(*child, tag_name))
}

/// Iterates over the direct child elements with the given tag name, in
/// document order.
pub fn children_by_tag<'a, 'input>(
  node: Node<'a, 'input>,
  tag_name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
  node.children().filter(move |child| matches_tag(*child, tag_name))
}

/// Returns the leading text of a node, or `None` when it has none or it is
/// empty.
///
/// Whitespace-only text counts as present.
pub fn non_empty_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
  node.text().filter(|text| !text.is_empty())
}

/// Returns the leading text of the first direct child named `tag_name`.
pub fn child_text(node: Node, tag_name: &str) -> Option<String> {
  find_child_by_tag(node, tag_name)
    .and_then(non_empty_text)
    .map(str::to_string)
}

/// Concatenates every descendant text node without any structural handling.
///
/// Iterative, so it is safe on arbitrarily deep trees.
pub fn text_content(node: Node) -> String {
  node
    .descendants()
    .filter(|descendant| descendant.is_text())
    .filter_map(|descendant| descendant.text())
    .collect()
}
