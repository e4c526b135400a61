//! Repairs for the malformed XML Jira is known to produce.

use std::sync::LazyLock;

use regex::Regex;

use super::html_entities::preprocess_html_entities;

/// Two `rel` attributes on one anchor tag. Only a single pair is merged per
/// match; a third duplicate on the same tag is left in place.
static DUPLICATE_REL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(<a[^>]*?)rel="([^"]+)"([^>]*?)rel="([^"]+)""#).expect("duplicate rel pattern is valid")
});

/// Massage a raw Jira export into text an XML parser will accept.
///
/// Steps, in order:
/// 1. Drop anything before the first `<` (stray bytes, BOMs, banners).
/// 2. Remove bare ampersands written as `" & "`, leaving a single space.
/// 3. Merge `rel="a" ... rel="b"` on one anchor into `rel="a b"`.
/// 4. Expand named HTML entities that XML does not define.
///
/// Never fails. Input it cannot repair is passed through and left for the
/// parser to reject.
pub fn preprocess_jira_xml(xml_content: &str) -> String {
  let content = match xml_content.find('<') {
    Some(start) => &xml_content[start..],
    None => xml_content,
  };

  let content = content.replace(" & ", " ");
  let content = DUPLICATE_REL.replace_all(&content, r#"${1}rel="${2} ${4}"${3}"#);

  preprocess_html_entities(&content)
}
