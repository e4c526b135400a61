//! HTML entity expansion for Jira rich text.
//!
//! Jira embeds HTML inside its XML export. `roxmltree` only understands the
//! five XML entities, so named HTML entities have to be expanded before the
//! document reaches the parser.

/// Named HTML entities that show up in Jira descriptions and comments,
/// excluding the five XML predefined ones.
const NAMED_ENTITIES: &[(&str, char)] = &[
  ("&nbsp;", '\u{00A0}'),
  ("&ndash;", '\u{2013}'),
  ("&mdash;", '\u{2014}'),
  ("&ldquo;", '\u{201C}'),
  ("&rdquo;", '\u{201D}'),
  ("&lsquo;", '\u{2018}'),
  ("&rsquo;", '\u{2019}'),
  ("&hellip;", '\u{2026}'),
  ("&bull;", '\u{2022}'),
  ("&middot;", '\u{00B7}'),
  ("&deg;", '\u{00B0}'),
  ("&copy;", '\u{00A9}'),
  ("&reg;", '\u{00AE}'),
  ("&trade;", '\u{2122}'),
  ("&times;", '\u{00D7}'),
  ("&divide;", '\u{00F7}'),
  ("&plusmn;", '\u{00B1}'),
  ("&ne;", '\u{2260}'),
  ("&le;", '\u{2264}'),
  ("&ge;", '\u{2265}'),
  ("&larr;", '\u{2190}'),
  ("&rarr;", '\u{2192}'),
  ("&uarr;", '\u{2191}'),
  ("&darr;", '\u{2193}'),
];

/// Replace named HTML entities with literal characters so the text can be
/// handed to an XML parser. XML's own entities are left untouched.
pub fn preprocess_html_entities(text: &str) -> String {
  if !text.contains('&') {
    return text.to_string();
  }

  let mut result = text.to_string();
  for (entity, ch) in NAMED_ENTITIES {
    if result.contains(entity) {
      result = result.replace(entity, ch.encode_utf8(&mut [0; 4]));
    }
  }
  result
}
