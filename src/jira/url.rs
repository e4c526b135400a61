//! Helpers for turning Jira URLs and ticket keys into export URLs.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Fields requested from the issue-xml view. Jira omits some of these unless
/// asked for explicitly.
pub const EXPORT_FIELDS: &[&str] = &[
  "key",
  "summary",
  "description",
  "comments",
  "customfield",
  "project",
  "type",
  "priority",
  "status",
  "resolution",
  "assignee",
  "reporter",
  "created",
  "updated",
  "resolved",
  "component",
  "labels",
  "environment",
  "timespent",
  "votes",
  "watches",
];

static BARE_TICKET_KEY: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*-[0-9]+$").expect("ticket key pattern is valid"));

/// Rewrite a browse URL into the issue-xml export URL for the same ticket.
///
/// `https://host/browse/PROJ-1` becomes
/// `https://host/si/jira.issueviews:issue-xml/PROJ-1/PROJ-1.xml`. The query
/// string and fragment are dropped. Anything that is not a `/browse/<key>`
/// URL is returned unchanged.
pub fn convert_browse_url(browse_url: &str) -> String {
  let Ok(mut parsed) = Url::parse(browse_url) else {
    return browse_url.to_string();
  };

  let parts: Vec<&str> = parsed.path().split("/browse/").collect();
  let [_, key] = parts.as_slice() else {
    return browse_url.to_string();
  };

  let key = key.trim();
  if key.is_empty() {
    return browse_url.to_string();
  }

  let export_path = format!("/si/jira.issueviews:issue-xml/{key}/{key}.xml");
  parsed.set_path(&export_path);
  parsed.set_query(None);
  parsed.set_fragment(None);
  parsed.to_string()
}

/// Build the export URL the fetcher requests: browse URLs are rewritten with
/// [`convert_browse_url`], then one `field=` pair per entry of
/// [`EXPORT_FIELDS`] is appended after any existing query pairs.
///
/// Unparseable input is returned unchanged.
pub fn export_url_with_fields(url: &str) -> String {
  let converted = convert_browse_url(url);

  let Ok(mut parsed) = Url::parse(&converted) else {
    return converted;
  };

  {
    let mut query = parsed.query_pairs_mut();
    for field in EXPORT_FIELDS {
      query.append_pair("field", field);
    }
  }

  parsed.to_string()
}

/// Browse URL for `key` on the Jira instance at `base_url`.
pub fn browse_url_for_key(base_url: &str, key: &str) -> String {
  format!("{}/browse/{key}", base_url.trim_end_matches('/'))
}

/// Whether `input` looks like a bare ticket key such as `PROJ-123`.
pub fn is_ticket_key(input: &str) -> bool {
  BARE_TICKET_KEY.is_match(input)
}
