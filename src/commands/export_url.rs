//! Implements `jira-md export-url`, which prints the URL the fetcher would
//! request for a browse URL.

use crate::jira::export_url_with_fields;

/// Print the export URL for `url`, field list included.
pub(crate) fn handle_export_url_command(url: &str) {
  println!("{}", export_url_with_fields(url));
}
