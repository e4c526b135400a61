//! Trait seam for fetching Jira exports.

use anyhow::Result;
use async_trait::async_trait;

/// Source of raw issue-xml exports (enables testing with fake
/// implementations).
#[async_trait]
pub trait IssueExportApi: Send + Sync {
  /// Fetch the raw XML export behind `url`.
  ///
  /// # Arguments
  /// * `url` - A browse URL or an issue-xml export URL.
  ///
  /// # Returns
  /// The response body as text, unparsed.
  async fn fetch_issue_xml(&self, url: &str) -> Result<String>;
}
