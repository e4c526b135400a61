//! Fake Jira export source for testing
//!
//! Serves predefined exports keyed by browse URL without making any network
//! requests, and records every URL it was asked for.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use jira_md::jira::{IssueExportApi, convert_browse_url};

use crate::common::fixtures;

/// A fake Jira instance that returns canned issue-xml exports
pub struct FakeJiraClient {
  exports: HashMap<String, String>,
  requests: Mutex<Vec<String>>,
}

impl FakeJiraClient {
  /// Create a new fake client with no exports
  pub fn new() -> Self {
    Self {
      exports: HashMap::new(),
      requests: Mutex::new(Vec::new()),
    }
  }

  /// Create a fake client serving the sample exports
  pub fn with_sample_exports() -> Self {
    let mut client = Self::new();
    client.add_export("https://example.atlassian.net/browse/TEST-123", fixtures::rich_export());
    client.add_export(
      "https://example.atlassian.net/browse/TEST-456",
      fixtures::duplicate_rel_export(),
    );
    client
  }

  /// Serve `xml` for `browse_url` (and for the export URL it maps to)
  pub fn add_export(&mut self, browse_url: &str, xml: &str) {
    self.exports.insert(convert_browse_url(browse_url), xml.to_string());
  }

  /// URLs requested so far, in order
  pub fn requests(&self) -> Vec<String> {
    self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
  }
}

#[async_trait]
impl IssueExportApi for FakeJiraClient {
  async fn fetch_issue_xml(&self, url: &str) -> Result<String> {
    if let Ok(mut requests) = self.requests.lock() {
      requests.push(url.to_string());
    }

    self
      .exports
      .get(&convert_browse_url(url))
      .cloned()
      .ok_or_else(|| anyhow!("Jira returned error 404 Not Found: issue does not exist"))
  }
}
