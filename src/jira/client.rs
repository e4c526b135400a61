//! HTTP client for downloading Jira issue-xml exports.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, info};

use super::api::IssueExportApi;
use super::url::export_url_with_fields;

/// Fetches exports over plain HTTP(S). No authentication, no retries.
#[derive(Clone)]
pub struct JiraClient {
  client: reqwest::Client,
}

impl JiraClient {
  /// Create a client whose requests give up after `timeout_secs`.
  ///
  /// # Errors
  /// Returns an error if the underlying `reqwest::Client` cannot be built.
  pub fn new(timeout_secs: u64) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .user_agent(format!("jira-md/{} ({})", env!("CARGO_PKG_VERSION"), env!("TARGET")))
      .build()
      .context("Failed to create HTTP client")?;

    Ok(Self { client })
  }
}

#[async_trait]
impl IssueExportApi for JiraClient {
  async fn fetch_issue_xml(&self, url: &str) -> Result<String> {
    let export_url = export_url_with_fields(url);
    info!("Fetching Jira export from {export_url}");

    let response = self
      .client
      .get(&export_url)
      .header("Accept", "application/xml")
      .send()
      .await
      .with_context(|| format!("Failed to send request to {export_url}"))?;

    let status = response.status();
    if !status.is_success() {
      let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(no error details)"));
      return Err(anyhow!("Jira returned error {status}: {error_text}"));
    }

    let body = response.text().await.context("Failed to read Jira export body")?;
    debug!("Received {} bytes of XML", body.len());

    Ok(body)
  }
}
