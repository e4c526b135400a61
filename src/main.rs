//! jira-md - Convert Jira issue exports to Markdown
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  jira_md::cli::run().await;
}
