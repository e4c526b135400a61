//! Jira module providing the ticket records, the issue-xml parser, URL
//! helpers, and the HTTP fetcher behind a trait seam.

pub mod api;
pub mod client;
pub mod models;
pub mod parser;
pub mod url;

pub use api::IssueExportApi;
pub use client::JiraClient;
pub use models::{Comment, CustomFieldValue, CustomFields, Project, Ticket};
pub use parser::{parse_jira_xml, parse_ticket_document, ticket_key_from_title};
pub use url::{browse_url_for_key, convert_browse_url, export_url_with_fields, is_ticket_key};
