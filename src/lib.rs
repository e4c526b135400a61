//! Jira issue export to Markdown library
//!
//! This library converts a single Jira issue-xml export into Markdown. The
//! pipeline repairs known malformations in the raw export, parses it into a
//! [`jira::Ticket`], and renders that record with
//! [`markdown::format_ticket_markdown`].
//!
//! ```
//! let xml = r#"<rss><channel><item>
//!   <title>[DEMO-1] Sample</title>
//!   <summary>Sample ticket</summary>
//!   <description><p>First paragraph</p><ul><li>one</li><li>two</li></ul></description>
//! </item></channel></rss>"#;
//!
//! let markdown = jira_md::convert::parse_jira_to_markdown(xml);
//! assert!(markdown.starts_with("# DEMO-1: Sample ticket"));
//! assert!(markdown.contains("First paragraph\n- one\n- two"));
//! ```

pub mod cli;
pub mod color;
pub mod commands;
pub mod convert;
pub mod error;
pub mod format;
pub mod jira;
pub mod markdown;
pub mod markup;

pub use convert::{convert_xml_to_markdown, parse_jira_to_markdown};
pub use error::TicketError;
