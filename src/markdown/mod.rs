//! Markdown rendering for parsed Jira tickets.
//!
//! - [`builder`] - line buffer with paragraph spacing rules
//!
//! # Example
//!
//! ```
//! use jira_md::jira::Ticket;
//! use jira_md::markdown::format_ticket_markdown;
//!
//! let ticket = Ticket {
//!   key: "TEST-1".to_string(),
//!   summary: "Login fails".to_string(),
//!   status: Some("Open".to_string()),
//!   ..Default::default()
//! };
//!
//! let markdown = format_ticket_markdown(&ticket);
//! assert!(markdown.starts_with("# TEST-1: Login fails"));
//! assert!(markdown.contains("**Status:** Open"));
//! ```

pub mod builder;

use tracing::debug;

pub use builder::MarkdownBuilder;

use crate::jira::Ticket;

/// Render `ticket` as a Markdown document.
///
/// Layout, top to bottom: title header, link, project line, the basic fields
/// that are set, components, labels, then `Description`, `Custom Fields` and
/// `Comments` sections. Empty sections are left out entirely.
pub fn format_ticket_markdown(ticket: &Ticket) -> String {
  let mut md = MarkdownBuilder::new();

  md.add_header(&display_title(ticket), 1);

  md.add_field("Link", Some(ticket.link.as_str()));
  if !ticket.link.is_empty() {
    md.add_line_break();
  }

  if let Some(project) = &ticket.project {
    md.add_line(format!(
      "**Project:** {} ({}, ID: {})",
      project.name, project.key, project.id
    ));
    md.add_line_break();
  }

  let basic_fields = [
    ("Type", &ticket.issue_type),
    ("Status", &ticket.status),
    ("Priority", &ticket.priority),
    ("Resolution", &ticket.resolution),
    ("Assignee", &ticket.assignee),
    ("Reporter", &ticket.reporter),
    ("Created", &ticket.created),
    ("Updated", &ticket.updated),
    ("Resolved", &ticket.resolved),
    ("Environment", &ticket.environment),
    ("Time Spent", &ticket.timespent),
    ("Votes", &ticket.votes),
    ("Watches", &ticket.watches),
  ];

  let mut fields_added = false;
  for (label, value) in basic_fields {
    if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
      md.add_field(label, Some(value));
      fields_added = true;
    }
  }
  if fields_added {
    md.add_line_break();
  }

  md.add_list("Components", &ticket.components);
  if !ticket.components.is_empty() {
    md.add_line_break();
  }

  md.add_list("Labels", &ticket.labels);
  if !ticket.labels.is_empty() {
    md.add_line_break();
  }

  md.add_section("Description", &ticket.description, 2);

  if !ticket.custom_fields.is_empty() {
    md.add_header("Custom Fields", 2);
    md.add_bullet_list(ticket.custom_fields.iter());
    md.add_line_break();
  }

  if !ticket.comments.is_empty() {
    md.add_header("Comments", 2);
    for (index, comment) in ticket.comments.iter().enumerate() {
      md.add_header(&format!("Comment {}", index + 1), 3);
      md.add_field("Author", Some(comment.author.as_str()));
      md.add_field("Created", Some(comment.created.as_str()));
      md.add_line_break();
      md.add_line(comment.text.as_str());
      md.add_line_break();
    }
  }

  let markdown = md.build();
  debug!(
    "Rendered {} into {} bytes of Markdown",
    if ticket.key.is_empty() { "ticket" } else { ticket.key.as_str() },
    markdown.len()
  );
  markdown
}

/// `KEY: summary` when the ticket has a key, otherwise the summary alone.
/// An empty summary falls back to the title, with the bracketed key removed.
fn display_title(ticket: &Ticket) -> String {
  if ticket.key.is_empty() {
    return if ticket.summary.is_empty() {
      ticket.title.clone()
    } else {
      ticket.summary.clone()
    };
  }

  let title = if ticket.summary.is_empty() {
    ticket.title.replace(&format!("[{}]", ticket.key), "").trim().to_string()
  } else {
    ticket.summary.clone()
  };

  format!("{}: {title}", ticket.key)
}
