//! End-to-end conversion of a Jira XML export into Markdown.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use crate::error::TicketError;
use crate::jira::parse_jira_xml;
use crate::markdown::format_ticket_markdown;

/// Parse `xml_content` and render the ticket as Markdown.
///
/// # Errors
/// Returns the [`TicketError`] raised by [`parse_jira_xml`].
pub fn convert_xml_to_markdown(xml_content: &str) -> Result<String, TicketError> {
  let ticket = parse_jira_xml(xml_content)?;
  Ok(format_ticket_markdown(&ticket))
}

/// Convert `xml_content` to Markdown, never failing.
///
/// Ticket errors come back as `"Error: <message>"`. A panic anywhere in the
/// chain is caught and comes back as `"Unexpected error: <message>"`. Use
/// [`convert_xml_to_markdown`] to get a structured error instead.
pub fn parse_jira_to_markdown(xml_content: &str) -> String {
  match panic::catch_unwind(AssertUnwindSafe(|| convert_xml_to_markdown(xml_content))) {
    Ok(Ok(markdown)) => markdown,
    Ok(Err(e)) => format!("Error: {e}"),
    Err(payload) => {
      let message = panic_message(payload.as_ref());
      error!("Conversion panicked: {message}");
      format!("Unexpected error: {message}")
    }
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "unknown panic".to_string()
  }
}
