//! Error types for ticket parsing.

use thiserror::Error;

/// Errors raised while turning a Jira XML export into a [`crate::jira::Ticket`].
#[derive(Debug, Error)]
pub enum TicketError {
  /// The preprocessed document is still not well-formed XML.
  #[error("Failed to parse XML: {source}")]
  XmlSyntax {
    #[from]
    source: roxmltree::Error,
  },

  /// The document parsed but carries no `item` element.
  #[error("No ticket found in XML")]
  NoTicketFound,
}
