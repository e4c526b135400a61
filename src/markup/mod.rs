//! Text processing for the HTML and XML found in Jira exports.
//!
//! - [`preprocess`] - repairs known XML malformations before parsing
//! - [`extract`] - structure-preserving text extraction for rich text bodies
//! - [`html`] - flattening of short inline-HTML snippets
//! - [`html_entities`] - HTML entity expansion ahead of XML parsing
//! - [`utils`] - `roxmltree` navigation helpers

pub mod extract;
pub mod html;
pub mod html_entities;
pub mod preprocess;
pub mod utils;

pub use extract::extract_all_text;
pub use html::strip_html;
pub use preprocess::preprocess_jira_xml;
