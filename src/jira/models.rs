//! Records describing a single Jira ticket parsed from an issue-xml export.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Project a ticket belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct Project {
  /// Display name, taken from the `<project>` element text.
  pub name: String,
  /// Numeric project ID attribute.
  pub id: String,
  /// Project key attribute, such as `PROJ`.
  pub key: String,
}

/// A single comment on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct Comment {
  /// Author account ID or user name.
  pub author: String,
  /// Raw creation timestamp as Jira printed it.
  pub created: String,
  /// Comment body as structured plain text.
  pub text: String,
}

/// Value of a custom field: a scalar when Jira reported exactly one value, a
/// list otherwise.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
  Single(String),
  Multiple(Vec<String>),
}

impl CustomFieldValue {
  /// Build a value from the extracted values in document order.
  ///
  /// Returns `None` for an empty list.
  pub fn from_values(mut values: Vec<String>) -> Option<Self> {
    match values.len() {
      0 => None,
      1 => values.pop().map(Self::Single),
      _ => Some(Self::Multiple(values)),
    }
  }
}

impl fmt::Display for CustomFieldValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Single(value) => f.write_str(value),
      Self::Multiple(values) => f.write_str(&values.join(", ")),
    }
  }
}

/// Custom fields keyed by display name, in first-seen order.
///
/// Inserting a name that already exists replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomFields {
  entries: Vec<(String, CustomFieldValue)>,
}

impl CustomFields {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or replace the value stored under `name`.
  pub fn insert(&mut self, name: impl Into<String>, value: CustomFieldValue) {
    let name = name.into();
    match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
      Some((_, slot)) => *slot = value,
      None => self.entries.push((name, value)),
    }
  }

  pub fn get(&self, name: &str) -> Option<&CustomFieldValue> {
    self
      .entries
      .iter()
      .find(|(existing, _)| existing == name)
      .map(|(_, value)| value)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate over `(name, value)` pairs in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomFieldValue)> {
    self.entries.iter().map(|(name, value)| (name.as_str(), value))
  }
}

impl Serialize for CustomFields {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (name, value) in &self.entries {
      map.serialize_entry(name, value)?;
    }
    map.end()
  }
}

/// A Jira ticket as read from an issue-xml export.
///
/// Optional fields are `None` when the export did not carry them, which is
/// distinct from `Some` of an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct Ticket {
  /// Ticket key such as `PROJ-123`, or empty when the title has no
  /// bracketed key prefix.
  pub key: String,
  pub title: String,
  pub summary: String,
  /// Structured plain text of the description body.
  pub description: String,
  pub link: String,

  pub project: Option<Project>,

  #[serde(rename = "type")]
  pub issue_type: Option<String>,
  pub status: Option<String>,
  pub priority: Option<String>,
  pub resolution: Option<String>,
  pub assignee: Option<String>,
  pub reporter: Option<String>,

  pub created: Option<String>,
  pub updated: Option<String>,
  pub resolved: Option<String>,

  pub environment: Option<String>,
  pub timespent: Option<String>,
  pub votes: Option<String>,
  pub watches: Option<String>,

  pub components: Vec<String>,
  pub labels: Vec<String>,
  pub comments: Vec<Comment>,
  pub custom_fields: CustomFields,
}
