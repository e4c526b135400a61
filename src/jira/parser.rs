//! Parsing of Jira issue-xml exports into [`Ticket`] records.

use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, error, trace};

use super::models::{Comment, CustomFieldValue, CustomFields, Project, Ticket};
use crate::error::TicketError;
use crate::markup::utils::{child_text, children_by_tag, find_child_by_tag, matches_tag, non_empty_text};
use crate::markup::{extract_all_text, preprocess_jira_xml, strip_html};

static TICKET_KEY: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\[([A-Z]+-[0-9]+)\]").expect("ticket key pattern is valid"));

/// Preprocess and parse a raw Jira export into a [`Ticket`].
///
/// # Errors
/// - [`TicketError::XmlSyntax`] when the repaired text is still not
///   well-formed XML.
/// - [`TicketError::NoTicketFound`] when the document has no `item` element.
pub fn parse_jira_xml(xml_content: &str) -> Result<Ticket, TicketError> {
  let preprocessed = preprocess_jira_xml(xml_content);

  trace!(
    "Preprocessed XML (first 500 chars):\n{}",
    preprocessed.chars().take(500).collect::<String>()
  );

  let parse_start = Instant::now();
  let options = ParsingOptions {
    allow_dtd: true,
    ..ParsingOptions::default()
  };
  let document = Document::parse_with_options(&preprocessed, options).map_err(|e| {
    error!("XML parse error: {e}");
    TicketError::from(e)
  })?;

  debug!(
    "Parsed Jira export in {duration:?} (length: {length} chars)",
    duration = parse_start.elapsed(),
    length = preprocessed.len()
  );

  parse_ticket_document(&document)
}

/// Build a [`Ticket`] from the first `item` element anywhere in an already
/// parsed document.
pub fn parse_ticket_document(document: &Document) -> Result<Ticket, TicketError> {
  let item = document
    .descendants()
    .find(|node| matches_tag(*node, "item"))
    .ok_or(TicketError::NoTicketFound)?;

  let title = child_text(item, "title").unwrap_or_default();
  let key = ticket_key_from_title(&title);

  let ticket = Ticket {
    key,
    summary: child_text(item, "summary").unwrap_or_default(),
    description: find_child_by_tag(item, "description")
      .map(extract_all_text)
      .unwrap_or_default(),
    link: child_text(item, "link").unwrap_or_default(),
    project: find_child_by_tag(item, "project").map(parse_project),
    issue_type: child_text(item, "type"),
    status: child_text(item, "status"),
    priority: child_text(item, "priority"),
    resolution: child_text(item, "resolution"),
    assignee: child_text(item, "assignee"),
    reporter: child_text(item, "reporter"),
    created: child_text(item, "created"),
    updated: child_text(item, "updated"),
    resolved: child_text(item, "resolved"),
    environment: child_text(item, "environment"),
    timespent: child_text(item, "timespent"),
    votes: child_text(item, "votes"),
    watches: child_text(item, "watches"),
    components: non_empty_texts(children_by_tag(item, "component")),
    labels: non_empty_texts(children_by_tag(item, "labels").flat_map(|labels| children_by_tag(labels, "label"))),
    comments: parse_comments(item),
    custom_fields: parse_custom_fields(item),
    title,
  };

  debug!(
    "Parsed ticket {key:?}: {comments} comments, {fields} custom fields",
    key = ticket.key,
    comments = ticket.comments.len(),
    fields = ticket.custom_fields.len()
  );

  Ok(ticket)
}

/// Extract `PROJ-123` from a title of the form `[PROJ-123] Summary`.
///
/// Returns an empty string when the title does not start with a bracketed
/// key.
pub fn ticket_key_from_title(title: &str) -> String {
  TICKET_KEY
    .captures(title)
    .and_then(|captures| captures.get(1))
    .map(|key| key.as_str().to_string())
    .unwrap_or_default()
}

fn parse_project(node: Node) -> Project {
  Project {
    name: node.text().unwrap_or_default().to_string(),
    id: node.attribute("id").unwrap_or_default().to_string(),
    key: node.attribute("key").unwrap_or_default().to_string(),
  }
}

fn non_empty_texts<'a, 'input: 'a>(nodes: impl Iterator<Item = Node<'a, 'input>>) -> Vec<String> {
  nodes.filter_map(non_empty_text).map(str::to_string).collect()
}

/// Every `comment` element below `item`, at any depth, in document order.
fn parse_comments(item: Node) -> Vec<Comment> {
  item
    .descendants()
    .filter(|node| matches_tag(*node, "comment"))
    .map(|comment| Comment {
      author: comment.attribute("author").unwrap_or_default().to_string(),
      created: comment.attribute("created").unwrap_or_default().to_string(),
      text: extract_all_text(comment),
    })
    .collect()
}

fn parse_custom_fields(item: Node) -> CustomFields {
  let mut custom_fields = CustomFields::new();

  let Some(container) = find_child_by_tag(item, "customfields") else {
    return custom_fields;
  };

  for field in children_by_tag(container, "customfield") {
    let name = child_text(field, "customfieldname")
      .unwrap_or_else(|| field.attribute("id").unwrap_or_default().to_string());

    let values: Vec<String> = find_child_by_tag(field, "customfieldvalues")
      .map(|values| {
        children_by_tag(values, "customfieldvalue")
          .filter_map(non_empty_text)
          .map(|text| strip_html(Some(text)))
          .collect()
      })
      .unwrap_or_default();

    if let Some(value) = CustomFieldValue::from_values(values) {
      custom_fields.insert(name, value);
    }
  }

  custom_fields
}

#[cfg(test)]
mod tests {
  use super::*;

  fn wrap_item(inner: &str) -> String {
    format!("<rss version=\"0.92\"><channel><item>{inner}</item></channel></rss>")
  }

  #[test]
  fn test_key_from_title() {
    assert_eq!(ticket_key_from_title("[TEST-123] Foo"), "TEST-123");
    assert_eq!(ticket_key_from_title("Foo [TEST-123]"), "");
    assert_eq!(ticket_key_from_title("[test-123] lowercase"), "");
    assert_eq!(ticket_key_from_title("[TEST-] missing number"), "");
    assert_eq!(ticket_key_from_title(""), "");
  }

  #[test]
  fn test_parse_basic_fields() {
    let xml = wrap_item(
      "<title>[TEST-123] Foo</title>\
       <link>https://example.atlassian.net/browse/TEST-123</link>\
       <summary>Foo</summary>\
       <type id=\"1\">Bug</type>\
       <status>Open</status>\
       <priority>P3</priority>\
       <assignee accountid=\"u1\">John Doe</assignee>\
       <reporter>Jane Smith</reporter>\
       <created>Mon, 19 May 2025 10:39:36 -0400</created>\
       <votes>0</votes>",
    );
    let ticket = parse_jira_xml(&xml).unwrap();

    assert_eq!(ticket.key, "TEST-123");
    assert_eq!(ticket.title, "[TEST-123] Foo");
    assert_eq!(ticket.summary, "Foo");
    assert_eq!(ticket.link, "https://example.atlassian.net/browse/TEST-123");
    assert_eq!(ticket.issue_type.as_deref(), Some("Bug"));
    assert_eq!(ticket.status.as_deref(), Some("Open"));
    assert_eq!(ticket.priority.as_deref(), Some("P3"));
    assert_eq!(ticket.assignee.as_deref(), Some("John Doe"));
    assert_eq!(ticket.reporter.as_deref(), Some("Jane Smith"));
    assert_eq!(ticket.created.as_deref(), Some("Mon, 19 May 2025 10:39:36 -0400"));
    assert_eq!(ticket.votes.as_deref(), Some("0"));
    assert_eq!(ticket.resolution, None);
    assert_eq!(ticket.watches, None);
  }

  #[test]
  fn test_empty_scalar_is_absent() {
    let xml = wrap_item("<title>t</title><resolution></resolution><environment/>");
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.resolution, None);
    assert_eq!(ticket.environment, None);
  }

  #[test]
  fn test_scalar_fields_are_direct_children_only() {
    let xml = wrap_item("<title>t</title><nested><status>Closed</status></nested>");
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.status, None);
  }

  #[test]
  fn test_missing_required_fields_are_empty() {
    let ticket = parse_jira_xml(&wrap_item("")).unwrap();
    assert_eq!(ticket.key, "");
    assert_eq!(ticket.title, "");
    assert_eq!(ticket.summary, "");
    assert_eq!(ticket.description, "");
    assert_eq!(ticket.link, "");
  }

  #[test]
  fn test_parse_project() {
    let xml = wrap_item(r#"<project id="10119" key="TEST">Example Project Services</project>"#);
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(
      ticket.project,
      Some(Project {
        name: "Example Project Services".to_string(),
        id: "10119".to_string(),
        key: "TEST".to_string(),
      })
    );
  }

  #[test]
  fn test_project_without_attributes() {
    let ticket = parse_jira_xml(&wrap_item("<project/>")).unwrap();
    assert_eq!(ticket.project, Some(Project::default()));
  }

  #[test]
  fn test_components_and_labels_skip_blanks() {
    let xml = wrap_item(
      "<component>Core</component><component></component><component>UI</component>\
       <labels><label>b_label</label><label/><label>a_label</label></labels>",
    );
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.components, vec!["Core", "UI"]);
    assert_eq!(ticket.labels, vec!["b_label", "a_label"]);
  }

  #[test]
  fn test_description_keeps_structure() {
    let xml = wrap_item("<description><p>Intro</p><ul><li>one</li><li>two<br/>three</li></ul></description>");
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.description, "Intro\n- one\n- two\n- three");
  }

  #[test]
  fn test_custom_fields_scalar_and_list() {
    let xml = wrap_item(
      r#"<customfields>
        <customfield id="customfield_1" key="select">
          <customfieldname>Severity</customfieldname>
          <customfieldvalues><customfieldvalue key="1">S3</customfieldvalue></customfieldvalues>
        </customfield>
        <customfield id="customfield_2" key="multiselect">
          <customfieldname>Platforms</customfieldname>
          <customfieldvalues>
            <customfieldvalue>Linux</customfieldvalue>
            <customfieldvalue>&lt;p&gt;macOS&lt;/p&gt;</customfieldvalue>
          </customfieldvalues>
        </customfield>
      </customfields>"#,
    );
    let ticket = parse_jira_xml(&xml).unwrap();

    assert_eq!(
      ticket.custom_fields.get("Severity"),
      Some(&CustomFieldValue::Single("S3".to_string()))
    );
    assert_eq!(
      ticket.custom_fields.get("Platforms"),
      Some(&CustomFieldValue::Multiple(vec!["Linux".to_string(), "macOS".to_string()]))
    );
  }

  #[test]
  fn test_custom_field_values_parsed_as_html() {
    let xml = wrap_item(
      "<customfields><customfield id=\"customfield_7\"><customfieldname>Notes</customfieldname>\
       <customfieldvalues><customfieldvalue>&lt;p&gt;Caf&amp;eacute;&lt;p&gt;Second line</customfieldvalue></customfieldvalues>\
       </customfield></customfields>",
    );
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(
      ticket.custom_fields.get("Notes"),
      Some(&CustomFieldValue::Single("Caf\u{e9}\n\nSecond line".to_string()))
    );
  }

  #[test]
  fn test_indented_description_list_is_tight() {
    let xml = wrap_item("<description>\n  <p>Steps:</p>\n  <ol>\n    <li>Open</li>\n    <li>Close</li>\n  </ol>\n</description>");
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.description, "Steps:\n- Open\n- Close");
  }

  #[test]
  fn test_custom_field_name_falls_back_to_id() {
    let xml = wrap_item(
      "<customfields><customfield id=\"customfield_99\">\
       <customfieldvalues><customfieldvalue>x</customfieldvalue></customfieldvalues>\
       </customfield></customfields>",
    );
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(
      ticket.custom_fields.get("customfield_99"),
      Some(&CustomFieldValue::Single("x".to_string()))
    );
  }

  #[test]
  fn test_custom_field_without_values_is_skipped() {
    let xml = wrap_item(
      "<customfields>\
       <customfield id=\"a\"><customfieldname>Empty</customfieldname><customfieldvalues/></customfield>\
       <customfield id=\"b\"><customfieldname>None</customfieldname></customfield>\
       </customfields>",
    );
    let ticket = parse_jira_xml(&xml).unwrap();
    assert!(ticket.custom_fields.is_empty());
  }

  #[test]
  fn test_later_custom_field_overwrites_earlier() {
    let xml = wrap_item(
      "<customfields>\
       <customfield id=\"a\"><customfieldname>Team</customfieldname>\
       <customfieldvalues><customfieldvalue>Red</customfieldvalue></customfieldvalues></customfield>\
       <customfield id=\"b\"><customfieldname>Team</customfieldname>\
       <customfieldvalues><customfieldvalue>Blue</customfieldvalue></customfieldvalues></customfield>\
       </customfields>",
    );
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.custom_fields.len(), 1);
    assert_eq!(
      ticket.custom_fields.get("Team"),
      Some(&CustomFieldValue::Single("Blue".to_string()))
    );
  }

  #[test]
  fn test_comments_found_at_any_depth() {
    let xml = wrap_item(
      r#"<comments>
        <comment id="1" author="alice" created="Mon, 1 Jan 2024">First <b>comment</b></comment>
        <comment id="2" author="bob" created="Tue, 2 Jan 2024"><p>Second</p></comment>
      </comments>
      <comment author="carol">Direct</comment>"#,
    );
    let ticket = parse_jira_xml(&xml).unwrap();

    assert_eq!(ticket.comments.len(), 3);
    assert_eq!(
      ticket.comments[0],
      Comment {
        author: "alice".to_string(),
        created: "Mon, 1 Jan 2024".to_string(),
        text: "First comment".to_string(),
      }
    );
    assert_eq!(ticket.comments[1].text, "Second");
    assert_eq!(ticket.comments[2].author, "carol");
    assert_eq!(ticket.comments[2].created, "");
  }

  #[test]
  fn test_first_item_wins() {
    let xml = "<rss><channel><item><title>[A-1] first</title></item><item><title>[B-2] second</title></item></channel></rss>";
    let ticket = parse_jira_xml(xml).unwrap();
    assert_eq!(ticket.key, "A-1");
  }

  #[test]
  fn test_item_found_anywhere() {
    let ticket = parse_jira_xml("<root><deep><item><summary>s</summary></item></deep></root>").unwrap();
    assert_eq!(ticket.summary, "s");
  }

  #[test]
  fn test_no_item_is_error() {
    let result = parse_jira_xml("<rss><channel><title>Test</title></channel></rss>");
    assert!(matches!(result, Err(TicketError::NoTicketFound)));
  }

  #[test]
  fn test_unterminated_tag_is_syntax_error() {
    let result = parse_jira_xml("<invalid>unclosed tag");
    let error = result.unwrap_err();
    assert!(matches!(error, TicketError::XmlSyntax { .. }));
    assert!(error.to_string().contains("Failed to parse XML"));
  }

  #[test]
  fn test_leading_garbage_and_bare_ampersands_tolerated() {
    let xml = format!("garbage{}", wrap_item("<summary>This & that</summary>"));
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.summary, "This that");
  }

  #[test]
  fn test_two_rel_attributes_repaired() {
    let xml = wrap_item(r##"<comment author="a"><a rel="x" href="#" rel="y">link</a> text</comment>"##);
    let ticket = parse_jira_xml(&xml).unwrap();
    assert_eq!(ticket.comments[0].text, "link text");
  }

  #[test]
  fn test_three_rel_attributes_still_rejected() {
    let xml = wrap_item(r#"<comment><a rel="x" rel="y" rel="z">link</a></comment>"#);
    assert!(matches!(parse_jira_xml(&xml), Err(TicketError::XmlSyntax { .. })));
  }

  #[test]
  fn test_dtd_is_accepted() {
    let xml = format!("<!DOCTYPE rss [<!ENTITY x \"y\">]>{}", wrap_item("<summary>s</summary>"));
    assert!(parse_jira_xml(&xml).is_ok());
  }
}
