//! Sample Jira issue-xml exports for testing

/// Export with stray leading bytes, a bare ampersand, an HTML entity,
/// multi-valued and escaped custom fields, and a repeated custom field name.
pub fn rich_export() -> &'static str {
  "\u{feff}garbage<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<rss version=\"0.92\">
<channel>
<title>Example Jira</title>
<link>https://example.atlassian.net</link>
<item>
<title>[TEST-123] Lorem Ipsum Software crashes on save</title>
<link>https://example.atlassian.net/browse/TEST-123</link>
<project id=\"10119\" key=\"TEST\">Example Project Services</project>
<description><p>Saving a draft crashes the editor.</p><p>Steps to reproduce:</p><ol><li>Open a draft</li><li>Press save<br/>Wait a moment</li></ol><p>Seen on R & D builds &ndash; nightly only.</p></description>
<key id=\"98765\">TEST-123</key>
<summary>Lorem Ipsum Software crashes on save</summary>
<type id=\"1\">Bug</type>
<priority id=\"3\">P3</priority>
<status id=\"10001\">More Info</status>
<resolution id=\"-1\">Unresolved</resolution>
<assignee accountid=\"user-id-001\">John Doe</assignee>
<reporter accountid=\"user-id-002\">Jane Smith</reporter>
<labels>
<label>Example_Template</label>
<label>example_label</label>
<label></label>
<label>support_label</label>
</labels>
<created>Mon, 19 May 2025 10:39:36 -0400</created>
<updated>Tue, 20 May 2025 08:00:00 -0400</updated>
<votes>0</votes>
<watches>2</watches>
<component>Core Component</component>
<component></component>
<component>Editor</component>
<comments>
<comment id=\"1\" author=\"user-id-003\" created=\"Mon, 19 May 2025 11:00:00 -0400\"><p>Lorem ipsum dolor sit amet.</p></comment>
<comment id=\"2\" author=\"user-id-004\" created=\"Mon, 19 May 2025 12:00:00 -0400\"><p>Could not reproduce:</p><ul><li>Linux</li><li>macOS</li></ul></comment>
</comments>
<customfields>
<customfield id=\"customfield_10010\" key=\"com.atlassian.jira.plugin.system.customfieldtypes:select\">
<customfieldname>Actual Discovery Stage</customfieldname>
<customfieldvalues><customfieldvalue>SE12 Customer Lab</customfieldvalue></customfieldvalues>
</customfield>
<customfield id=\"customfield_10020\">
<customfieldname>Severity</customfieldname>
<customfieldvalues><customfieldvalue>S1</customfieldvalue></customfieldvalues>
</customfield>
<customfield id=\"customfield_10030\">
<customfieldname>Platforms</customfieldname>
<customfieldvalues><customfieldvalue>Linux</customfieldvalue><customfieldvalue>macOS</customfieldvalue></customfieldvalues>
</customfield>
<customfield id=\"customfield_10040\">
<customfieldvalues><customfieldvalue>&lt;p&gt;Escalated &lt;b&gt;twice&lt;/b&gt;&lt;/p&gt;</customfieldvalue></customfieldvalues>
</customfield>
<customfield id=\"customfield_10050\">
<customfieldname>Severity</customfieldname>
<customfieldvalues><customfieldvalue>S3</customfieldvalue></customfieldvalues>
</customfield>
</customfields>
</item>
</channel>
</rss>
"
}

/// Export whose comment anchor carries two `rel` attributes.
pub fn duplicate_rel_export() -> &'static str {
  r#"<rss version="0.92">
<channel>
<title>Jira</title>
<link>https://example.atlassian.net</link>
<description>Test file with duplicate rel attribute</description>
<item>
<title>[TEST-456] Test Issue with Duplicate Rel</title>
<link>https://example.atlassian.net/browse/TEST-456</link>
<key id="123456">TEST-456</key>
<summary>Test Issue with Duplicate Rel</summary>
<description>Test description</description>
<type>Bug</type>
<status>Open</status>
<priority>P2</priority>
<assignee accountid="user-001">Test User</assignee>
<reporter accountid="user-002">Another User</reporter>
<created>Mon, 19 May 2025 10:39:36 -0400</created>
<comments>
<comment id="11240113" author="user-003" created="Mon, 19 May 2025 10:39:36 -0400">
<p><a href="https://example.atlassian.net/secure/ViewProfile.jspa?accountId=user-004"
class="user-hover" rel="user-004"
data-account-id="user-004"
accountid="user-004" rel="noreferrer">Test User</a>
this is a test comment with duplicate rel attributes.</p>
</comment>
</comments>
</item>
</channel>
</rss>"#
}

/// Export with comments nested at different depths below `item`.
pub fn nested_comments_export() -> &'static str {
  r#"<rss><channel><item>
<title>[TEST-7] Nested comments</title>
<summary>Nested comments</summary>
<description></description>
<comments>
<comment author="a" created="1">first</comment>
<thread><comment author="b" created="2">second</comment></thread>
</comments>
<comment author="c" created="3">third</comment>
</item></channel></rss>"#
}

/// Well-formed document without an `item` element.
pub fn export_without_item() -> &'static str {
  "<rss><channel><title>Test</title></channel></rss>"
}
