pub mod fake_jira;
pub mod fixtures;
