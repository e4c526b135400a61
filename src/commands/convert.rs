//! The default command: read one export, convert it, and write the result.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::format::OutputFormat;
use crate::jira::{IssueExportApi, JiraClient, browse_url_for_key, is_ticket_key, parse_jira_xml};
use crate::markdown::format_ticket_markdown;

/// Where the raw export comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
  Stdin,
  File(PathBuf),
  Url(String),
}

impl InputSource {
  /// Classify the positional `INPUT` argument.
  ///
  /// `None` and `-` read stdin, anything with a scheme is fetched, an
  /// existing path is read from disk, and a bare ticket key is resolved
  /// against `base_url`. Everything else is treated as a file path.
  ///
  /// # Errors
  /// Returns an error for a ticket key when no `base_url` is configured.
  pub fn resolve(input: Option<&str>, base_url: Option<&str>) -> Result<Self> {
    let Some(input) = input.filter(|input| *input != "-") else {
      return Ok(Self::Stdin);
    };

    if input.contains("://") {
      return Ok(Self::Url(input.to_string()));
    }

    let path = Path::new(input);
    if !path.exists() && is_ticket_key(input) {
      let Some(base_url) = base_url else {
        bail!("--url is required when using a ticket key");
      };
      return Ok(Self::Url(browse_url_for_key(base_url, input)));
    }

    Ok(Self::File(path.to_path_buf()))
  }
}

/// A ticket rendered in its output format.
#[derive(Debug, Clone)]
pub struct RenderedTicket {
  /// Ticket key, empty when the title carried none.
  pub key: String,
  pub content: String,
}

/// Read the raw export text for `source`, fetching URLs through `api`.
///
/// # Errors
/// Fails on IO errors, on fetch errors, and for a URL source when no `api`
/// was supplied.
pub async fn read_export(source: &InputSource, api: Option<&dyn IssueExportApi>) -> Result<String> {
  match source {
    InputSource::Stdin => {
      info!("Reading Jira export from stdin");
      let mut xml = String::new();
      tokio::io::stdin()
        .read_to_string(&mut xml)
        .await
        .context("Failed to read export from stdin")?;
      Ok(xml)
    }
    InputSource::File(path) => {
      info!("Reading Jira export from {}", path.display());
      tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read export from {}", path.display()))
    }
    InputSource::Url(url) => {
      let Some(api) = api else {
        bail!("No HTTP client available to fetch {url}");
      };
      api.fetch_issue_xml(url).await
    }
  }
}

/// Parse `xml` and render the ticket as `format`.
pub fn render_export(xml: &str, format: OutputFormat) -> Result<RenderedTicket> {
  let ticket = parse_jira_xml(xml)?;

  let content = match format {
    OutputFormat::Markdown => format_ticket_markdown(&ticket),
    OutputFormat::Json => serde_json::to_string_pretty(&ticket).context("Failed to serialize ticket")?,
  };

  Ok(RenderedTicket {
    key: ticket.key,
    content: with_trailing_newline(content),
  })
}

/// File to write for `output`: the path itself, or `<KEY>.<ext>` inside it
/// when `output` is an existing directory.
pub fn resolve_output_path(output: &Path, key: &str, format: OutputFormat) -> PathBuf {
  if !output.is_dir() {
    return output.to_path_buf();
  }

  let stem = if key.is_empty() { "ticket" } else { key };
  output.join(format!("{stem}.{}", format.file_extension()))
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// # Errors
/// Fails if `path` exists and `overwrite` is false, or on any IO error.
pub async fn write_output(path: &Path, content: &str, overwrite: bool) -> Result<()> {
  if path.exists() && !overwrite {
    bail!("File already exists: {}. Use --overwrite to replace it.", path.display());
  }

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    tokio::fs::create_dir_all(parent)
      .await
      .with_context(|| format!("Failed to create directory {}", parent.display()))?;
  }

  tokio::fs::write(path, content)
    .await
    .with_context(|| format!("Failed to write output to {}", path.display()))
}

fn with_trailing_newline(mut content: String) -> String {
  if !content.ends_with('\n') {
    content.push('\n');
  }
  content
}

/// Handle conversion of a single export
pub(crate) async fn handle_convert_command(input: Option<&str>, cli: &Cli, colors: &ColorScheme) {
  if let Err(e) = convert(input, cli, colors).await {
    eprintln!("{} {}", colors.error("✗"), colors.error("Failed to convert ticket"));
    eprintln!("  {}: {e:#}", colors.emphasis("Error"));
    process::exit(1);
  }
}

async fn convert(input: Option<&str>, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let source = InputSource::resolve(input, cli.jira.url.as_deref())?;
  debug!("Resolved input to {source:?}");

  let client = match source {
    InputSource::Url(_) => Some(JiraClient::new(cli.jira.timeout)?),
    InputSource::Stdin | InputSource::File(_) => None,
  };
  let xml = read_export(&source, client.as_ref().map(|client| client as &dyn IssueExportApi)).await?;
  let rendered = render_export(&xml, cli.output.format)?;

  let Some(ref output) = cli.output.output else {
    print!("{}", rendered.content);
    return Ok(());
  };

  let path = resolve_output_path(output, &rendered.key, cli.output.format);
  write_output(&path, &rendered.content, cli.output.overwrite).await?;

  if !cli.behavior.quiet {
    let label = if rendered.key.is_empty() { "ticket" } else { rendered.key.as_str() };
    eprintln!(
      "{} Wrote {} to {}",
      colors.success("✓"),
      colors.emphasis(label),
      colors.path(path.display())
    );
  }

  Ok(())
}
