//! Command-line host for the `pdf_read` tool.
//!
//! Registers the PDF tools, invokes `pdf_read` with arguments taken from the
//! command line and prints the JSON record the tool returns.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pdf_read::extraction::DEFAULT_MAX_PAGES;
use pdf_read::tool::{register_tools, ToolRegistry, PDF_READ_TOOL};

/// PDF Read Tool
///
/// Extract text and metadata from a PDF file as a JSON record.
#[derive(Parser)]
#[command(name = "pdf-read")]
#[command(version, about, long_about = None)]
struct Cli {
    /// PDF file path
    #[arg(value_name = "FILE", required_unless_present = "schema")]
    file: Option<String>,

    /// Pages to extract: "all", "5", "1-10" or "1,3,5"
    #[arg(short, long, value_name = "PAGES", allow_hyphen_values = true)]
    pages: Option<String>,

    /// Maximum number of pages to extract (clamped to 1-1000)
    #[arg(short, long, default_value_t = DEFAULT_MAX_PAGES, allow_negative_numbers = true)]
    max_pages: i64,

    /// Leave document metadata out of the result
    #[arg(long)]
    no_metadata: bool,

    /// Write the JSON record to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON record
    #[arg(long)]
    pretty: bool,

    /// Print the registered tool schemas and exit
    #[arg(long)]
    schema: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Tool invocation handler.
struct ToolHost {
    registry: ToolRegistry,
    pretty: bool,
}

impl ToolHost {
    fn new(pretty: bool) -> Self {
        let mut registry = ToolRegistry::new();
        register_tools(&mut registry);
        Self { registry, pretty }
    }

    fn render(&self, value: &Value) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    fn emit(&self, value: &Value, output: Option<&Path>) -> Result<()> {
        let text = self.render(value)?;
        match output {
            Some(path) => std::fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => println!("{}", text),
        }
        Ok(())
    }

    /// Invokes `pdf_read`, emits its record and fails if the record is an error.
    fn read(&self, args: &Value, output: Option<&Path>) -> Result<()> {
        let record = self.registry.invoke(PDF_READ_TOOL, args);
        self.emit(&record, output)?;

        if let Some(error) = record.get("error").and_then(Value::as_str) {
            anyhow::bail!("{}", error);
        }
        Ok(())
    }
}

/// Builds the tool argument object from command-line flags.
fn build_args(cli: &Cli, file: &str) -> Value {
    let mut args = serde_json::json!({
        "file_path": file,
        "max_pages": cli.max_pages,
        "include_metadata": !cli.no_metadata,
    });
    if let Some(pages) = &cli.pages {
        args["pages"] = Value::String(pages.clone());
    }
    args
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pdf_read=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let host = ToolHost::new(cli.pretty);

    if cli.schema {
        return host.emit(&host.registry.schemas(), cli.output.as_deref());
    }

    let file = cli
        .file
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("FILE is required"))?;
    host.read(&build_args(&cli, file), cli.output.as_deref())
}
