//! The `pdf_read` tool.

use super::{ErrorResult, Tool, ToolRegistry};
use crate::error::PdfReadResult;
use crate::extraction::{
    ExtractionOptions, ExtractionResult, ExtractionService, DEFAULT_MAX_PAGES, MAX_PAGES_LIMIT,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Name the tool is registered under.
pub const PDF_READ_TOOL: &str = "pdf_read";

const DESCRIPTION: &str = "Extract text content from a PDF file. \
Reads a local PDF and returns its text with a marker line before each page, \
plus document metadata (title, author, dates) unless disabled. \
Pages may be selected as \"all\" (default), a single page (\"5\"), \
an inclusive range (\"1-10\") or a list (\"1,3,5\"). \
At most max_pages pages (1-1000, default 100) are extracted. \
Encrypted PDFs are rejected.";

/// Arguments accepted by `pdf_read`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PdfReadArgs {
    pub file_path: String,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub max_pages: Option<i64>,
    #[serde(default)]
    pub include_metadata: Option<bool>,
}

impl PdfReadArgs {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            pages: None,
            max_pages: None,
            include_metadata: None,
        }
    }

    pub fn options(&self) -> ExtractionOptions {
        ExtractionOptions::new()
            .with_max_pages(self.max_pages.unwrap_or(DEFAULT_MAX_PAGES))
            .with_metadata(self.include_metadata.unwrap_or(true))
    }
}

/// Outcome of one `pdf_read` call: exactly one of a result or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PdfReadResponse {
    Success(ExtractionResult),
    Error(ErrorResult),
}

impl PdfReadResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<PdfReadResult<ExtractionResult>> for PdfReadResponse {
    fn from(result: PdfReadResult<ExtractionResult>) -> Self {
        match result {
            Ok(extracted) => Self::Success(extracted),
            Err(err) => Self::Error(err.into()),
        }
    }
}

/// Tool wrapping an [`ExtractionService`].
pub struct PdfReadTool {
    service: ExtractionService,
}

impl PdfReadTool {
    pub fn new(service: ExtractionService) -> Self {
        Self { service }
    }

    /// Runs one extraction with already-decoded arguments.
    pub fn run(&self, args: &PdfReadArgs) -> PdfReadResponse {
        debug!(file_path = %args.file_path, pages = ?args.pages, "pdf_read invoked");

        let result =
            self.service
                .extract(&args.file_path, args.pages.as_deref(), &args.options());
        if let Err(e) = &result {
            warn!(error = %e, kind = ?e.kind(), file_path = %args.file_path, "pdf_read failed");
        }

        result.into()
    }
}

impl Default for PdfReadTool {
    fn default() -> Self {
        Self::new(ExtractionService::with_lopdf_backend())
    }
}

impl Tool for PdfReadTool {
    fn name(&self) -> &str {
        PDF_READ_TOOL
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Absolute or relative path to the PDF file"
                },
                "pages": {
                    "type": "string",
                    "description": "Pages to extract: \"all\", \"5\", \"1-10\" or \"1,3,5\". Defaults to all pages"
                },
                "max_pages": {
                    "type": "integer",
                    "description": "Maximum number of pages to extract",
                    "default": DEFAULT_MAX_PAGES,
                    "minimum": 1,
                    "maximum": MAX_PAGES_LIMIT
                },
                "include_metadata": {
                    "type": "boolean",
                    "description": "Whether to include PDF metadata",
                    "default": true
                }
            },
            "required": ["file_path"]
        })
    }

    fn call(&self, args: &Value) -> Value {
        let response = match PdfReadArgs::deserialize(args) {
            Ok(args) => self.run(&args),
            Err(e) => {
                warn!(error = %e, "pdf_read called with invalid arguments");
                PdfReadResponse::Error(ErrorResult::new(format!("Invalid arguments: {}", e)))
            }
        };

        serde_json::to_value(&response).unwrap_or_else(|e| {
            ErrorResult::new(format!("Failed to serialize result: {}", e)).to_value()
        })
    }
}

/// Registers the PDF tools with a host registry.
pub fn register_tools(registry: &mut ToolRegistry) {
    registry.register(Box::new(PdfReadTool::default()));
}
