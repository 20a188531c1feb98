//! PDF text extraction packaged as an agent tool.
//!
//! This library extracts the text (and optionally the document metadata) of
//! selected pages of a PDF file. It is exposed to agent runtimes as the
//! `pdf_read` tool, which always answers with a JSON record: either the
//! extraction result or `{"error": "..."}`.
//!
//! # Architecture
//!
//! - [`domain`]: Page selection parsing and metadata types (pure, no I/O)
//! - [`extraction`]: Path validation, the PDF backend abstraction and the
//!   orchestrating service
//! - [`tool`]: Tool trait, registry and the `pdf_read` tool
//! - [`error`]: Error taxonomy
//!
//! # Quick Start
//!
//! ```no_run
//! use pdf_read::{ExtractionOptions, ExtractionService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ExtractionService::with_lopdf_backend();
//! let result = service.extract("report.pdf", Some("1-3"), &ExtractionOptions::default())?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```
//!
//! # Page Selection
//!
//! ```
//! use pdf_read::domain::parse_page_range;
//!
//! assert_eq!(parse_page_range(Some("2,5,1"), 10, 100).unwrap(), vec![1, 4, 0]);
//! assert_eq!(parse_page_range(Some("3-7"), 10, 3).unwrap(), vec![2, 3, 4]);
//! ```
//!
//! # As a Tool
//!
//! ```no_run
//! use pdf_read::tool::{register_tools, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! register_tools(&mut registry);
//!
//! let out = registry.invoke("pdf_read", &serde_json::json!({ "file_path": "report.pdf" }));
//! if let Some(error) = out.get("error") {
//!     eprintln!("{}", error);
//! }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod extraction;
pub mod tool;

// Re-exports for convenient access
pub use domain::{parse_page_range, DocumentMetadata, PageSelection};
pub use error::{PdfReadError, PdfReadErrorKind, PdfReadResult};
pub use extraction::{
    ExtractionOptions, ExtractionResult, ExtractionService, LopdfBackend, PdfBackend, PdfDocument,
};
pub use tool::{ErrorResult, PdfReadResponse, PdfReadTool, Tool, ToolRegistry};
