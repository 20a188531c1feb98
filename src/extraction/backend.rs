//! PDF decoder abstraction.
//!
//! The orchestrator never talks to a PDF library directly. It opens documents
//! through a [`PdfBackend`] and reads them through the [`PdfDocument`] handle
//! the backend returns, which keeps decoding swappable and testable.

use crate::domain::DocumentMetadata;
use crate::error::PdfReadResult;
use std::path::Path;

/// Opens PDF documents.
///
/// Implementations must be shareable across threads; every call to
/// [`open`](PdfBackend::open) returns an independent handle.
pub trait PdfBackend: Send + Sync {
    /// Opens and decodes the document at `path`.
    ///
    /// Returns `Encrypted` if the decoder cannot even load the document
    /// because it is password protected, `PermissionDenied` when the file is
    /// unreadable, and `ExtractionFailed` for malformed input.
    fn open(&self, path: &Path) -> PdfReadResult<Box<dyn PdfDocument>>;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &str;
}

/// An open document. Dropping the handle releases it.
pub trait PdfDocument {
    /// Returns whether the document is encrypted.
    fn is_encrypted(&self) -> bool;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracts the text of the page at 0-based `index`.
    ///
    /// A page without text yields an empty string.
    fn extract_text(&self, index: usize) -> PdfReadResult<String>;

    /// Document information, or `None` if the document carries none.
    fn metadata(&self) -> Option<DocumentMetadata>;
}
