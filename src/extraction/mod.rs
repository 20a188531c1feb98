//! Extraction orchestration.
//!
//! [`ExtractionService`] runs one extraction as a straight sequence of
//! checks: validate the path, open the document, reject encryption, resolve
//! the page selection, pull text per page, then assemble the result. The
//! first failing step ends the call.

pub mod backend;
pub mod lopdf_backend;
pub mod options;
pub mod result;

pub use backend::{PdfBackend, PdfDocument};
pub use lopdf_backend::LopdfBackend;
pub use options::{ExtractionOptions, DEFAULT_MAX_PAGES, MAX_PAGES_LIMIT};
pub use result::{page_marker, ExtractionResult, PAGE_SEPARATOR};

use crate::domain::parse_page_range;
use crate::error::{PdfReadError, PdfReadResult};
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Extraction service delegating PDF decoding to a backend.
pub struct ExtractionService {
    backend: Box<dyn PdfBackend>,
}

impl ExtractionService {
    /// Creates a new extraction service with the specified backend.
    pub fn new(backend: Box<dyn PdfBackend>) -> Self {
        Self { backend }
    }

    /// Creates a service backed by `lopdf`.
    pub fn with_lopdf_backend() -> Self {
        Self::new(Box::new(LopdfBackend::new()))
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Extracts text from the selected pages of a PDF.
    ///
    /// # Arguments
    /// * `file_path` - Absolute or relative path, as given by the caller
    /// * `pages` - Page selection (`None` or `"all"`, `"5"`, `"1-10"`, `"1,3,5"`)
    /// * `options` - Page limit and metadata switch
    pub fn extract(
        &self,
        file_path: &str,
        pages: Option<&str>,
        options: &ExtractionOptions,
    ) -> PdfReadResult<ExtractionResult> {
        let path = resolve_pdf_path(file_path)?;
        let max_pages = options.clamped_max_pages();

        debug!(path = %path.display(), backend = self.backend.name(), "opening PDF");
        let document = self
            .backend
            .open(&path)
            .map_err(|e| report_as_given(e, file_path))?;

        if document.is_encrypted() {
            return Err(PdfReadError::Encrypted);
        }

        let total_pages = document.page_count();
        let indices = parse_page_range(pages, total_pages, max_pages)?;
        debug!(total_pages, selected = indices.len(), max_pages, "resolved page selection");

        let mut texts = Vec::with_capacity(indices.len());
        for &index in &indices {
            texts.push(document.extract_text(index)?);
        }

        let metadata = if options.include_metadata {
            document.metadata()
        } else {
            None
        };

        let pages = indices.iter().copied().zip(texts.iter().map(String::as_str));
        Ok(ExtractionResult::from_pages(&path, total_pages, pages, metadata))
    }
}

/// Resolves `file_path` to an absolute path naming a regular `.pdf` file.
///
/// Error messages quote `file_path` as given.
pub fn resolve_pdf_path(file_path: &str) -> PdfReadResult<PathBuf> {
    let path = std::fs::canonicalize(file_path).map_err(|e| path_error(e, file_path))?;
    let metadata = std::fs::metadata(&path).map_err(|e| path_error(e, file_path))?;

    if !metadata.is_file() {
        return Err(PdfReadError::NotAFile {
            path: file_path.to_string(),
        });
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(PdfReadError::NotAPdf {
            path: file_path.to_string(),
        });
    }

    Ok(path)
}

fn path_error(err: io::Error, file_path: &str) -> PdfReadError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PdfReadError::PermissionDenied {
            path: file_path.to_string(),
        },
        _ => PdfReadError::NotFound {
            path: file_path.to_string(),
        },
    }
}

fn report_as_given(err: PdfReadError, file_path: &str) -> PdfReadError {
    match err {
        PdfReadError::PermissionDenied { .. } => PdfReadError::PermissionDenied {
            path: file_path.to_string(),
        },
        PdfReadError::NotFound { .. } => PdfReadError::NotFound {
            path: file_path.to_string(),
        },
        other => other,
    }
}
