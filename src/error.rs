//! Error types for PDF extraction.
//!
//! Every failure the `pdf_read` tool can report is a variant of
//! [`PdfReadError`]. The `Display` output of each variant is the exact
//! human-readable message placed in the tool's error record.

use thiserror::Error;

/// Result type alias for extraction operations.
pub type PdfReadResult<T> = Result<T, PdfReadError>;

/// Every way a `pdf_read` invocation can fail.
#[derive(Debug, Error)]
pub enum PdfReadError {
    /// The path does not exist
    #[error("PDF file not found: {path}")]
    NotFound { path: String },

    /// The path exists but is a directory or special file
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    /// The file extension is not `.pdf`
    #[error("Not a PDF file: {path}")]
    NotAPdf { path: String },

    /// The document is password protected
    #[error("Cannot read encrypted PDF.")]
    Encrypted,

    /// A requested page lies outside `1..=total_pages`
    #[error("{}", page_out_of_range_message(.page, .total_pages, .range_start))]
    PageOutOfRange {
        page: String,
        total_pages: usize,
        range_start: bool,
    },

    /// A range whose start is after its end
    #[error("Invalid page range: {selection}. Start must be <= end.")]
    InvalidRange { selection: String },

    /// The selection string matches none of the accepted syntaxes
    #[error("Invalid page format: '{selection}'.{}", reason_suffix(.reason))]
    InvalidFormat {
        selection: String,
        reason: Option<String>,
    },

    /// The file could not be read due to filesystem permissions
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// The decoder rejected the document
    #[error("Failed to read PDF: {reason}")]
    ExtractionFailed { reason: String },

    /// Tool arguments could not be decoded
    #[error("Invalid arguments: {reason}")]
    InvalidArguments { reason: String },
}

/// Discriminant of [`PdfReadError`] for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfReadErrorKind {
    NotFound,
    NotAFile,
    NotAPdf,
    Encrypted,
    PageOutOfRange,
    InvalidRange,
    InvalidFormat,
    PermissionDenied,
    ExtractionFailed,
    InvalidArguments,
}

impl PdfReadError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> PdfReadErrorKind {
        match self {
            Self::NotFound { .. } => PdfReadErrorKind::NotFound,
            Self::NotAFile { .. } => PdfReadErrorKind::NotAFile,
            Self::NotAPdf { .. } => PdfReadErrorKind::NotAPdf,
            Self::Encrypted => PdfReadErrorKind::Encrypted,
            Self::PageOutOfRange { .. } => PdfReadErrorKind::PageOutOfRange,
            Self::InvalidRange { .. } => PdfReadErrorKind::InvalidRange,
            Self::InvalidFormat { .. } => PdfReadErrorKind::InvalidFormat,
            Self::PermissionDenied { .. } => PdfReadErrorKind::PermissionDenied,
            Self::ExtractionFailed { .. } => PdfReadErrorKind::ExtractionFailed,
            Self::InvalidArguments { .. } => PdfReadErrorKind::InvalidArguments,
        }
    }

    /// Out-of-range error for a page number checked against the document length.
    pub fn page_out_of_range(page: impl std::fmt::Display, total_pages: usize) -> Self {
        Self::PageOutOfRange {
            page: page.to_string(),
            total_pages,
            range_start: false,
        }
    }

    /// Out-of-range error for a range whose start is below page 1.
    pub fn range_start_below_one(start: i64, total_pages: usize) -> Self {
        Self::PageOutOfRange {
            page: start.to_string(),
            total_pages,
            range_start: true,
        }
    }

    pub fn invalid_format(selection: &str, reason: Option<String>) -> Self {
        Self::InvalidFormat {
            selection: selection.to_string(),
            reason,
        }
    }

    pub fn extraction_failed(reason: impl std::fmt::Display) -> Self {
        Self::ExtractionFailed {
            reason: reason.to_string(),
        }
    }
}

fn page_out_of_range_message(page: &str, total_pages: &usize, range_start: &bool) -> String {
    if *range_start {
        format!("Page numbers start at 1, got {}.", page)
    } else {
        format!("Page {} out of range. PDF has {} pages.", page, total_pages)
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(" {}", r),
        None => String::new(),
    }
}

impl From<lopdf::Error> for PdfReadError {
    fn from(err: lopdf::Error) -> Self {
        Self::extraction_failed(err)
    }
}

impl From<serde_json::Error> for PdfReadError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArguments {
            reason: err.to_string(),
        }
    }
}
