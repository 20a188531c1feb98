//! In-memory PDF backend.
//!
//! Serves a scripted document for any path, so orchestration behaviour
//! (encryption, metadata, decoder failures) can be tested without crafting
//! real files for every case.

use pdf_read::{DocumentMetadata, PdfBackend, PdfDocument, PdfReadError, PdfReadResult};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted document contents.
#[derive(Debug, Clone, Default)]
pub struct FakePdf {
    pub pages: Vec<String>,
    pub encrypted: bool,
    pub metadata: Option<DocumentMetadata>,
    pub failing_page: Option<usize>,
}

impl FakePdf {
    pub fn with_pages(count: usize) -> Self {
        Self {
            pages: (1..=count).map(|n| format!("text of page {}", n)).collect(),
            ..Default::default()
        }
    }

    pub fn encrypted(mut self) -> Self {
        self.encrypted = true;
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn failing_on(mut self, index: usize) -> Self {
        self.failing_page = Some(index);
        self
    }
}

/// How `open` should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFailure {
    Corrupt,
    PermissionDenied,
}

/// Backend handing out [`FakePdf`] documents and counting opens.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    pdf: FakePdf,
    open_failure: Option<OpenFailure>,
    opens: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn new(pdf: FakePdf) -> Self {
        Self {
            pdf,
            open_failure: None,
            opens: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing_open(failure: OpenFailure) -> Self {
        Self {
            open_failure: Some(failure),
            ..Self::new(FakePdf::default())
        }
    }

    /// Shared counter of `open` calls, usable after the backend is boxed.
    pub fn open_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.opens)
    }
}

impl PdfBackend for FakeBackend {
    fn open(&self, path: &Path) -> PdfReadResult<Box<dyn PdfDocument>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        match self.open_failure {
            Some(OpenFailure::Corrupt) => Err(PdfReadError::extraction_failed(
                "invalid file header",
            )),
            Some(OpenFailure::PermissionDenied) => Err(PdfReadError::PermissionDenied {
                path: path.display().to_string(),
            }),
            None => Ok(Box::new(FakeDocument(self.pdf.clone()))),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

struct FakeDocument(FakePdf);

impl PdfDocument for FakeDocument {
    fn is_encrypted(&self) -> bool {
        self.0.encrypted
    }

    fn page_count(&self) -> usize {
        self.0.pages.len()
    }

    fn extract_text(&self, index: usize) -> PdfReadResult<String> {
        if self.0.failing_page == Some(index) {
            return Err(PdfReadError::extraction_failed(format!(
                "broken content stream on page {}",
                index + 1
            )));
        }
        Ok(self.0.pages[index].clone())
    }

    fn metadata(&self) -> Option<DocumentMetadata> {
        self.0.metadata.clone()
    }
}
