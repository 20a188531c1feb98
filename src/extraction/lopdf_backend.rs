//! PDF backend built on `lopdf`.

use super::backend::{PdfBackend, PdfDocument};
use crate::domain::{decode_text_string, DocumentMetadata};
use crate::error::{PdfReadError, PdfReadResult};
use std::io;
use std::path::Path;

use lopdf::{Dictionary, Document, Object};

/// Backend that loads whole documents into memory with `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn open(&self, path: &Path) -> PdfReadResult<Box<dyn PdfDocument>> {
        let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
        let document = Document::load_mem(&bytes).map_err(load_error)?;

        Ok(Box::new(LopdfDocument::new(document)))
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}

/// An open `lopdf` document with its page numbers in document order.
pub struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    pub fn new(document: Document) -> Self {
        let page_numbers = document.get_pages().keys().copied().collect();
        Self {
            document,
            page_numbers,
        }
    }

    fn info_dictionary(&self) -> Option<&Dictionary> {
        let info = self.document.trailer.get(b"Info").ok()?;
        self.resolve(info).as_dict().ok()
    }

    /// Follows an indirect reference to the object it names.
    fn resolve<'a>(&'a self, object: &'a Object) -> &'a Object {
        match object {
            Object::Reference(id) => self.document.get_object(*id).unwrap_or(object),
            _ => object,
        }
    }

    fn info_text(&self, info: &Dictionary, key: &[u8]) -> Option<String> {
        let value = self.resolve(info.get(key).ok()?);
        value.as_str().ok().map(decode_text_string)
    }
}

impl PdfDocument for LopdfDocument {
    fn is_encrypted(&self) -> bool {
        self.document.is_encrypted()
    }

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn extract_text(&self, index: usize) -> PdfReadResult<String> {
        let page_number = self.page_numbers.get(index).copied().ok_or_else(|| {
            PdfReadError::extraction_failed(format!("page index {} is out of bounds", index))
        })?;

        Ok(self.document.extract_text(&[page_number])?)
    }

    fn metadata(&self) -> Option<DocumentMetadata> {
        // An Info dictionary holding only other keys still counts as metadata
        let info = self.info_dictionary().filter(|info| !info.is_empty())?;
        let text = |key: &[u8]| self.info_text(info, key);

        Some(DocumentMetadata {
            title: text(b"Title"),
            author: text(b"Author"),
            subject: text(b"Subject"),
            creator: text(b"Creator"),
            producer: text(b"Producer"),
            created: text(b"CreationDate"),
            modified: text(b"ModDate"),
        })
    }
}

fn read_error(path: &Path, err: io::Error) -> PdfReadError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PdfReadError::PermissionDenied {
            path: path.display().to_string(),
        },
        io::ErrorKind::NotFound => PdfReadError::NotFound {
            path: path.display().to_string(),
        },
        _ => PdfReadError::extraction_failed(err),
    }
}

// lopdf refuses some protected files at load time instead of exposing /Encrypt
fn load_error(err: lopdf::Error) -> PdfReadError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    if lowered.contains("encrypt") || lowered.contains("password") {
        PdfReadError::Encrypted
    } else {
        PdfReadError::extraction_failed(message)
    }
}
