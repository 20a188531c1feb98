//! Document information fields reported alongside extracted text.

use encoding_rs::{UTF_16BE, WINDOWS_1252};
use serde::Serialize;

/// Descriptive fields from a PDF's document information dictionary.
///
/// Dates are kept as the document stores them (typically `D:YYYYMMDDHHmmSS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

/// Decodes a PDF text string.
///
/// Strings starting with a UTF-16BE byte order mark are decoded as UTF-16.
/// Other strings are taken as UTF-8 when valid, falling back to a single-byte
/// decoding close to PDFDocEncoding.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let (text, _) = UTF_16BE.decode_without_bom_handling(rest);
        return text.into_owned();
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
