//! Custom assertions for extraction results.

use pdf_read::{ExtractionResult, PdfReadErrorKind, PdfReadResult};
use serde_json::Value;

/// Counts the page marker lines in extracted content.
pub fn count_page_markers(content: &str) -> usize {
    content
        .lines()
        .filter(|line| line.starts_with("--- Page ") && line.ends_with(" ---"))
        .count()
}

/// Asserts the bookkeeping fields agree with the content.
///
/// # Panics
/// Panics if `pages_extracted` or `char_count` disagree with `content`.
pub fn assert_consistent(result: &ExtractionResult) {
    assert_eq!(
        result.pages_extracted,
        count_page_markers(&result.content),
        "pages_extracted should equal the number of page markers in:\n{}",
        result.content
    );
    assert_eq!(
        result.char_count,
        result.content.chars().count(),
        "char_count should be the character length of content"
    );
}

/// Asserts an extraction failed with the given error kind.
///
/// # Panics
/// Panics if the extraction succeeded or failed differently.
pub fn assert_fails_with<T: std::fmt::Debug>(result: PdfReadResult<T>, kind: PdfReadErrorKind) {
    match result {
        Ok(value) => panic!("expected {:?} error, got success: {:?}", kind, value),
        Err(err) => assert_eq!(err.kind(), kind, "unexpected error: {}", err),
    }
}

/// Asserts a tool record is an error record and returns its message.
///
/// # Panics
/// Panics if the record is not exactly `{"error": <string>}`.
pub fn expect_error_record(record: &Value) -> &str {
    let object = record.as_object().expect("tool records are JSON objects");
    assert_eq!(object.len(), 1, "error records carry only 'error': {}", record);
    object["error"].as_str().expect("error message is a string")
}
