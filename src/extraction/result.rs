//! The record returned by a successful extraction.

use crate::domain::DocumentMetadata;
use serde::Serialize;
use std::path::Path;

/// Separator placed between consecutive pages in [`ExtractionResult::content`].
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Formats the marker line that precedes a page's text.
pub fn page_marker(page_number: usize) -> String {
    format!("--- Page {} ---", page_number)
}

/// Text and statistics for the selected pages of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Absolute path of the document
    pub path: String,

    /// File name of the document
    pub name: String,

    /// Pages in the whole document
    pub total_pages: usize,

    /// Pages included in `content`
    pub pages_extracted: usize,

    /// Marked-up text of the selected pages
    pub content: String,

    /// Length of `content` in characters
    pub char_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl ExtractionResult {
    /// Assembles a result from `(page_index, text)` pairs in output order.
    pub fn from_pages<'a, I>(
        path: &Path,
        total_pages: usize,
        pages: I,
        metadata: Option<DocumentMetadata>,
    ) -> Self
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let parts: Vec<String> = pages
            .into_iter()
            .map(|(index, text)| format!("{}\n{}", page_marker(index + 1), text))
            .collect();
        let content = parts.join(PAGE_SEPARATOR);

        Self {
            path: path.display().to_string(),
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            total_pages,
            pages_extracted: parts.len(),
            char_count: content.chars().count(),
            content,
            metadata,
        }
    }
}
