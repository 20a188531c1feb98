//! Pure domain logic: page selection and document metadata.
//!
//! Nothing in this module touches the filesystem or a PDF decoder.

pub mod metadata;
pub mod page_range;

pub use metadata::{decode_text_string, DocumentMetadata};
pub use page_range::{parse_page_range, PageSelection, ALL_PAGES};
