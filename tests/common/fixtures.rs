//! Test fixtures and PDF builders.
//!
//! PDFs are assembled object by object with `lopdf`, using the standard
//! Courier font so the text can be extracted back verbatim.

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// Builder for creating test PDFs with one text line per page.
///
/// # Example
///
/// ```no_run
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestPdfBuilder::new()
///     .with_page("Introduction")
///     .with_page("Results")
///     .with_info("Title", "Annual Report")
///     .build(std::path::Path::new("/tmp/report.pdf"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestPdfBuilder {
    pages: Vec<String>,
    info: Vec<(String, String)>,
}

impl TestPdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page showing `text`. An empty string gives a page without text.
    pub fn with_page(mut self, text: &str) -> Self {
        self.pages.push(text.to_string());
        self
    }

    /// Appends `count` pages reading "Page text N".
    pub fn with_numbered_pages(mut self, count: usize) -> Self {
        let start = self.pages.len();
        for n in start + 1..=start + count {
            self.pages.push(format!("Page text {}", n));
        }
        self
    }

    /// Adds an entry to the document information dictionary.
    pub fn with_info(mut self, key: &str, value: &str) -> Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for text in &self.pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if !self.info.is_empty() {
            let mut info = Dictionary::new();
            for (key, value) in &self.info {
                info.set(key.as_str(), Object::string_literal(value.as_str()));
            }
            let info_id = doc.add_object(info);
            doc.trailer.set("Info", info_id);
        }

        doc.save(output_path)?;
        Ok(output_path.to_path_buf())
    }
}

/// A multi-page report with a full information dictionary.
pub fn create_report(path: &Path, pages: usize) -> Result<PathBuf> {
    TestPdfBuilder::new()
        .with_numbered_pages(pages)
        .with_info("Title", "Quarterly Report")
        .with_info("Author", "Finance Team")
        .with_info("Subject", "Q3 results")
        .with_info("Creator", "Report Generator")
        .with_info("Producer", "lopdf")
        .with_info("CreationDate", "D:20240105093000Z")
        .with_info("ModDate", "D:20240201170000Z")
        .build(path)
}

/// Writes a file with a `.pdf` name whose contents are never decoded by a
/// fake backend.
pub fn touch_pdf(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.5\n%%EOF\n")?;
    Ok(path)
}

/// Returns the path as the `&str` the extraction API takes.
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
