//! Per-call extraction settings.

/// Page limit applied when the caller does not give one.
pub const DEFAULT_MAX_PAGES: i64 = 100;

/// Largest page limit a caller may request.
pub const MAX_PAGES_LIMIT: i64 = 1000;

/// Options controlling a single extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Requested page limit, clamped to `1..=MAX_PAGES_LIMIT` when used
    pub max_pages: i64,

    /// Whether to report document metadata
    pub include_metadata: bool,
}

impl ExtractionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested page limit. Out-of-bounds values are clamped, not rejected.
    pub fn with_max_pages(mut self, max_pages: i64) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    /// The page limit actually applied.
    pub fn clamped_max_pages(&self) -> usize {
        self.max_pages.clamp(1, MAX_PAGES_LIMIT) as usize
    }
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            include_metadata: true,
        }
    }
}
