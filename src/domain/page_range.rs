//! Page selection parsing.
//!
//! Users address pages with 1-based numbers in one of four syntaxes:
//!
//! - absent or `all`: every page, up to the page limit
//! - `5`: a single page
//! - `3-7`: an inclusive range
//! - `1,3,5`: an explicit list, kept in the order given
//!
//! Parsing happens in two steps. [`PageSelection::parse`] checks the syntax
//! without knowing the document, then [`PageSelection::resolve`] checks the
//! numbers against the page count and produces 0-based indices.

use crate::error::{PdfReadError, PdfReadResult};

/// Token selecting every page.
pub const ALL_PAGES: &str = "all";

/// A syntactically valid page selection, still in 1-based page numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    All,

    /// One page
    Single(i64),

    /// A digits-only page number too large for `i64`, kept as written so
    /// errors can quote it
    Oversized(String),

    /// Inclusive range with `start <= end`
    Range { start: i64, end: i64 },

    /// Explicit pages in request order, duplicates allowed
    List(Vec<i64>),
}

impl PageSelection {
    /// Parses a selection string.
    ///
    /// Rules are tried in order: `all`, digits only, a dash without commas,
    /// then a comma list. Anything else is an invalid format.
    pub fn parse(selection: Option<&str>) -> PdfReadResult<Self> {
        let raw = match selection {
            None => return Ok(Self::All),
            Some(raw) => raw,
        };

        if raw.eq_ignore_ascii_case(ALL_PAGES) {
            return Ok(Self::All);
        }

        if is_page_number(raw) {
            return Ok(match raw.parse() {
                Ok(page) => Self::Single(page),
                Err(_) => Self::Oversized(raw.trim_start_matches('0').to_string()),
            });
        }

        if !raw.contains(',') {
            if let Some((start, end)) = raw.split_once('-') {
                let start = parse_page_token(raw, start)?;
                let end = parse_page_token(raw, end)?;

                if start > end {
                    return Err(PdfReadError::InvalidRange {
                        selection: raw.to_string(),
                    });
                }

                return Ok(Self::Range { start, end });
            }
        } else {
            let pages = raw
                .split(',')
                .map(|token| parse_page_token(raw, token))
                .collect::<PdfReadResult<Vec<_>>>()?;

            return Ok(Self::List(pages));
        }

        Err(PdfReadError::invalid_format(raw, None))
    }

    /// Converts the selection into 0-based page indices.
    ///
    /// At most `max_pages` indices are returned. A range longer than the limit
    /// is cut short silently, and a list keeps its first `max_pages` entries.
    pub fn resolve(&self, total_pages: usize, max_pages: usize) -> PdfReadResult<Vec<usize>> {
        match self {
            Self::All => Ok((0..total_pages.min(max_pages)).collect()),
            Self::Single(page) => Ok(vec![page_index(*page, total_pages)?]),
            Self::Oversized(digits) => Err(PdfReadError::page_out_of_range(digits, total_pages)),
            Self::Range { start, end } => {
                if *start < 1 {
                    return Err(PdfReadError::range_start_below_one(*start, total_pages));
                }
                let last = page_index(*end, total_pages)?;
                let first = page_index(*start, total_pages)?;
                let stop = (last + 1).min(first.saturating_add(max_pages));

                Ok((first..stop).collect())
            }
            Self::List(pages) => {
                let indices = pages
                    .iter()
                    .map(|&page| page_index(page, total_pages))
                    .collect::<PdfReadResult<Vec<_>>>()?;

                Ok(indices.into_iter().take(max_pages).collect())
            }
        }
    }
}

/// Translates a selection string into 0-based page indices for a document
/// with `total_pages` pages, returning at most `max_pages` of them.
pub fn parse_page_range(
    selection: Option<&str>,
    total_pages: usize,
    max_pages: usize,
) -> PdfReadResult<Vec<usize>> {
    PageSelection::parse(selection)?.resolve(total_pages, max_pages)
}

fn is_page_number(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

fn parse_page_token(selection: &str, token: &str) -> PdfReadResult<i64> {
    let token = token.trim();
    token.parse::<i64>().map_err(|e| {
        PdfReadError::invalid_format(
            selection,
            Some(format!("Cannot parse '{}' as a page number: {}.", token, e)),
        )
    })
}

fn page_index(page: i64, total_pages: usize) -> PdfReadResult<usize> {
    match usize::try_from(page) {
        Ok(n) if n >= 1 && n <= total_pages => Ok(n - 1),
        _ => Err(PdfReadError::page_out_of_range(page, total_pages)),
    }
}
