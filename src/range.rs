//! Page-range expressions.
//!
//! Grammar, after every whitespace character has been removed:
//!
//! ```text
//! expr  := token (',' token)*
//! token := INTEGER | INTEGER '-' INTEGER | ''
//! ```
//!
//! An empty token ends parsing and keeps what was read so far, so `"1,,3"`
//! selects only page 1. A descending range such as `"5-2"` contributes no
//! pages. Duplicates and out-of-order pages are kept as written.
//!
//! Ranges are stored as spans and never expanded, so `1-4000000000` costs
//! as much as `1-4`.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{PdfSplitError, Result};

/// Ordered page spans parsed from a page-range expression.
///
/// Iteration yields pages in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    /// Non-empty spans, in input order.
    spans: Vec<RangeInclusive<u32>>,
}

impl PageSet {
    /// Parse a page-range expression.
    ///
    /// # Errors
    ///
    /// - [`PdfSplitError::MalformedRange`] if a token has more than one `-`.
    /// - [`PdfSplitError::NonNumericPage`] if a page literal is not a
    ///   non-negative integer.
    ///
    /// Either error discards the pages parsed so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplit::range::PageSet;
    ///
    /// let set = PageSet::parse("1, 3-5, 8").unwrap();
    /// assert_eq!(set.to_vec(), vec![1, 3, 4, 5, 8]);
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        let mut spans = Vec::new();

        for token in compact.split(',') {
            if token.is_empty() {
                break;
            }

            let bounds: Vec<&str> = token.split('-').collect();
            let span = match bounds.as_slice() {
                [single] => {
                    let page = parse_page(single)?;
                    page..=page
                }
                [start, end] => parse_page(start)?..=parse_page(end)?,
                _ => return Err(PdfSplitError::malformed_range(token)),
            };

            if !span.is_empty() {
                spans.push(span);
            }
        }

        Ok(Self { spans })
    }

    /// Build a set from already-known page numbers, one span per page.
    pub fn from_pages(pages: impl IntoIterator<Item = u32>) -> Self {
        Self {
            spans: pages.into_iter().map(|page| page..=page).collect(),
        }
    }

    /// Membership test used by the assembly pass.
    ///
    /// Linear in the number of tokens, not in the number of pages.
    pub fn contains(&self, page: u32) -> bool {
        self.spans.iter().any(|span| span.contains(&page))
    }

    /// First page as written, if any.
    pub fn first(&self) -> Option<u32> {
        self.spans.first().map(|span| *span.start())
    }

    /// Last page as written (not the maximum), if any.
    pub fn last(&self) -> Option<u32> {
        self.spans.last().map(|span| *span.end())
    }

    /// Number of pages, counting duplicates.
    pub fn len(&self) -> usize {
        self.spans
            .iter()
            .map(|span| (span.end() - span.start()) as usize + 1)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.spans.iter().flat_map(|span| span.clone())
    }

    /// Every page, expanded in input order.
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl FromStr for PageSet {
    type Err = PdfSplitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_page(literal: &str) -> Result<u32> {
    literal
        .parse()
        .map_err(|_| PdfSplitError::non_numeric_page(literal))
}
