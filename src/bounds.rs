//! Effective start/end pages for a single-document pass.

use serde::Serialize;

use crate::range::PageSet;

/// Inclusive, 1-based `(start, end)` page interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub start: u32,
    pub end: u32,
}

impl Bounds {
    /// Fill in whichever of `start`/`end` was not given explicitly.
    ///
    /// An unset start takes the first page of `pages` as written and an
    /// unset end takes the last one (not the maximum). With an empty set the
    /// whole document applies: `1` and `page_count`.
    ///
    /// Nothing is validated here. A start past the end, or an end past the
    /// document, simply admits fewer pages during assembly.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplit::bounds::Bounds;
    /// use pdfsplit::range::PageSet;
    ///
    /// let pages = PageSet::parse("3-5").unwrap();
    /// let bounds = Bounds::resolve(None, None, &pages, 10);
    /// assert_eq!((bounds.start, bounds.end), (3, 5));
    /// ```
    pub fn resolve(
        explicit_start: Option<u32>,
        explicit_end: Option<u32>,
        pages: &PageSet,
        page_count: u32,
    ) -> Self {
        let start = explicit_start.or(pages.first()).unwrap_or(1);
        let end = explicit_end.or(pages.last()).unwrap_or(page_count);
        Self { start, end }
    }

    /// Whether `page` lies inside the interval.
    pub fn admits(&self, page: u32) -> bool {
        self.start <= page && page <= self.end
    }

    /// Whether `page` lies beyond the end; scanning stops there.
    pub fn is_past(&self, page: u32) -> bool {
        page > self.end
    }
}
