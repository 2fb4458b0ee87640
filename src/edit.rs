//! Per-page pending edits.
//!
//! Only rotation exists today. Degrees accumulate in 90° steps with
//! counter-clockwise positive, the way a viewer rotates its preview. They
//! are converted to the clockwise `/Rotate` convention of PDF when a page
//! is copied into an output document.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::PdfSplitError;

/// Direction of a single 90° rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Signed degrees this step adds to a page's rotation.
    pub fn delta(&self) -> i32 {
        match self {
            Self::Clockwise => -90,
            Self::CounterClockwise => 90,
        }
    }
}

impl FromStr for RotationDirection {
    type Err = PdfSplitError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Self::Clockwise),
            "ccw" | "counter-clockwise" | "counterclockwise" => Ok(Self::CounterClockwise),
            _ => Err(PdfSplitError::invalid_config(format!(
                "Invalid rotation direction: {s}. Must be one of: cw, ccw"
            ))),
        }
    }
}

/// Pending transform for one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageEdit {
    /// Accumulated degrees, counter-clockwise positive. Not wrapped.
    pub rotate: i32,
}

impl PageEdit {
    /// Clockwise delta to add to the page's `/Rotate`, in `[0, 360)`.
    pub fn pdf_rotate_delta(&self) -> i64 {
        i64::from(-self.rotate).rem_euclid(360)
    }
}

/// Edits keyed by 1-based page number.
///
/// Entries are created on first use and never removed; a page rotated back
/// to 0 keeps its entry, which reads the same as no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    edits: BTreeMap<u32, PageEdit>,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotate `page` by one step in `direction`.
    pub fn rotate(&mut self, page: u32, direction: RotationDirection) {
        self.edits.entry(page).or_default().rotate += direction.delta();
    }

    /// Accumulated rotation of `page`, 0 if it was never rotated.
    pub fn rotation(&self, page: u32) -> i32 {
        self.edits.get(&page).map_or(0, |edit| edit.rotate)
    }

    /// Edit recorded for `page`, or the identity edit.
    pub fn edit(&self, page: u32) -> PageEdit {
        self.edits.get(&page).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, PageEdit)> + '_ {
        self.edits.iter().map(|(page, edit)| (*page, *edit))
    }
}
