//! Output file names.
//!
//! - split to multiple files: `{stem}_{page}.{ext}`, with `page` zero-padded
//!   to the digit count of the source's page count;
//! - split to a single file: `{stem}_merged.{ext}`;
//! - merging several documents: `merged.{ext}` next to the first input.
//!
//! Outputs land in the directory of the source document. A source without
//! an extension gets `pdf`.

use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "pdf";

/// `page` left-padded with zeros to as many digits as `page_count` has.
///
/// ```
/// use pdfsplit::assembly::naming::zero_pad;
///
/// assert_eq!(zero_pad(5, 120), "005");
/// assert_eq!(zero_pad(5, 9), "5");
/// ```
pub fn zero_pad(page: u32, page_count: u32) -> String {
    let width = page_count.to_string().len();
    format!("{page:0width$}")
}

/// Output path for one page in split-to-multiple mode.
pub fn split_output(source: &Path, page: u32, page_count: u32) -> PathBuf {
    let (stem, ext) = stem_and_extension(source);
    source.with_file_name(format!("{stem}_{}.{ext}", zero_pad(page, page_count)))
}

/// Output path for split-to-single mode.
pub fn single_output(source: &Path) -> PathBuf {
    let (stem, ext) = stem_and_extension(source);
    source.with_file_name(format!("{stem}_merged.{ext}"))
}

/// Output path for merging several documents, placed beside `first`.
pub fn merged_output(first: &Path) -> PathBuf {
    let (_, ext) = stem_and_extension(first);
    first.with_file_name(format!("merged.{ext}"))
}

fn stem_and_extension(source: &Path) -> (String, String) {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    (stem, ext)
}
