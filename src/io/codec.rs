//! The document operations the assembly engine relies on.

use std::path::Path;

use crate::error::{PdfSplitError, Result};
use crate::io::{OutputBuffer, PdfReader, PdfWriter};

/// Opaque document capability used by [`AssemblyEngine`].
///
/// [`AssemblyEngine`]: crate::assembly::AssemblyEngine
pub trait DocumentCodec {
    /// Number of pages in the document at `path`.
    fn page_count(&self, path: &Path) -> Result<u32>;

    /// Append page `page` (1-based) of the document at `path` to `buffer`,
    /// adding `rotate_delta` degrees clockwise.
    fn copy_page(
        &self,
        path: &Path,
        page: u32,
        rotate_delta: i64,
        buffer: &mut OutputBuffer,
    ) -> Result<()>;

    /// Write `buffer` to `path`.
    fn write(&self, buffer: OutputBuffer, path: &Path) -> Result<()>;
}

/// [`DocumentCodec`] backed by `lopdf`.
///
/// The source is reopened for every copied page, so no read handle is held
/// while an output file is being written.
#[derive(Debug, Clone, Default)]
pub struct LopdfCodec {
    writer: PdfWriter,
}

impl LopdfCodec {
    pub fn new(writer: PdfWriter) -> Self {
        Self { writer }
    }
}

impl DocumentCodec for LopdfCodec {
    fn page_count(&self, path: &Path) -> Result<u32> {
        PdfReader::page_count(path)
    }

    fn copy_page(
        &self,
        path: &Path,
        page: u32,
        rotate_delta: i64,
        buffer: &mut OutputBuffer,
    ) -> Result<()> {
        let source = PdfReader::read(path)?;
        if !source.get_pages().contains_key(&page) {
            return Err(PdfSplitError::PageNotFound {
                path: path.to_path_buf(),
                page,
            });
        }
        buffer.add_page(source, page, rotate_delta)
    }

    fn write(&self, buffer: OutputBuffer, path: &Path) -> Result<()> {
        self.writer.write(buffer, path)
    }
}
