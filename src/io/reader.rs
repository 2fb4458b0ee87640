use crate::{PdfSplitError, Result};
use lopdf::Document;
use std::path::Path;

/// Opens source documents.
///
/// Every call loads the file afresh; nothing is cached between calls.
pub struct PdfReader;

impl PdfReader {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let doc = Document::load(path)
            .map_err(|err| PdfSplitError::failed_to_load_pdf(path.to_path_buf(), err.to_string()))?;
        Ok(doc)
    }

    /// Number of pages in the document at `path`.
    pub fn page_count<P: AsRef<Path>>(path: P) -> Result<u32> {
        let doc = Self::read(path)?;
        Ok(doc.get_pages().len() as u32)
    }

    pub fn check_path_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let exists = path.try_exists()?;
        if !exists {
            return Err(PdfSplitError::file_not_found(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(PdfSplitError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }
}
