//! PDF writing.
//!
//! Output files are written atomically: the document is serialized to a
//! sibling temporary file which is then renamed over the target.

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::config::CompressionLevel;
use crate::error::{PdfSplitError, Result};
use crate::io::OutputBuffer;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary file, then rename.
    pub atomic: bool,

    pub compression: CompressionLevel,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compression: CompressionLevel::Standard,
            buffer_size: 8192,
        }
    }
}

/// Serializes output buffers to disk.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    pub fn with_compression(compression: CompressionLevel) -> Self {
        Self {
            options: WriteOptions {
                compression,
                ..Default::default()
            },
        }
    }

    /// Write the pages collected in `buffer` to `path`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSplitError::FailedToCreateOutput`] if the file cannot be
    /// created and [`PdfSplitError::FailedToWrite`] if serialization,
    /// flushing or the final rename fails.
    pub fn write(&self, buffer: OutputBuffer, path: &Path) -> Result<()> {
        let mut doc = buffer.into_document();

        match self.options.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => doc.compress(),
            CompressionLevel::Maximum => {
                doc.prune_objects();
                doc.renumber_objects();
                doc.compress();
            }
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PdfSplitError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        if !self.options.atomic {
            return self.save(&mut doc, path);
        }

        let write_path = temporary_path(path);
        let result = self
            .save(&mut doc, &write_path)
            .and_then(|()| {
                std::fs::rename(&write_path, path).map_err(|e| PdfSplitError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })
            });

        if result.is_err() {
            let _ = std::fs::remove_file(&write_path);
        }

        result
    }

    fn save(&self, doc: &mut Document, write_path: &Path) -> Result<()> {
        let file =
            std::fs::File::create(write_path).map_err(|e| PdfSplitError::FailedToCreateOutput {
                path: write_path.to_path_buf(),
                source: e,
            })?;
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| PdfSplitError::FailedToWrite {
                path: write_path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| PdfSplitError::FailedToWrite {
            path: write_path.to_path_buf(),
            source: e,
        })
    }
}

/// Hidden sibling of `path` used for atomic writes: `dir/.name.pdf.tmp`.
fn temporary_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}
