//! Configuration for a pdfsplit run.
//!
//! [`Config`] is built from CLI arguments (see [`crate::cli`]) and turned
//! into an [`AssemblyRequest`] plus [`AssemblyOptions`] for the engine. It
//! handles:
//! - Validation of argument combinations
//! - Parsing of page selections and rotations
//! - Application of defaults

use std::path::PathBuf;
use std::str::FromStr;

use crate::assembly::{AssemblyOptions, AssemblyRequest, Selection};
use crate::edit::EditState;
use crate::error::{PdfSplitError, Result};
use crate::range::PageSet;

/// Compression level for output PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - preserves exact structure.
    None,
    /// Compress content streams.
    #[default]
    Standard,
    /// Also drop unreferenced objects and renumber.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PdfSplitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PdfSplitError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// Behaviour when an output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Replace existing files (default).
    #[default]
    Overwrite,
    /// Never overwrite; an existing output is an error.
    NoClobber,
}

/// Complete configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input PDF paths, in order, after glob and input-list expansion.
    pub inputs: Vec<PathBuf>,

    /// Pages to select; empty selects every page.
    pub pages: PageSet,

    /// Explicit first page (1-based).
    pub start: Option<u32>,

    /// Explicit last page (1-based).
    pub end: Option<u32>,

    /// Collect the selected pages into one file.
    pub merge: bool,

    /// Pending per-page rotations.
    pub edits: EditState,

    /// Dry run mode - plan outputs without creating them.
    pub dry_run: bool,

    pub overwrite_mode: OverwriteMode,

    pub compression: CompressionLevel,

    /// Print the run report as JSON instead of human output.
    pub json: bool,

    pub verbose: bool,

    /// Suppress non-error output.
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSplitError::NotAPdf`] for an input without a `.pdf`
    /// extension and [`PdfSplitError::InvalidConfig`] if:
    /// - `start` or `end` is zero
    /// - verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            let is_pdf = input
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
            if !is_pdf {
                return Err(PdfSplitError::NotAPdf {
                    path: input.clone(),
                });
            }
        }

        if self.start == Some(0) || self.end == Some(0) {
            return Err(PdfSplitError::invalid_config(
                "Page numbers start at 1 (--start and --end)",
            ));
        }

        if self.verbose && self.quiet {
            return Err(PdfSplitError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        Ok(())
    }

    /// The engine request described by this configuration.
    pub fn request(&self) -> AssemblyRequest {
        AssemblyRequest {
            documents: self.inputs.clone(),
            selection: Selection {
                pages: self.pages.clone(),
                start: self.start,
                end: self.end,
            },
            merge: self.merge,
            edits: self.edits.clone(),
        }
    }

    pub fn options(&self) -> AssemblyOptions {
        AssemblyOptions {
            dry_run: self.dry_run,
            overwrite: self.overwrite_mode,
        }
    }
}
