//! Error types for pdfsplit.
//!
//! Every failure the engine can hit maps to one variant of
//! [`PdfSplitError`]. Variants are grouped by [`ErrorKind`]:
//!
//! - **Fatal**: no input, missing input file, unreadable source, unwritable
//!   final output. Nothing is written once one of these is raised.
//! - **Parse**: the page-range expression could not be understood.
//! - **Page-local**: one page failed to copy or flush; the pass continues.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfsplit operations.
pub type Result<T> = std::result::Result<T, PdfSplitError>;

/// Exit code for a run in which some pages could not be processed.
pub const PAGE_FAILURE_EXIT_CODE: i32 = 6;

/// Broad classification of a [`PdfSplitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Aborts the whole operation before (or instead of) writing output.
    Fatal,
    /// The page-range expression was rejected.
    Parse,
    /// A single page failed; later pages are still attempted.
    PageLocal,
}

/// Main error type for pdfsplit operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfSplitError {
    #[error("No PDFs were selected")]
    NoInput,

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("This is not a PDF file: {}", .path.display())]
    NotAPdf { path: PathBuf },

    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf { path: PathBuf, reason: String },

    #[error("Invalid page range '{token}': a range takes exactly one '-' (e.g. 4-6)")]
    MalformedRange { token: String },

    #[error("Invalid page number '{token}': only use whole numbers as page numbers")]
    NonNumericPage { token: String },

    #[error("Page {page} does not exist in {}", .path.display())]
    PageNotFound { path: PathBuf, page: u32 },

    #[error("Failed to copy page {page} of {}\n  Reason: {reason}", .path.display())]
    PageCopyFailed {
        path: PathBuf,
        page: u32,
        reason: String,
    },

    #[error(
        "Output file already exists: {}\n  Run without --no-clobber to overwrite it",
        .path.display()
    )]
    OutputExists { path: PathBuf },

    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput { path: PathBuf, source: io::Error },

    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite { path: PathBuf, source: io::Error },

    #[error("Failed to read input list file: {}\n  Reason: {source}", .path.display())]
    FailedToReadInputList { path: PathBuf, source: io::Error },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("PDF structure error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Other { message: String },
}

impl PdfSplitError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a MalformedRange error.
    pub fn malformed_range(token: impl Into<String>) -> Self {
        Self::MalformedRange {
            token: token.into(),
        }
    }

    /// Create a NonNumericPage error.
    pub fn non_numeric_page(token: impl Into<String>) -> Self {
        Self::NonNumericPage {
            token: token.into(),
        }
    }

    /// Create a PageCopyFailed error.
    pub fn page_copy_failed(path: PathBuf, page: u32, reason: impl Into<String>) -> Self {
        Self::PageCopyFailed {
            path,
            page,
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedRange { .. } | Self::NonNumericPage { .. } => ErrorKind::Parse,
            Self::PageNotFound { .. } | Self::PageCopyFailed { .. } => ErrorKind::PageLocal,
            _ => ErrorKind::Fatal,
        }
    }

    /// The page this error is about, if any.
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::PageNotFound { page, .. } | Self::PageCopyFailed { page, .. } => Some(*page),
            _ => None,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInput => 1,
            Self::FileNotFound { .. } | Self::NotAFile { .. } | Self::NotAPdf { .. } => 2,
            Self::FailedToReadInputList { .. } => 2,
            Self::FailedToLoadPdf { .. } | Self::Pdf(_) => 3,
            Self::MalformedRange { .. } | Self::NonNumericPage { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io(_) => 5,
            Self::PageNotFound { .. } | Self::PageCopyFailed { .. } => PAGE_FAILURE_EXIT_CODE,
            Self::Other { .. } => 1,
        }
    }
}
