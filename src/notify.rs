//! One-way reporting channel.
//!
//! The assembly engine tells its caller about failures, warnings and
//! progress through a [`Notifier`]. Nothing it receives feeds back into the
//! engine; front ends decide how to surface it.

use std::sync::Mutex;

use crate::assembly::AssemblyReport;
use crate::error::PdfSplitError;

/// A reported failure, optionally tied to the page it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub page: Option<u32>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            page: None,
        }
    }

    pub fn for_page(page: u32, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            page: Some(page),
        }
    }
}

impl From<&PdfSplitError> for Notice {
    fn from(err: &PdfSplitError) -> Self {
        Self {
            message: err.to_string(),
            page: err.page(),
        }
    }
}

/// Receiver of engine notifications.
pub trait Notifier {
    /// A fatal or page-local failure.
    fn error(&self, notice: &Notice);

    /// Something unexpected that is not a failure.
    fn warning(&self, _message: &str) {}

    /// Routine progress (page written, file flushed).
    fn progress(&self, _message: &str) {}

    /// The pass finished.
    fn complete(&self, _report: &AssemblyReport) {}
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn error(&self, notice: &Notice) {
        (**self).error(notice);
    }

    fn warning(&self, message: &str) {
        (**self).warning(message);
    }

    fn progress(&self, message: &str) {
        (**self).progress(message);
    }

    fn complete(&self, report: &AssemblyReport) {
        (**self).complete(report);
    }
}

/// Notifier that keeps everything it is told.
#[derive(Debug, Default)]
pub struct Notices {
    errors: Mutex<Vec<Notice>>,
    warnings: Mutex<Vec<String>>,
    completed: Mutex<usize>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.errors.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// How many times `complete` was called.
    pub fn completions(&self) -> usize {
        self.completed.lock().map(|c| *c).unwrap_or_default()
    }
}

impl Notifier for Notices {
    fn error(&self, notice: &Notice) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(notice.clone());
        }
    }

    fn warning(&self, message: &str) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(message.to_string());
        }
    }

    fn complete(&self, _report: &AssemblyReport) {
        if let Ok(mut completed) = self.completed.lock() {
            *completed += 1;
        }
    }
}
