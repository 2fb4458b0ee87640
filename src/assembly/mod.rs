//! The page-assembly pass.
//!
//! [`AssemblyEngine::assemble`] runs one of three modes:
//!
//! - **split to multiple files**: each selected page of a single document
//!   goes to its own file;
//! - **split to a single file**: the selected pages of a single document
//!   are collected into one file;
//! - **merge documents**: every page of every input, in input order, is
//!   collected into one file. Page selection and edits do not apply.
//!
//! In the single-document modes pages are scanned from 1 upward. A page is
//! considered when no selection was given or it is a member of the
//! selection. A considered page past the resolved end stops the scan; one
//! inside the bounds is copied (with its pending edit applied). Reaching
//! the end page also stops the scan. The scan assumes an ascending
//! selection; a selection written out of order such as `10,2` resolves to
//! bounds `(10, 2)` and copies nothing.

pub mod naming;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::bounds::Bounds;
use crate::config::OverwriteMode;
use crate::edit::EditState;
use crate::error::{ErrorKind, PdfSplitError, Result};
use crate::io::{DocumentCodec, OutputBuffer, PdfReader};
use crate::notify::{Notice, Notifier};
use crate::range::PageSet;

/// How pages are distributed over output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssemblyMode {
    SplitToMultiple,
    SplitToSingle,
    MergeDocuments,
}

impl AssemblyMode {
    /// Mode for `document_count` inputs and the merge flag.
    ///
    /// More than one document always merges; the flag only chooses between
    /// the two single-document modes.
    pub fn select(document_count: usize, merge: bool) -> Self {
        if document_count > 1 {
            Self::MergeDocuments
        } else if merge {
            Self::SplitToSingle
        } else {
            Self::SplitToMultiple
        }
    }
}

/// Which pages of a single document take part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Parsed page-range expression; empty means every page.
    pub pages: PageSet,
    /// Explicit first page, overriding the selection's first member.
    pub start: Option<u32>,
    /// Explicit last page, overriding the selection's last member.
    pub end: Option<u32>,
}

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn pages(pages: PageSet) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }
}

/// Everything one assembly pass needs.
#[derive(Debug, Clone, Default)]
pub struct AssemblyRequest {
    pub documents: Vec<PathBuf>,
    pub selection: Selection,
    /// Collect the selected pages of a single document into one file.
    pub merge: bool,
    pub edits: EditState,
}

/// Behaviour switches that do not change which pages are selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Plan outputs without copying or writing anything.
    pub dry_run: bool,
    pub overwrite: OverwriteMode,
}

/// A page that could not be copied or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    pub document: PathBuf,
    pub page: u32,
    pub reason: String,
}

/// Outcome of one assembly pass.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    pub mode: AssemblyMode,
    /// Resolved bounds; absent when merging documents.
    pub bounds: Option<Bounds>,
    /// Files written (or, in a dry run, that would be written), in order.
    pub outputs: Vec<PathBuf>,
    pub pages_written: usize,
    pub failures: Vec<PageFailure>,
    pub dry_run: bool,
}

impl AssemblyReport {
    fn new(mode: AssemblyMode, dry_run: bool) -> Self {
        Self {
            mode,
            bounds: None,
            outputs: Vec::new(),
            pages_written: 0,
            failures: Vec::new(),
            dry_run,
        }
    }

    /// Whether every considered page made it into an output.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a [`DocumentCodec`] over one request, reporting to a [`Notifier`].
pub struct AssemblyEngine<C, N> {
    codec: C,
    notifier: N,
    options: AssemblyOptions,
}

impl<C: DocumentCodec, N: Notifier> AssemblyEngine<C, N> {
    pub fn new(codec: C, notifier: N) -> Self {
        Self {
            codec,
            notifier,
            options: AssemblyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one assembly pass.
    ///
    /// Page-local failures are reported to the notifier, recorded in the
    /// report and skipped. Fatal failures (no documents, a missing input,
    /// an unreadable source, an unwritable single output) are reported to
    /// the notifier once and returned.
    ///
    /// # Errors
    ///
    /// - [`PdfSplitError::NoInput`] when `request.documents` is empty.
    /// - [`PdfSplitError::FileNotFound`] / [`PdfSplitError::NotAFile`] when an
    ///   input path is unusable; checked for every input before any page is
    ///   read.
    /// - Load errors for a source document, and write errors for the single
    ///   output file of the collecting modes.
    pub fn assemble(&self, request: &AssemblyRequest) -> Result<AssemblyReport> {
        match self.run(request) {
            Ok(report) => {
                self.notifier.complete(&report);
                Ok(report)
            }
            Err(err) => {
                self.notifier.error(&Notice::from(&err));
                Err(err)
            }
        }
    }

    fn run(&self, request: &AssemblyRequest) -> Result<AssemblyReport> {
        if request.documents.is_empty() {
            return Err(PdfSplitError::NoInput);
        }

        for document in &request.documents {
            PdfReader::check_path_exists(document)?;
        }

        match AssemblyMode::select(request.documents.len(), request.merge) {
            AssemblyMode::MergeDocuments => self.merge_documents(&request.documents),
            mode => self.split_document(&request.documents[0], request, mode),
        }
    }

    fn split_document(
        &self,
        source: &Path,
        request: &AssemblyRequest,
        mode: AssemblyMode,
    ) -> Result<AssemblyReport> {
        let page_count = self.codec.page_count(source)?;
        let selection = &request.selection;
        let bounds = Bounds::resolve(selection.start, selection.end, &selection.pages, page_count);

        let mut report = AssemblyReport::new(mode, self.options.dry_run);
        report.bounds = Some(bounds);

        let mut buffer = OutputBuffer::new();
        let mut pending = 0;

        for page in 1..=page_count {
            if !selection.pages.is_empty() && !selection.pages.contains(page) {
                continue;
            }

            if bounds.is_past(page) {
                break;
            }

            if bounds.admits(page) {
                let rotate_delta = request.edits.edit(page).pdf_rotate_delta();

                match self.copy_page(source, page, rotate_delta, &mut buffer) {
                    Ok(()) if mode == AssemblyMode::SplitToMultiple => {
                        let target = naming::split_output(source, page, page_count);
                        let single = std::mem::take(&mut buffer);
                        match self.flush(single, &target) {
                            Ok(()) => {
                                report.outputs.push(target);
                                report.pages_written += 1;
                            }
                            Err(err) => self.record_failure(&mut report, source, page, err),
                        }
                    }
                    Ok(()) => pending += 1,
                    Err(err) => self.record_failure(&mut report, source, page, err),
                }
            }

            if page == bounds.end {
                break;
            }
        }

        if mode == AssemblyMode::SplitToSingle && pending > 0 {
            let target = naming::single_output(source);
            self.flush(buffer, &target)?;
            report.outputs.push(target);
            report.pages_written = pending;
        }

        if report.outputs.is_empty() && report.failures.is_empty() {
            self.notifier.warning(&format!(
                "No pages of {} matched the selection (pages {}-{} of {page_count})",
                source.display(),
                bounds.start,
                bounds.end,
            ));
        }

        Ok(report)
    }

    fn merge_documents(&self, documents: &[PathBuf]) -> Result<AssemblyReport> {
        let mut report = AssemblyReport::new(AssemblyMode::MergeDocuments, self.options.dry_run);
        let mut buffer = OutputBuffer::new();
        let mut pending = 0;

        for document in documents {
            let page_count = self.codec.page_count(document)?;
            self.notifier.progress(&format!(
                "Adding {} ({page_count} pages)",
                document.display()
            ));

            for page in 1..=page_count {
                match self.copy_page(document, page, 0, &mut buffer) {
                    Ok(()) => pending += 1,
                    Err(err) => self.record_failure(&mut report, document, page, err),
                }
            }
        }

        if pending > 0 {
            let target = naming::merged_output(&documents[0]);
            self.flush(buffer, &target)?;
            report.outputs.push(target);
            report.pages_written = pending;
        } else if report.failures.is_empty() {
            self.notifier.warning("The selected documents have no pages to merge");
        }

        Ok(report)
    }

    fn copy_page(
        &self,
        source: &Path,
        page: u32,
        rotate_delta: i64,
        buffer: &mut OutputBuffer,
    ) -> Result<()> {
        if self.options.dry_run {
            return Ok(());
        }

        self.codec
            .copy_page(source, page, rotate_delta, buffer)
            .map_err(|err| match err.kind() {
                ErrorKind::PageLocal => err,
                _ => PdfSplitError::page_copy_failed(source.to_path_buf(), page, err.to_string()),
            })
    }

    fn flush(&self, buffer: OutputBuffer, target: &Path) -> Result<()> {
        if self.options.overwrite == OverwriteMode::NoClobber && target.exists() {
            return Err(PdfSplitError::output_exists(target.to_path_buf()));
        }

        if self.options.dry_run {
            self.notifier
                .progress(&format!("Would write {}", target.display()));
            return Ok(());
        }

        self.codec.write(buffer, target)?;
        self.notifier
            .progress(&format!("Wrote {}", target.display()));
        Ok(())
    }

    fn record_failure(
        &self,
        report: &mut AssemblyReport,
        document: &Path,
        page: u32,
        err: PdfSplitError,
    ) {
        let reason = err.to_string();
        self.notifier.error(&Notice::for_page(page, reason.clone()));
        report.failures.push(PageFailure {
            document: document.to_path_buf(),
            page,
            reason,
        });
    }
}
