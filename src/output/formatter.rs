//! Message formatting and display.
//!
//! This module provides formatted output for different message types
//! with support for quiet and verbose modes. Warnings and errors go to
//! stderr so that `--json` output on stdout stays machine-readable.
//!
//! # Examples
//!
//! ```
//! use pdfsplit::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Splitting report.pdf...");
//! formatter.success("Wrote 3 files");
//! formatter.error("Something went wrong");
//! ```

use crate::assembly::{AssemblyMode, AssemblyReport};
use crate::cli::Cli;
use crate::config::Config;
use crate::notify::{Notice, Notifier};
use std::io::{self, IsTerminal};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter from configuration.
    ///
    /// JSON output implies quiet mode.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet || config.json, config.verbose && !config.json)
    }

    /// Create a formatter from raw CLI flags.
    ///
    /// Used to report errors that happen before a [`Config`] exists.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.quiet || cli.json, cli.verbose && !cli.json)
    }

    /// Create a quiet formatter (only warnings and errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    /// Returns true if stderr is a TTY and TERM is set.
    fn should_use_color() -> bool {
        io::stderr().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message.
    ///
    /// Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message.
    ///
    /// Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning message.
    ///
    /// Always displayed (even in quiet mode).
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error message.
    ///
    /// Always displayed.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a debug/verbose message.
    ///
    /// Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let (prefix, color_code) = match level {
            MessageLevel::Info => ("", ""),
            MessageLevel::Success => ("✓ ", "\x1b[32m"), // Green
            MessageLevel::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            MessageLevel::Error => ("✗ ", "\x1b[31m"),   // Red
            MessageLevel::Debug => ("→ ", "\x1b[36m"),   // Cyan
        };

        let reset = "\x1b[0m";
        let line = if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}{reset}")
        } else {
            format!("{prefix}{message}")
        };

        match level {
            MessageLevel::Warning | MessageLevel::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }

    /// Print a section header.
    ///
    /// Suppressed in quiet mode.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n{title}");
        }
    }

    /// Print a labelled value.
    ///
    /// Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a blank line.
    ///
    /// Suppressed in quiet mode.
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Notifier for OutputFormatter {
    fn error(&self, notice: &Notice) {
        OutputFormatter::error(self, &notice.message);
    }

    fn warning(&self, message: &str) {
        OutputFormatter::warning(self, message);
    }

    fn progress(&self, message: &str) {
        self.debug(message);
    }

    fn complete(&self, report: &AssemblyReport) {
        let verb = if report.dry_run { "Would write" } else { "Wrote" };
        let what = match report.mode {
            AssemblyMode::SplitToMultiple => "page file(s)",
            AssemblyMode::SplitToSingle | AssemblyMode::MergeDocuments => "file(s)",
        };

        if !report.outputs.is_empty() {
            self.success(&format!(
                "{verb} {} {what} ({} page(s))",
                report.outputs.len(),
                report.pages_written
            ));
        }

        if !report.failures.is_empty() {
            OutputFormatter::warning(
                self,
                &format!("{} page(s) could not be processed", report.failures.len()),
            );
        }

        if self.verbose {
            if let Some(bounds) = report.bounds {
                self.detail("Pages", &format!("{}-{}", bounds.start, bounds.end));
            }
            for output in &report.outputs {
                self.detail("Output", &output.display().to_string());
            }
        }
    }
}
