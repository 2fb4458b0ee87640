//! CLI argument parsing for pdfsplit.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let config = cli.to_config().expect("invalid arguments");
//! println!("{} input(s)", config.inputs.len());
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{CompressionLevel, Config, OverwriteMode};
use crate::edit::{EditState, RotationDirection};
use crate::error::{PdfSplitError, Result};
use crate::range::PageSet;
use crate::utils::collect_paths_for_patterns;

/// Split PDF documents into pages, or merge them into one.
///
/// With a single input, every selected page is written to its own file
/// (`name_01.pdf`, `name_02.pdf`, ...), or with --merge to `name_merged.pdf`.
/// With several inputs, all their pages are merged into `merged.pdf` next
/// to the first input.
#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(version)]
#[command(about = "Split PDF documents into pages, or merge them into one", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF files (glob patterns are expanded)
    ///
    /// Examples:
    ///   pdfsplit report.pdf --pages 1-3
    ///   pdfsplit chapter*.pdf
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Read additional input paths from a file (one path per line)
    ///
    /// Blank lines and lines starting with '#' are ignored.
    /// Use '-' to read from stdin.
    #[arg(long, value_name = "FILE")]
    pub input_list: Option<PathBuf>,

    /// Pages to select (e.g. "1,3-5,8")
    ///
    /// Applies to a single input only. Without it every page is selected.
    #[arg(short, long, value_name = "RANGE")]
    pub pages: Option<String>,

    /// Collect the selected pages of a single input into one file
    #[arg(short, long)]
    pub merge: bool,

    /// First page to consider (overrides the selection's first page)
    #[arg(long, value_name = "PAGE")]
    pub start: Option<u32>,

    /// Last page to consider (overrides the selection's last page)
    #[arg(long, value_name = "PAGE")]
    pub end: Option<u32>,

    /// Rotate a page by 90 degrees, e.g. "3:cw" or "4:ccw"
    ///
    /// May be repeated; rotations of the same page accumulate.
    #[arg(short, long, value_name = "PAGE:DIR", value_parser = parse_page_rotation)]
    pub rotate: Vec<PageRotation>,

    /// Dry run - show which files would be written without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Never overwrite existing output files
    #[arg(long)]
    pub no_clobber: bool,

    /// Compression level for output PDFs
    ///
    /// - none: No compression
    /// - standard: Compress content streams (default)
    /// - maximum: Also drop unreferenced objects
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output - show every file as it is written
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// One `--rotate PAGE:DIR` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRotation {
    pub page: u32,
    pub direction: RotationDirection,
}

impl FromStr for PageRotation {
    type Err = PdfSplitError;

    fn from_str(s: &str) -> Result<Self> {
        let (page, direction) = s.split_once(':').ok_or_else(|| {
            PdfSplitError::invalid_config(format!(
                "Invalid rotation '{s}': expected PAGE:DIR, e.g. 3:cw"
            ))
        })?;

        let page = page
            .trim()
            .parse()
            .map_err(|_| PdfSplitError::invalid_config(format!("Invalid page number: {page}")))?;

        Ok(Self {
            page,
            direction: direction.trim().parse()?,
        })
    }
}

fn parse_page_rotation(s: &str) -> std::result::Result<PageRotation, String> {
    s.parse().map_err(|e: PdfSplitError| e.to_string())
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// Glob patterns in the direct inputs are expanded; `--input-list` is
    /// not read here (see [`Cli::resolve_config`]).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the page range cannot be parsed
    /// - a rotation or compression level is invalid
    /// - configuration validation fails
    pub fn to_config(&self) -> Result<Config> {
        let inputs = collect_paths_for_patterns(&self.inputs)?;
        self.build_config(inputs)
    }

    /// Like [`Cli::to_config`], with the paths from `--input-list`
    /// appended after the direct inputs.
    pub async fn resolve_config(&self) -> Result<Config> {
        let inputs = self.get_all_inputs().await?;
        self.build_config(inputs)
    }

    fn build_config(&self, inputs: Vec<PathBuf>) -> Result<Config> {
        let compression = CompressionLevel::from_str(&self.compression)?;

        let pages = match self.pages {
            Some(ref expression) => PageSet::parse(expression)?,
            None => PageSet::default(),
        };

        let mut edits = EditState::new();
        for rotation in &self.rotate {
            edits.rotate(rotation.page, rotation.direction);
        }

        let overwrite_mode = if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Overwrite
        };

        let config = Config {
            inputs,
            pages,
            start: self.start,
            end: self.end,
            merge: self.merge,
            edits,
            dry_run: self.dry_run,
            overwrite_mode,
            compression,
            json: self.json,
            verbose: self.verbose,
            quiet: self.quiet,
        };

        config.validate()?;

        Ok(config)
    }

    /// Get all input paths including those from the input-list file.
    ///
    /// An empty result is not an error here; the engine reports it.
    pub async fn get_all_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut all_inputs = collect_paths_for_patterns(&self.inputs)?;

        if let Some(ref input_list_path) = self.input_list {
            let additional_inputs = read_input_list(input_list_path).await?;
            all_inputs.extend(additional_inputs);
        }

        Ok(all_inputs)
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfSplitError;

    fn try_from(cli: &Cli) -> Result<Self> {
        cli.to_config()
    }
}

/// Read input paths from a file, or from stdin when `path` is `-`.
async fn read_input_list(path: &Path) -> Result<Vec<PathBuf>> {
    use tokio::fs::File;
    use tokio::io::BufReader;

    if path.as_os_str() == "-" {
        return read_paths(BufReader::new(tokio::io::stdin()), path).await;
    }

    let file = File::open(path)
        .await
        .map_err(|e| PdfSplitError::FailedToReadInputList {
            path: path.to_path_buf(),
            source: e,
        })?;

    read_paths(BufReader::new(file), path).await
}

async fn read_paths<R>(reader: R, origin: &Path) -> Result<Vec<PathBuf>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    use tokio::io::AsyncBufReadExt;

    let mut lines = reader.lines();
    let mut paths = Vec::new();

    while let Some(line) =
        lines
            .next_line()
            .await
            .map_err(|e| PdfSplitError::FailedToReadInputList {
                path: origin.to_path_buf(),
                source: e,
            })?
    {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        paths.push(PathBuf::from(line));
    }

    Ok(paths)
}
