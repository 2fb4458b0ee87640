//! pdfsplit - split PDF documents into pages, or merge them into one.
//!
//! The library is built around a page-selection engine:
//!
//! - [`range`] parses page-range expressions such as `1,3-5,8`;
//! - [`bounds`] reconciles a selection with explicit start/end pages;
//! - [`edit`] keeps pending per-page rotations;
//! - [`assembly`] drives a document codec to write split or merged output,
//!   reporting failures through a [`notify::Notifier`].
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::assembly::{AssemblyEngine, AssemblyRequest, Selection};
//! use pdfsplit::io::LopdfCodec;
//! use pdfsplit::notify::Notices;
//! use pdfsplit::range::PageSet;
//! use std::path::PathBuf;
//!
//! # fn example() -> pdfsplit::Result<()> {
//! let request = AssemblyRequest {
//!     documents: vec![PathBuf::from("report.pdf")],
//!     selection: Selection::pages(PageSet::parse("1,3-5")?),
//!     ..Default::default()
//! };
//!
//! let notices = Notices::new();
//! let report = AssemblyEngine::new(LopdfCodec::default(), &notices).assemble(&request)?;
//! println!("wrote {} file(s)", report.outputs.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod assembly;
pub mod bounds;
pub mod cli;
pub mod config;
pub mod edit;
pub mod error;
pub mod io;
pub mod notify;
pub mod output;
pub mod range;
pub mod utils;

pub use config::Config;
pub use error::{PdfSplitError, Result};

use crate::assembly::{AssemblyEngine, AssemblyReport};
use crate::io::{LopdfCodec, PdfWriter};
use crate::notify::Notifier;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run one assembly pass for `config` on the blocking thread pool.
///
/// Fatal errors have already been sent to `notifier` when this returns
/// `Err`.
pub async fn run<N>(config: &Config, notifier: N) -> Result<AssemblyReport>
where
    N: Notifier + Send + 'static,
{
    let codec = LopdfCodec::new(PdfWriter::with_compression(config.compression));
    let request = config.request();
    let options = config.options();

    tokio::task::spawn_blocking(move || {
        AssemblyEngine::new(codec, notifier)
            .with_options(options)
            .assemble(&request)
    })
    .await
    .map_err(|e| PdfSplitError::other(format!("Assembly task failed: {e}")))?
}
