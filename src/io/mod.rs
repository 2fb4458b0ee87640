//! Reading source PDFs and writing assembled output.

mod buffer;
mod codec;
mod reader;
mod writer;

pub use buffer::OutputBuffer;
pub use codec::{DocumentCodec, LopdfCodec};
pub use reader::PdfReader;
pub use writer::{PdfWriter, WriteOptions};
