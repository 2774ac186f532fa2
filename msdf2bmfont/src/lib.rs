//! Convert [msdf-atlas-gen] font descriptions into BMFont files
//!
//! [`convert`] maps an [`MsdfFont`](read_msdf::MsdfFont) read by
//! [`read_msdf`] onto a [`BitmapFont`](write_bmfont::BitmapFont), which any
//! of the [`write_bmfont`] writers can then encode. The [`command`] module
//! holds the command line surface of the `msdf2bmfont` binary.
//!
//! # Example
//!
//! ```no_run
//! use msdf2bmfont::{convert, ConvertOptions};
//! use write_bmfont::{FontWriter, RecordOrder, XmlWriter};
//!
//! let font = read_msdf::read_font_from_path("font.json").unwrap();
//! let bitmap = convert(&font, &ConvertOptions::new("font.png"));
//! XmlWriter::new(RecordOrder::Insertion)
//!     .write_font_to_path(&bitmap, "font.fnt".as_ref())
//!     .unwrap();
//! ```
//!
//! [msdf-atlas-gen]: https://github.com/Chlumsky/msdf-atlas-gen

#![forbid(unsafe_code)]

pub mod command;
mod convert;

use std::path::PathBuf;

use read_msdf::ReadError;
use thiserror::Error;
use write_bmfont::WriteError;

pub use convert::{convert, ConvertOptions};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: ReadError },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: WriteError },
}
