//! Reading MSDF font descriptions
//!
//! This crate parses the JSON layout written by [msdf-atlas-gen] into an
//! [`MsdfFont`]: the atlas parameters, the font metrics (in ems) and the
//! list of glyphs with their plane and atlas bounds.
//!
//! The reader is tolerant of schema additions: members it does not know are
//! skipped at every nesting level, and members that are missing take their
//! zero value. Malformed JSON, or a member of the wrong type, is an error
//! and no partial font is returned.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_json = std::path::Path::new("");
//! let font = read_msdf::read_font_from_path(path_to_my_json).expect("failed to read font");
//! println!("{} glyphs at {}px per em", font.glyphs.len(), font.atlas.size);
//! ```
//!
//! [msdf-atlas-gen]: https://github.com/Chlumsky/msdf-atlas-gen

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod font;
mod json;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::Deserialize;

pub use error::ReadError;
pub use font::{Atlas, Bounds, Glyph, Metrics, MsdfFont, YOrigin};

/// Read a font description from a stream.
///
/// The stream is consumed in a single buffered pass; the whole document must
/// be one JSON object, optionally followed by whitespace.
pub fn read_font(reader: impl Read) -> Result<MsdfFont, ReadError> {
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(reader));
    let font = MsdfFont::deserialize(&mut deserializer)?;
    deserializer.end()?;
    log::debug!(
        "read msdf font: {} glyphs, atlas {}x{} at size {}",
        font.glyphs.len(),
        font.atlas.width,
        font.atlas.height,
        font.atlas.size
    );
    Ok(font)
}

/// Read a font description from a byte slice.
pub fn read_font_from_slice(data: &[u8]) -> Result<MsdfFont, ReadError> {
    let mut deserializer = serde_json::Deserializer::from_slice(data);
    let font = MsdfFont::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(font)
}

/// Read a font description from the file at `path`.
pub fn read_font_from_path(path: impl AsRef<Path>) -> Result<MsdfFont, ReadError> {
    let path = path.as_ref();
    log::debug!("opening {}", path.display());
    let file = File::open(path)?;
    read_font(file)
}
