//! Writing BMFont bitmap font descriptions
//!
//! This crate models a [BMFont] description as a [`BitmapFont`] and encodes
//! it in any of the three forms BMFont readers understand: the compact
//! [binary](BinaryWriter) format (version 3), the line oriented
//! [text](TextWriter) format, and [XML](XmlWriter). The three encodings carry
//! the same fields.
//!
//! Characters, kerning pairs and pages are kept in insertion order; each
//! writer takes a [`RecordOrder`] deciding whether they are written in that
//! order or sorted by key.
//!
//! # Example
//!
//! ```
//! use write_bmfont::{dump_font, BitmapFont, Character, Format, RecordOrder};
//!
//! let mut font = BitmapFont::new();
//! font.insert_page(0, "atlas.png");
//! font.insert_character(65, Character { width: 16, height: 16, x_advance: 19, ..Default::default() });
//!
//! let writer = Format::Binary.writer(RecordOrder::Ascending);
//! let bytes = dump_font(writer.as_ref(), &font).unwrap();
//! assert_eq!(&bytes[..4], b"BMF\x03");
//! ```
//!
//! [BMFont]: https://www.angelcode.com/products/bmfont/doc/file_format.html

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod binary;
mod charset;
mod error;
mod font;
mod record;
mod round;
mod text;
mod write;
mod xml;

#[cfg(test)]
mod test_helpers;

pub use binary::BinaryWriter;
pub use charset::{Charset, UnknownCharset};
pub use error::WriteError;
pub use font::{
    BitmapFont, Channel, ChannelData, Character, Common, Info, KerningPair, Padding, Spacing,
};
pub use round::PixelRound;
pub use text::TextWriter;
pub use write::{dump_font, FontWriter, Format, RecordOrder};
pub use xml::XmlWriter;
