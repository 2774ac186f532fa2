use std::{
    fs::File,
    hash::Hash,
    io::{BufWriter, Write},
    path::Path,
};

use indexmap::IndexMap;

use crate::{BinaryWriter, BitmapFont, TextWriter, WriteError, XmlWriter};

/// A type that can encode a [`BitmapFont`].
pub trait FontWriter {
    /// Encode `font` into `out`.
    ///
    /// If this fails with an I/O error, some of the output may already have
    /// been written.
    fn write_font(&self, font: &BitmapFont, out: &mut dyn Write) -> Result<(), WriteError>;

    /// Encode `font` into a new file at `path`, replacing any existing file.
    ///
    /// A failure part way through can leave a truncated file behind; it is
    /// not removed.
    fn write_font_to_path(&self, font: &BitmapFont, path: &Path) -> Result<(), WriteError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_font(font, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Encode a font into a new buffer.
pub fn dump_font(writer: &dyn FontWriter, font: &BitmapFont) -> Result<Vec<u8>, WriteError> {
    let mut out = Vec::new();
    writer.write_font(font, &mut out)?;
    Ok(out)
}

/// The order in which keyed records (characters, kerning pairs and, outside
/// the binary format, pages) are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordOrder {
    /// The order the records were inserted into the font.
    #[default]
    Insertion,
    /// Ascending by key.
    Ascending,
}

impl RecordOrder {
    pub(crate) fn entries<'a, K, V>(self, map: &'a IndexMap<K, V>) -> Vec<(&'a K, &'a V)>
    where
        K: Ord + Hash,
    {
        let mut entries: Vec<_> = map.iter().collect();
        if self == RecordOrder::Ascending {
            entries.sort_by_key(|(key, _)| *key);
        }
        entries
    }
}

/// One of the three BMFont encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    Binary,
    Text,
    #[default]
    Xml,
}

impl Format {
    /// A writer for this format, emitting records in `order`.
    pub fn writer(self, order: RecordOrder) -> Box<dyn FontWriter> {
        match self {
            Format::Binary => Box::new(BinaryWriter::new(order)),
            Format::Text => Box::new(TextWriter::new(order)),
            Format::Xml => Box::new(XmlWriter::new(order)),
        }
    }
}
