//! The line oriented text encoding.

use std::io::{self, Write};

use crate::{
    record::{Document, Record, Value},
    write::FontWriter,
    BitmapFont, RecordOrder, WriteError,
};

/// Writes one record per line, as `tag key=value key=value`.
///
/// Strings are written in double quotes, without escaping.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextWriter {
    order: RecordOrder,
}

impl TextWriter {
    pub fn new(order: RecordOrder) -> Self {
        TextWriter { order }
    }
}

fn write_record(out: &mut dyn Write, record: &Record) -> io::Result<()> {
    out.write_all(record.tag.as_bytes())?;
    for (key, value) in &record.fields {
        match value {
            Value::Str(_) => write!(out, " {key}=\"{value}\"")?,
            _ => write!(out, " {key}={value}")?,
        }
    }
    out.write_all(b"\n")
}

impl FontWriter for TextWriter {
    fn write_font(&self, font: &BitmapFont, out: &mut dyn Write) -> Result<(), WriteError> {
        let document = Document::new(font, self.order);
        let records = document
            .info
            .iter()
            .chain(&document.common)
            .chain(&document.pages);
        for record in records {
            write_record(out, record)?;
        }
        for group in document.chars.iter().chain(&document.kernings) {
            write_record(out, &group.header())?;
            for record in &group.records {
                write_record(out, record)?;
            }
        }
        Ok(())
    }
}
