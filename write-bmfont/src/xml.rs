//! The XML encoding.

use std::io::{self, Write};

use crate::{
    record::{Document, Record},
    write::FontWriter,
    BitmapFont, RecordOrder, WriteError,
};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "  ";

/// Writes a `<font>` document, indented by two spaces per level.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlWriter {
    order: RecordOrder,
}

impl XmlWriter {
    pub fn new(order: RecordOrder) -> Self {
        XmlWriter { order }
    }
}

/// Escape a string for use in a double quoted attribute value.
fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push(c),
        }
    }
    result
}

fn write_attributes(out: &mut dyn Write, record: &Record) -> io::Result<()> {
    for (key, value) in &record.fields {
        write!(out, " {key}=\"{}\"", escape(&value.to_string()))?;
    }
    Ok(())
}

/// `<tag a="b" />`
fn write_element(out: &mut dyn Write, depth: usize, record: &Record) -> io::Result<()> {
    write!(out, "{}<{}", INDENT.repeat(depth), record.tag)?;
    write_attributes(out, record)?;
    out.write_all(b" />\n")
}

/// `<tag a="b">`, to be followed by children and a closing tag.
fn write_start(out: &mut dyn Write, depth: usize, record: &Record) -> io::Result<()> {
    write!(out, "{}<{}", INDENT.repeat(depth), record.tag)?;
    write_attributes(out, record)?;
    out.write_all(b">\n")
}

fn write_end(out: &mut dyn Write, depth: usize, tag: &str) -> io::Result<()> {
    writeln!(out, "{}</{tag}>", INDENT.repeat(depth))
}

impl FontWriter for XmlWriter {
    fn write_font(&self, font: &BitmapFont, out: &mut dyn Write) -> Result<(), WriteError> {
        let document = Document::new(font, self.order);
        writeln!(out, "{DECLARATION}")?;
        writeln!(out, "<font>")?;
        for record in document.info.iter().chain(&document.common) {
            write_element(out, 1, record)?;
        }
        if !document.pages.is_empty() {
            writeln!(out, "{INDENT}<pages>")?;
            for record in &document.pages {
                write_element(out, 2, record)?;
            }
            write_end(out, 1, "pages")?;
        }
        for group in document.chars.iter().chain(&document.kernings) {
            write_start(out, 1, &group.header())?;
            for record in &group.records {
                write_element(out, 2, record)?;
            }
            write_end(out, 1, group.tag)?;
        }
        writeln!(out, "</font>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_helpers::simple_font, write::dump_font, KerningPair};
    use pretty_assertions::assert_eq;

    fn dump(font: &BitmapFont) -> String {
        let bytes = dump_font(&XmlWriter::default(), font).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn simple() {
        assert_eq!(
            dump(&simple_font()),
            bmfont_test_data::bmfont::SIMPLE_FONT_XML
        );
    }

    #[test]
    fn empty_font() {
        assert_eq!(
            dump(&BitmapFont::new()),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<font>\n</font>\n"
        );
    }

    #[test]
    fn no_byte_order_mark() {
        assert!(dump(&simple_font()).starts_with("<?xml"));
    }

    #[test]
    fn kernings() {
        let mut font = BitmapFont::new();
        font.insert_kerning_pair(KerningPair::new(65, 86), -1);
        assert_eq!(
            dump(&font),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <font>\n  \
               <kernings count=\"1\">\n    \
                 <kerning first=\"65\" second=\"86\" amount=\"-1\" />\n  \
               </kernings>\n\
             </font>\n"
        );
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape("<\"Tom\" & 'Jerry'>\n"),
            "&lt;&quot;Tom&quot; &amp; 'Jerry'&gt;&#10;"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut font = BitmapFont::new();
        font.insert_page(0, "a&b \"1\".png");
        let xml = dump(&font);
        assert!(
            xml.contains(r#"<page id="0" file="a&amp;b &quot;1&quot;.png" />"#),
            "{xml}"
        );
    }
}
