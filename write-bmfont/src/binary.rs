//! The binary BMFont encoding (version 3).
//!
//! A file is the magic `BMF`, a version byte, and a sequence of blocks. Each
//! block is a one byte id, a little-endian `u32` payload size, and the
//! payload. All integers are little-endian.

use std::io::Write;

use num_enum::IntoPrimitive;

use crate::{
    write::FontWriter, BitmapFont, Character, Charset, Common, Info, KerningPair, RecordOrder,
    WriteError,
};

const MAGIC: &[u8; 3] = b"BMF";
const VERSION: u8 = 3;

/// A type that can be written out as part of a binary BMFont file.
pub trait BmfWrite {
    /// Write our little-endian encoding into this [BlockWriter].
    fn write_into(&self, writer: &mut BlockWriter);
}

/// Accumulates the bytes of a binary BMFont file.
#[derive(Debug, Default)]
pub struct BlockWriter {
    bytes: Vec<u8>,
}

impl BlockWriter {
    /// Write raw bytes.
    ///
    /// The caller is responsible for ensuring bytes are in little-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// Write a block header followed by `payload`.
    ///
    /// The size field is filled in from the number of bytes the payload
    /// actually wrote.
    fn write_block(&mut self, id: BlockId, payload: &dyn BmfWrite) {
        u8::from(id).write_into(self);
        let size_pos = self.bytes.len();
        0u32.write_into(self);
        payload.write_into(self);
        let size = (self.bytes.len() - size_pos - 4) as u32;
        self.bytes[size_pos..size_pos + 4].copy_from_slice(&size.to_le_bytes());
        log::debug!("{id:?} block, {size} bytes");
    }

    fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_le_bytes {
    ($ty:ty) => {
        impl BmfWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut BlockWriter) {
                writer.write_slice(&self.to_le_bytes())
            }
        }
    };
}

write_le_bytes!(u8);
write_le_bytes!(u16);
write_le_bytes!(i16);
write_le_bytes!(u32);

impl<T: BmfWrite> BmfWrite for [T] {
    fn write_into(&self, writer: &mut BlockWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: BmfWrite, const N: usize> BmfWrite for [T; N] {
    fn write_into(&self, writer: &mut BlockWriter) {
        self.as_slice().write_into(writer)
    }
}

impl<T: BmfWrite> BmfWrite for Vec<T> {
    fn write_into(&self, writer: &mut BlockWriter) {
        self.as_slice().write_into(writer)
    }
}

/// A null-terminated string, one byte per `char`.
///
/// Characters outside of Latin-1 are truncated to their low byte; a
/// character outside the BMP is still a single byte.
struct CString<'a>(&'a str);

impl BmfWrite for CString<'_> {
    fn write_into(&self, writer: &mut BlockWriter) {
        for c in self.0.chars() {
            (c as u32 as u8).write_into(writer);
        }
        0u8.write_into(writer);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
enum BlockId {
    Info = 1,
    Common = 2,
    Pages = 3,
    Chars = 4,
    KerningPairs = 5,
}

#[inline]
fn set_bit(bits: u8, bit: u8, on: bool) -> u8 {
    if on {
        bits | (1 << bit)
    } else {
        bits
    }
}

struct InfoBlock<'a> {
    info: &'a Info,
    charset: u8,
}

impl<'a> InfoBlock<'a> {
    fn new(info: &'a Info) -> Result<Self, WriteError> {
        let charset = Charset::id_for_name(&info.charset)?;
        Ok(InfoBlock { info, charset })
    }
}

impl BmfWrite for InfoBlock<'_> {
    fn write_into(&self, writer: &mut BlockWriter) {
        let info = self.info;
        let mut bits = 0;
        bits = set_bit(bits, 7, info.smooth);
        bits = set_bit(bits, 6, info.unicode);
        bits = set_bit(bits, 5, info.italic);
        bits = set_bit(bits, 4, info.bold);

        (info.size as i16).write_into(writer);
        bits.write_into(writer);
        self.charset.write_into(writer);
        (info.stretch_height as u16).write_into(writer);
        (info.supersampling as u8).write_into(writer);
        [
            info.padding.up as u8,
            info.padding.right as u8,
            info.padding.down as u8,
            info.padding.left as u8,
            info.spacing.horizontal as u8,
            info.spacing.vertical as u8,
            info.outline as u8,
        ]
        .write_into(writer);
        CString(&info.face).write_into(writer);
    }
}

struct CommonBlock<'a> {
    common: &'a Common,
    page_count: usize,
}

impl BmfWrite for CommonBlock<'_> {
    fn write_into(&self, writer: &mut BlockWriter) {
        let common = self.common;
        [
            common.line_height as u16,
            common.base as u16,
            common.scale_width as u16,
            common.scale_height as u16,
            self.page_count as u16,
        ]
        .write_into(writer);
        set_bit(0, 0, common.packed).write_into(writer);
        [
            common.alpha_channel,
            common.red_channel,
            common.green_channel,
            common.blue_channel,
        ]
        .map(u8::from)
        .write_into(writer);
    }
}

/// Page names in id order.
struct PagesBlock<'a>(Vec<&'a str>);

impl<'a> PagesBlock<'a> {
    /// Fails unless the page ids are exactly `0..pages.len()`.
    fn new(font: &'a BitmapFont) -> Result<Self, WriteError> {
        let pages = RecordOrder::Ascending.entries(&font.pages);
        for (expected, (found, _)) in (0u32..).zip(&pages) {
            if expected != **found {
                return Err(WriteError::NonContiguousPageIds {
                    expected,
                    found: **found,
                });
            }
        }
        Ok(PagesBlock(
            pages.into_iter().map(|(_, file)| file.as_str()).collect(),
        ))
    }
}

impl BmfWrite for PagesBlock<'_> {
    fn write_into(&self, writer: &mut BlockWriter) {
        for file in self.0.iter().copied() {
            CString(file).write_into(writer);
        }
    }
}

struct CharRecord<'a> {
    id: u32,
    character: &'a Character,
}

impl BmfWrite for CharRecord<'_> {
    fn write_into(&self, writer: &mut BlockWriter) {
        let c = self.character;
        self.id.write_into(writer);
        [c.x as u16, c.y as u16, c.width as u16, c.height as u16].write_into(writer);
        [c.x_offset as i16, c.y_offset as i16, c.x_advance as i16].write_into(writer);
        (c.page as u8).write_into(writer);
        u8::from(c.channel).write_into(writer);
    }
}

struct KerningRecord {
    pair: KerningPair,
    amount: i32,
}

impl BmfWrite for KerningRecord {
    fn write_into(&self, writer: &mut BlockWriter) {
        self.pair.first.write_into(writer);
        self.pair.second.write_into(writer);
        (self.amount as i16).write_into(writer);
    }
}

/// Writes the binary encoding.
///
/// Pages are always written in ascending id order; `order` applies to
/// characters and kerning pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryWriter {
    order: RecordOrder,
}

impl BinaryWriter {
    pub fn new(order: RecordOrder) -> Self {
        BinaryWriter { order }
    }

    /// Encode `font` into a new buffer.
    ///
    /// Nothing is encoded if the font cannot be represented, so an error
    /// never leaves partial output behind.
    pub fn encode(&self, font: &BitmapFont) -> Result<Vec<u8>, WriteError> {
        let info = font.info.as_ref().map(InfoBlock::new).transpose()?;
        let pages = PagesBlock::new(font)?;

        let mut writer = BlockWriter::default();
        writer.write_slice(MAGIC);
        VERSION.write_into(&mut writer);

        if let Some(info) = info {
            writer.write_block(BlockId::Info, &info);
        }
        if let Some(common) = &font.common {
            let common = CommonBlock {
                common,
                page_count: font.pages.len(),
            };
            writer.write_block(BlockId::Common, &common);
        }
        if !pages.0.is_empty() {
            writer.write_block(BlockId::Pages, &pages);
        }
        if !font.characters.is_empty() {
            let chars: Vec<_> = self
                .order
                .entries(&font.characters)
                .into_iter()
                .map(|(id, character)| CharRecord { id: *id, character })
                .collect();
            writer.write_block(BlockId::Chars, &chars);
        }
        if !font.kerning_pairs.is_empty() {
            let pairs: Vec<_> = self
                .order
                .entries(&font.kerning_pairs)
                .into_iter()
                .map(|(pair, amount)| KerningRecord {
                    pair: *pair,
                    amount: *amount,
                })
                .collect();
            writer.write_block(BlockId::KerningPairs, &pairs);
        }
        Ok(writer.into_data())
    }
}

impl FontWriter for BinaryWriter {
    fn write_font(&self, font: &BitmapFont, out: &mut dyn Write) -> Result<(), WriteError> {
        let bytes = self.encode(font)?;
        out.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::simple_font;
    use pretty_assertions::assert_eq;

    /// Split an encoded file into `(id, declared size, payload)` blocks.
    fn blocks(bytes: &[u8]) -> Vec<(u8, u32, &[u8])> {
        assert_eq!(&bytes[..4], b"BMF\x03");
        let mut rest = &bytes[4..];
        let mut result = Vec::new();
        while !rest.is_empty() {
            let id = rest[0];
            let size = u32::from_le_bytes(rest[1..5].try_into().unwrap());
            let payload = &rest[5..5 + size as usize];
            result.push((id, size, payload));
            rest = &rest[5 + size as usize..];
        }
        result
    }

    #[test]
    fn simple() {
        let bytes = BinaryWriter::default().encode(&simple_font()).unwrap();
        assert_eq!(bytes, bmfont_test_data::bmfont::SIMPLE_FONT_BIN);
    }

    #[test]
    fn empty_font_is_only_a_header() {
        let bytes = BinaryWriter::default().encode(&BitmapFont::new()).unwrap();
        assert_eq!(bytes, b"BMF\x03");
    }

    #[test]
    fn empty_face() {
        let bytes = BinaryWriter::default().encode(&simple_font()).unwrap();
        let (id, size, payload) = blocks(&bytes)[0];
        assert_eq!(id, 1);
        assert_eq!(size, 15);
        assert_eq!(&payload[14..], &[0x00]);
    }

    #[test]
    fn face_is_one_byte_per_char() {
        let mut font = simple_font();
        font.info.as_mut().unwrap().face = "Café Ǆ".to_string();
        let bytes = BinaryWriter::default().encode(&font).unwrap();
        let (_, size, payload) = blocks(&bytes)[0];
        assert_eq!(size, 15 + 6);
        // 'é' is U+00E9, 'Ǆ' is U+01C4
        assert_eq!(&payload[14..], &[b'C', b'a', b'f', 0xE9, b' ', 0xC4, 0x00]);
    }

    #[test]
    fn astral_char_is_one_byte() {
        let mut font = simple_font();
        // U+1F641 truncates to 0x41
        font.info.as_mut().unwrap().face = "a\u{1F641}b".to_string();
        let bytes = BinaryWriter::default().encode(&font).unwrap();
        let (_, size, payload) = blocks(&bytes)[0];
        assert_eq!(size, 15 + 3);
        assert_eq!(&payload[14..], &[b'a', 0x41, b'b', 0x00]);
    }

    #[test]
    fn info_flags_and_fields() {
        let mut font = simple_font();
        let info = font.info.as_mut().unwrap();
        info.smooth = false;
        info.unicode = false;
        info.italic = true;
        info.bold = true;
        info.charset = "russian".to_string();
        info.stretch_height = 100;
        info.supersampling = 2;
        info.padding = crate::Padding {
            up: 1,
            right: 2,
            down: 3,
            left: 4,
        };
        info.spacing = crate::Spacing {
            horizontal: 5,
            vertical: 6,
        };
        info.outline = 7;
        let bytes = BinaryWriter::default().encode(&font).unwrap();
        let (_, _, payload) = blocks(&bytes)[0];
        assert_eq!(
            payload,
            &[0x20, 0x00, 0x30, 16, 100, 0x00, 2, 1, 2, 3, 4, 5, 6, 7, 0x00]
        );
    }

    #[test]
    fn unknown_charset() {
        let mut font = simple_font();
        font.info.as_mut().unwrap().charset = "bogus".to_string();
        let err = BinaryWriter::default().encode(&font).unwrap_err();
        assert!(
            matches!(err, WriteError::UnknownCharset(ref name) if name.0 == "bogus"),
            "{err:?}"
        );
    }

    #[test]
    fn charset_is_case_insensitive() {
        let mut font = simple_font();
        let charset_byte = |font: &BitmapFont| {
            let bytes = BinaryWriter::default().encode(font).unwrap();
            let charset = blocks(&bytes)[0].2[3];
            charset
        };
        let no_charset = charset_byte(&font);
        assert_eq!(no_charset, 0);
        for name in ["ANSI", "ansi", "Ansi"] {
            font.info.as_mut().unwrap().charset = name.to_string();
            assert_eq!(charset_byte(&font), u8::from(Charset::Ansi), "{name}");
            assert_ne!(charset_byte(&font), no_charset, "{name}");
        }
    }

    #[test]
    fn block_sizes() {
        let mut font = simple_font();
        font.insert_page(1, "second page.png");
        font.insert_kerning_pair(KerningPair::new(65, 66), -1);
        font.insert_kerning_pair(KerningPair::new(66, 65), 2);
        let bytes = BinaryWriter::default().encode(&font).unwrap();
        let blocks = blocks(&bytes);
        let ids: Vec<_> = blocks.iter().map(|(id, ..)| *id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);

        let (_, size, payload) = blocks[2];
        assert_eq!(size as usize, "simple.png".len() + 1 + "second page.png".len() + 1);
        assert_eq!(payload.len(), size as usize);
        let (_, size, _) = blocks[3];
        assert_eq!(size, 20 * 3);
        let (_, size, payload) = blocks[4];
        assert_eq!(size, 10 * 2);
        assert_eq!(&payload[..10], &[65, 0, 0, 0, 66, 0, 0, 0, 0xFF, 0xFF]);

        // the common block counts both pages
        let (_, _, payload) = blocks[1];
        assert_eq!(&payload[8..10], &[2, 0]);
    }

    #[test]
    fn no_kerning_block_without_pairs() {
        let bytes = BinaryWriter::default().encode(&simple_font()).unwrap();
        assert!(blocks(&bytes).iter().all(|(id, ..)| *id != 5));
    }

    #[test]
    fn pages_are_written_in_id_order() {
        let mut font = simple_font();
        font.pages.clear();
        font.insert_page(1, "b");
        font.insert_page(0, "a");
        let bytes = BinaryWriter::new(RecordOrder::Insertion)
            .encode(&font)
            .unwrap();
        let (_, _, payload) = blocks(&bytes)[2];
        assert_eq!(payload, b"a\0b\0");
    }

    #[test]
    fn non_contiguous_pages() {
        let mut font = simple_font();
        font.insert_page(2, "third.png");
        let err = BinaryWriter::default().encode(&font).unwrap_err();
        assert!(
            matches!(
                err,
                WriteError::NonContiguousPageIds {
                    expected: 1,
                    found: 2
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn pages_must_start_at_zero() {
        let mut font = BitmapFont::new();
        font.insert_page(1, "one.png");
        let err = BinaryWriter::default().encode(&font).unwrap_err();
        assert!(
            matches!(
                err,
                WriteError::NonContiguousPageIds {
                    expected: 0,
                    found: 1
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn character_order() {
        let mut font = simple_font();
        font.characters.clear();
        font.insert_character(66, Character::default());
        font.insert_character(65, Character::default());
        let first_id = |order| {
            let bytes = BinaryWriter::new(order).encode(&font).unwrap();
            let (_, _, payload) = blocks(&bytes)[3];
            payload[0]
        };
        assert_eq!(first_id(RecordOrder::Insertion), 66);
        assert_eq!(first_id(RecordOrder::Ascending), 65);
    }

    #[test]
    fn narrowing_wraps() {
        let mut font = BitmapFont::new();
        font.insert_character(
            0x1F600,
            Character {
                x: 70000,
                x_offset: -40000,
                ..Default::default()
            },
        );
        let bytes = BinaryWriter::default().encode(&font).unwrap();
        let (_, _, payload) = blocks(&bytes)[0];
        assert_eq!(&payload[..4], &0x1F600u32.to_le_bytes());
        assert_eq!(&payload[4..6], &(70000u32 as u16).to_le_bytes());
        assert_eq!(&payload[12..14], &(-40000i32 as i16).to_le_bytes());
    }
}
