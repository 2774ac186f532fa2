//! The BMFont model.
//!
//! See the [BMFont file format documentation][doc] for the meaning of each
//! field.
//!
//! [doc]: https://www.angelcode.com/products/bmfont/doc/file_format.html

use indexmap::IndexMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The texture channels that hold a character's image.
///
/// The discriminants are the bit mask written to the `chnl` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Channel {
    Blue = 1,
    Green = 2,
    Red = 4,
    Alpha = 8,
    All = 15,
}

// not `#[default]`: num_enum would treat that variant as a catch-all and
// accept out of range values.
impl Default for Channel {
    fn default() -> Self {
        Channel::All
    }
}

/// What a texture channel of the page images contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ChannelData {
    Glyph = 0,
    Outline = 1,
    GlyphAndOutline = 2,
    Zero = 3,
    One = 4,
}

impl Default for ChannelData {
    fn default() -> Self {
        ChannelData::Glyph
    }
}

/// Padding around each character, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub up: i32,
    pub right: i32,
    pub down: i32,
    pub left: i32,
}

/// Spacing between characters, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub horizontal: i32,
    pub vertical: i32,
}

/// How the font was generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Info {
    /// The name of the true type font.
    pub face: String,
    /// The size of the true type font.
    pub size: i32,
    pub smooth: bool,
    pub unicode: bool,
    pub italic: bool,
    pub bold: bool,
    /// The name of the OEM charset, empty when `unicode` is set.
    ///
    /// Must be one of the names in [`Charset`](crate::Charset) to be
    /// written in the binary format.
    pub charset: String,
    /// The font height stretch in percent.
    pub stretch_height: i32,
    /// The supersampling level; 1 means no supersampling.
    pub supersampling: i32,
    pub padding: Padding,
    pub spacing: Spacing,
    /// The outline thickness.
    pub outline: i32,
}

/// Information common to all characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Common {
    /// The distance in pixels between each line of text.
    pub line_height: i32,
    /// The number of pixels from the absolute top of the line to the base of
    /// the characters.
    pub base: i32,
    /// The width of the page images.
    pub scale_width: i32,
    /// The height of the page images.
    pub scale_height: i32,
    /// Whether monochrome characters have been packed into each channel.
    pub packed: bool,
    pub alpha_channel: ChannelData,
    pub red_channel: ChannelData,
    pub green_channel: ChannelData,
    pub blue_channel: ChannelData,
}

/// The location and metrics of a single character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Character {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// The offset from the pen position to the left of the character box.
    pub x_offset: i32,
    /// The offset from the top of the line to the top of the character box.
    pub y_offset: i32,
    /// How far the pen advances after drawing the character.
    pub x_advance: i32,
    /// The page holding the character image.
    pub page: u32,
    pub channel: Channel,
}

/// The two characters a kerning amount applies to, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KerningPair {
    pub first: u32,
    pub second: u32,
}

impl KerningPair {
    pub fn new(first: u32, second: u32) -> Self {
        KerningPair { first, second }
    }
}

/// A BMFont description.
///
/// The collections keep insertion order; re-inserting an existing key
/// replaces its value without moving it. Writers decide the order records
/// are emitted in, see [`RecordOrder`](crate::RecordOrder).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitmapFont {
    pub info: Option<Info>,
    pub common: Option<Common>,
    /// Page image file names, by page id.
    pub pages: IndexMap<u32, String>,
    /// Characters, by codepoint.
    pub characters: IndexMap<u32, Character>,
    /// Kerning amounts in pixels.
    pub kerning_pairs: IndexMap<KerningPair, i32>,
}

impl BitmapFont {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, returning the file name it replaced, if any.
    pub fn insert_page(&mut self, id: u32, file: impl Into<String>) -> Option<String> {
        self.pages.insert(id, file.into())
    }

    /// Add a character, returning the character it replaced, if any.
    pub fn insert_character(&mut self, id: u32, character: Character) -> Option<Character> {
        self.characters.insert(id, character)
    }

    /// Add a kerning amount, returning the amount it replaced, if any.
    pub fn insert_kerning_pair(&mut self, pair: KerningPair, amount: i32) -> Option<i32> {
        self.kerning_pairs.insert(pair, amount)
    }
}
