//! test data shared between the msdf2bmfont crates.

/// MSDF font descriptions, as written by msdf-atlas-gen.
pub mod msdf {
    /// Three glyphs (space, 'A', 'B') in a 128x64 atlas at 32px per em.
    ///
    /// 'B' sits on half-pixel atlas bounds and a -1.5px offset, so it checks
    /// that rounding goes away from zero.
    pub static SIMPLE_FONT: &str = include_str!("../test_data/msdf/simple.json");

    /// A top-origin atlas surrounded by members the reader does not use.
    pub static WITH_EXTRAS: &str = include_str!("../test_data/msdf/with_extras.json");

    /// The glyph for U+0041 appears twice; the second has advance 0.75.
    pub static DUPLICATE_GLYPHS: &str = include_str!("../test_data/msdf/duplicate_glyphs.json");

    /// `atlas.size` is a string rather than a number.
    pub static SIZE_IS_STRING: &str = include_str!("../test_data/msdf/size_is_string.json");
}

/// Expected BMFont encodings of [`msdf::SIMPLE_FONT`], converted with the
/// page image `simple.png`.
pub mod bmfont {
    pub static SIMPLE_FONT_TXT: &str = include_str!("../test_data/fnt/simple.txt");

    pub static SIMPLE_FONT_XML: &str = include_str!("../test_data/fnt/simple.xml");

    #[rustfmt::skip]
    pub static SIMPLE_FONT_BIN: &[u8] = &[
        0x42, 0x4D, 0x46, 0x03,         // "BMF", version 3

        0x01, 0x0F, 0x00, 0x00, 0x00,   // info block, size 15
        0x20, 0x00,                     // fontSize 32
        0xC0,                           // smooth | unicode
        0x00,                           // charSet
        0x00, 0x00,                     // stretchH
        0x00,                           // aa
        0x00, 0x00, 0x00, 0x00,         // padding up, right, down, left
        0x00, 0x00,                     // spacing horiz, vert
        0x00,                           // outline
        0x00,                           // fontName ""

        0x02, 0x0F, 0x00, 0x00, 0x00,   // common block, size 15
        0x28, 0x00,                     // lineHeight 40
        0xE6, 0xFF,                     // base -26
        0x80, 0x00,                     // scaleW 128
        0x40, 0x00,                     // scaleH 64
        0x01, 0x00,                     // pages 1
        0x00,                           // packed
        0x00, 0x00, 0x00, 0x00,         // alpha, red, green, blue: glyph

        0x03, 0x0B, 0x00, 0x00, 0x00,   // pages block, size 11
        0x73, 0x69, 0x6D, 0x70, 0x6C,   // "simple.png\0"
        0x65, 0x2E, 0x70, 0x6E, 0x67,
        0x00,

        0x04, 0x3C, 0x00, 0x00, 0x00,   // chars block, size 60
        0x20, 0x00, 0x00, 0x00,         // id 32
        0x00, 0x00, 0x00, 0x00,         // x 0, y 0
        0x00, 0x00, 0x00, 0x00,         // width 0, height 0
        0x00, 0x00, 0xE6, 0xFF,         // xoffset 0, yoffset -26
        0x08, 0x00,                     // xadvance 8
        0x00, 0x0F,                     // page 0, chnl all

        0x41, 0x00, 0x00, 0x00,         // id 65
        0x0A, 0x00, 0x14, 0x00,         // x 10, y 20
        0x10, 0x00, 0x10, 0x00,         // width 16, height 16
        0x01, 0x00, 0xFE, 0xFF,         // xoffset 1, yoffset -2
        0x13, 0x00,                     // xadvance 19
        0x00, 0x0F,                     // page 0, chnl all

        0x42, 0x00, 0x00, 0x00,         // id 66
        0x1F, 0x00, 0x14, 0x00,         // x 31, y 20
        0x11, 0x00, 0x19, 0x00,         // width 17, height 25
        0xFE, 0xFF, 0x00, 0x00,         // xoffset -2, yoffset 0
        0x12, 0x00,                     // xadvance 18
        0x00, 0x0F,                     // page 0, chnl all
    ];
}
