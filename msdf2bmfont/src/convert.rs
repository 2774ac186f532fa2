//! Mapping an MSDF font description onto the BMFont model.

use read_msdf::MsdfFont;
use write_bmfont::{BitmapFont, Channel, Character, Common, Info, PixelRound};

/// Inputs to [`convert`] that are not part of the MSDF description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// The file name of the atlas image, written as page 0.
    pub image: String,
}

impl ConvertOptions {
    pub fn new(image: impl Into<String>) -> Self {
        ConvertOptions {
            image: image.into(),
        }
    }
}

/// Convert an MSDF font description into a single page bitmap font.
///
/// Metrics in ems are scaled by `atlas.size` and rounded to whole pixels,
/// with halves rounded away from zero. Vertical offsets are measured down
/// from the ascender, which assumes a bottom-origin atlas; a top-origin
/// atlas is converted the same way.
///
/// Glyphs become characters in array order. When a codepoint appears more
/// than once, the last glyph wins but keeps the position of the first.
pub fn convert(font: &MsdfFont, options: &ConvertOptions) -> BitmapFont {
    let atlas = &font.atlas;
    let metrics = &font.metrics;
    let size = atlas.size;

    if atlas.is_top_y_origin() {
        log::warn!("atlas has a top y origin, character offsets assume bottom origin");
    }

    let mut bitmap = BitmapFont::new();
    bitmap.info = Some(Info {
        size: size.pixel_round(),
        smooth: true,
        unicode: true,
        ..Default::default()
    });
    bitmap.common = Some(Common {
        line_height: (metrics.line_height * size).pixel_round(),
        base: (-metrics.ascender * size).pixel_round(),
        scale_width: atlas.width,
        scale_height: atlas.height,
        ..Default::default()
    });
    bitmap.insert_page(0, options.image.as_str());

    for glyph in &font.glyphs {
        let plane = &glyph.plane_bounds;
        let bounds = &glyph.atlas_bounds;
        let character = Character {
            x: bounds.left.pixel_round(),
            y: bounds.top.pixel_round(),
            width: (bounds.right - bounds.left).pixel_round(),
            height: (bounds.bottom - bounds.top).pixel_round(),
            x_offset: (plane.left * size).pixel_round(),
            y_offset: ((plane.top - metrics.ascender) * size).pixel_round(),
            x_advance: (glyph.advance * size).pixel_round(),
            page: 0,
            channel: Channel::All,
        };
        if bitmap.insert_character(glyph.unicode, character).is_some() {
            log::debug!("glyph U+{:04X} replaces an earlier glyph", glyph.unicode);
        }
    }
    log::debug!(
        "converted {} glyphs into {} characters",
        font.glyphs.len(),
        bitmap.characters.len()
    );
    bitmap
}
