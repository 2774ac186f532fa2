use crate::{BitmapFont, Character, Common, Info};

/// The font described by `bmfont_test_data::bmfont`.
pub(crate) fn simple_font() -> BitmapFont {
    let mut font = BitmapFont::new();
    font.info = Some(Info {
        size: 32,
        smooth: true,
        unicode: true,
        ..Default::default()
    });
    font.common = Some(Common {
        line_height: 40,
        base: -26,
        scale_width: 128,
        scale_height: 64,
        ..Default::default()
    });
    font.insert_page(0, "simple.png");
    font.insert_character(
        32,
        Character {
            y_offset: -26,
            x_advance: 8,
            ..Default::default()
        },
    );
    font.insert_character(
        65,
        Character {
            x: 10,
            y: 20,
            width: 16,
            height: 16,
            x_offset: 1,
            y_offset: -2,
            x_advance: 19,
            ..Default::default()
        },
    );
    font.insert_character(
        66,
        Character {
            x: 31,
            y: 20,
            width: 17,
            height: 25,
            x_offset: -2,
            y_offset: 0,
            x_advance: 18,
            ..Default::default()
        },
    );
    font
}
