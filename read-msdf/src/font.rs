//! The in-memory MSDF font description.

/// The vertical origin of the atlas image coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YOrigin {
    /// Y grows upward from the bottom edge. This is the msdf-atlas-gen default.
    #[default]
    Bottom,
    /// Y grows downward from the top edge.
    Top,
}

impl YOrigin {
    /// Interpret a `yOrigin` value.
    ///
    /// Only a case-insensitive `"top"` selects [`YOrigin::Top`]; every other
    /// value is treated as bottom-origin.
    pub fn from_json_value(value: Option<&str>) -> Self {
        match value {
            Some(value) if value.eq_ignore_ascii_case("top") => YOrigin::Top,
            _ => YOrigin::Bottom,
        }
    }
}

/// The `atlas` section: how the glyph image was generated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Atlas {
    /// The atlas type, e.g. `"msdf"` or `"mtsdf"`.
    pub atlas_type: Option<String>,
    pub distance_range: i32,
    pub distance_range_middle: i32,
    /// Pixels per em.
    pub size: f64,
    /// Width of the atlas image, in pixels.
    pub width: i32,
    /// Height of the atlas image, in pixels.
    pub height: i32,
    pub y_origin: YOrigin,
}

impl Atlas {
    pub fn is_top_y_origin(&self) -> bool {
        self.y_origin == YOrigin::Top
    }
}

/// The `metrics` section. All values are in ems.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    pub em_size: f64,
    pub line_height: f64,
    pub ascender: f64,
    pub descender: f64,
    pub underline_y: f64,
    pub underline_thickness: f64,
}

/// An axis-aligned rectangle.
///
/// The meaning of the units depends on where the bounds are used: plane
/// bounds are in ems relative to the baseline and pen position, atlas
/// bounds are pixels in the atlas image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// A single entry of the `glyphs` array.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glyph {
    /// The codepoint this glyph renders.
    pub unicode: u32,
    /// The horizontal distance to advance the pen, in ems.
    pub advance: f64,
    /// The glyph quad in ems, relative to the baseline and pen position.
    ///
    /// All zero for glyphs without a visible quad, such as space.
    pub plane_bounds: Bounds,
    /// The location of the glyph in the atlas image, in pixels.
    pub atlas_bounds: Bounds,
}

/// A complete MSDF font description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MsdfFont {
    pub atlas: Atlas,
    pub metrics: Metrics,
    /// Glyphs in document order. Codepoints are not deduplicated.
    pub glyphs: Vec<Glyph>,
}
