//! Streaming deserialization of the msdf-atlas-gen JSON layout.
//!
//! Each type is read by walking the members of its JSON object one at a
//! time. Members we do not know about are skipped without being buffered,
//! and members that are absent keep their zero value. A `null` section,
//! glyph list, glyph or bounds object also reads as zero. A member of the
//! wrong kind (a string where a number is expected, say) is an error.

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::font::{Atlas, Bounds, Glyph, Metrics, MsdfFont, YOrigin};

impl<'de> Deserialize<'de> for MsdfFont {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FontVisitor;

        impl<'de> Visitor<'de> for FontVisitor {
            type Value = MsdfFont;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an msdf-atlas-gen font object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut font = MsdfFont::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "atlas" => {
                            font.atlas = map.next_value::<Option<Atlas>>()?.unwrap_or_default()
                        }
                        "metrics" => {
                            font.metrics = map.next_value::<Option<Metrics>>()?.unwrap_or_default()
                        }
                        "glyphs" => {
                            font.glyphs = map
                                .next_value::<Option<GlyphList>>()?
                                .map(|list| list.0)
                                .unwrap_or_default()
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(font)
            }
        }

        deserializer.deserialize_map(FontVisitor)
    }
}

impl<'de> Deserialize<'de> for Atlas {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AtlasVisitor;

        impl<'de> Visitor<'de> for AtlasVisitor {
            type Value = Atlas;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an atlas object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut atlas = Atlas::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "type" => atlas.atlas_type = map.next_value()?,
                        "distanceRange" => atlas.distance_range = map.next_value()?,
                        "distanceRangeMiddle" => atlas.distance_range_middle = map.next_value()?,
                        "size" => atlas.size = map.next_value()?,
                        "width" => atlas.width = map.next_value()?,
                        "height" => atlas.height = map.next_value()?,
                        "yOrigin" => {
                            let value = map.next_value::<Option<String>>()?;
                            atlas.y_origin = YOrigin::from_json_value(value.as_deref());
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(atlas)
            }
        }

        deserializer.deserialize_map(AtlasVisitor)
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Metrics;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a metrics object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut metrics = Metrics::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "emSize" => metrics.em_size = map.next_value()?,
                        "lineHeight" => metrics.line_height = map.next_value()?,
                        "ascender" => metrics.ascender = map.next_value()?,
                        "descender" => metrics.descender = map.next_value()?,
                        "underlineY" => metrics.underline_y = map.next_value()?,
                        "underlineThickness" => metrics.underline_thickness = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

/// The `glyphs` array.
///
/// Elements are decoded one at a time as the array is walked and moved
/// straight into the list; nothing looks ahead or revisits an element.
struct GlyphList(Vec<Glyph>);

impl<'de> Deserialize<'de> for GlyphList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GlyphListVisitor;

        impl<'de> Visitor<'de> for GlyphListVisitor {
            type Value = GlyphList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of glyphs")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut glyphs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(glyph) = seq.next_element::<Option<Glyph>>()? {
                    glyphs.push(glyph.unwrap_or_default());
                }
                Ok(GlyphList(glyphs))
            }
        }

        deserializer.deserialize_seq(GlyphListVisitor)
    }
}

impl<'de> Deserialize<'de> for Glyph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GlyphVisitor;

        impl<'de> Visitor<'de> for GlyphVisitor {
            type Value = Glyph;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a glyph object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut glyph = Glyph::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "unicode" => glyph.unicode = map.next_value()?,
                        "advance" => glyph.advance = map.next_value()?,
                        "planeBounds" => {
                            glyph.plane_bounds = map.next_value::<Option<Bounds>>()?.unwrap_or_default()
                        }
                        "atlasBounds" => {
                            glyph.atlas_bounds = map.next_value::<Option<Bounds>>()?.unwrap_or_default()
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(glyph)
            }
        }

        deserializer.deserialize_map(GlyphVisitor)
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoundsVisitor;

        impl<'de> Visitor<'de> for BoundsVisitor {
            type Value = Bounds;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bounds object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut bounds = Bounds::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "left" => bounds.left = map.next_value()?,
                        "top" => bounds.top = map.next_value()?,
                        "right" => bounds.right = map.next_value()?,
                        "bottom" => bounds.bottom = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(bounds)
            }
        }

        deserializer.deserialize_map(BoundsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_skip_unknown_members() {
        let json = r#"{"left": 1, "extra": {"nested": [1, 2, {"x": null}]}, "top": 2.5}"#;
        let bounds: Bounds = serde_json::from_str(json).unwrap();
        assert_eq!(
            bounds,
            Bounds {
                left: 1.0,
                top: 2.5,
                right: 0.0,
                bottom: 0.0,
            }
        );
    }

    #[test]
    fn glyph_without_bounds() {
        let glyph: Glyph = serde_json::from_str(r#"{"unicode": 32, "advance": 0.25}"#).unwrap();
        assert_eq!(glyph.unicode, 32);
        assert_eq!(glyph.advance, 0.25);
        assert_eq!(glyph.plane_bounds, Bounds::default());
        assert_eq!(glyph.atlas_bounds, Bounds::default());
    }

    #[test]
    fn later_member_wins() {
        let metrics: Metrics = serde_json::from_str(r#"{"ascender": 1, "ascender": 0.75}"#).unwrap();
        assert_eq!(metrics.ascender, 0.75);
    }

    #[test]
    fn integer_members_reject_fractions() {
        assert!(serde_json::from_str::<Atlas>(r#"{"width": 12.5}"#).is_err());
        assert!(serde_json::from_str::<Atlas>(r#"{"width": "12"}"#).is_err());
    }

    #[test]
    fn null_y_origin_is_bottom() {
        let atlas: Atlas = serde_json::from_str(r#"{"yOrigin": null}"#).unwrap();
        assert!(!atlas.is_top_y_origin());
    }

    #[test]
    fn null_sections_are_zero() {
        let json = r#"{
            "atlas": null,
            "metrics": null,
            "glyphs": [{"unicode": 32, "planeBounds": null, "atlasBounds": null}, null]
        }"#;
        let font: MsdfFont = serde_json::from_str(json).unwrap();
        assert_eq!(font.atlas, Atlas::default());
        assert_eq!(font.metrics, Metrics::default());
        assert_eq!(
            font.glyphs,
            vec![
                Glyph {
                    unicode: 32,
                    ..Default::default()
                },
                Glyph::default(),
            ]
        );
    }

    #[test]
    fn null_glyph_list_is_empty() {
        let font: MsdfFont = serde_json::from_str(r#"{"glyphs": null}"#).unwrap();
        assert!(font.glyphs.is_empty());
    }

    #[test]
    fn glyphs_must_be_an_array() {
        let err = serde_json::from_str::<MsdfFont>(r#"{"glyphs": {"unicode": 65}}"#).unwrap_err();
        assert!(err.to_string().contains("an array of glyphs"), "{err}");
    }
}
