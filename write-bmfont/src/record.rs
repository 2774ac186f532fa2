//! The named fields of each record, shared by the text and XML encodings.

use std::fmt;

use crate::{BitmapFont, Character, Common, Info, KerningPair, RecordOrder};

/// A field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Value<'a> {
    Int(i64),
    Str(&'a str),
    /// Comma separated integers, e.g. padding.
    List(Vec<i64>),
}

impl Value<'_> {
    fn bool(value: bool) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u8> for Value<'_> {
    fn from(value: u8) -> Self {
        Value::Int(value.into())
    }
}

impl From<usize> for Value<'_> {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

/// Unquoted and unescaped.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
            Value::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

/// A tag and its fields, in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Record<'a> {
    pub tag: &'static str,
    pub fields: Vec<(&'static str, Value<'a>)>,
}

impl<'a> Record<'a> {
    fn info(info: &'a Info) -> Self {
        Record {
            tag: "info",
            fields: vec![
                ("face", Value::Str(&info.face)),
                ("size", info.size.into()),
                ("bold", Value::bool(info.bold)),
                ("italic", Value::bool(info.italic)),
                ("charset", Value::Str(&info.charset)),
                ("unicode", Value::bool(info.unicode)),
                ("stretchH", info.stretch_height.into()),
                ("smooth", Value::bool(info.smooth)),
                ("aa", info.supersampling.into()),
                (
                    "padding",
                    Value::List(
                        [
                            info.padding.up,
                            info.padding.right,
                            info.padding.down,
                            info.padding.left,
                        ]
                        .map(i64::from)
                        .to_vec(),
                    ),
                ),
                (
                    "spacing",
                    Value::List(vec![
                        info.spacing.horizontal.into(),
                        info.spacing.vertical.into(),
                    ]),
                ),
                ("outline", info.outline.into()),
            ],
        }
    }

    fn common(common: &'a Common, page_count: usize) -> Self {
        Record {
            tag: "common",
            fields: vec![
                ("lineHeight", common.line_height.into()),
                ("base", common.base.into()),
                ("scaleW", common.scale_width.into()),
                ("scaleH", common.scale_height.into()),
                ("pages", page_count.into()),
                ("packed", Value::bool(common.packed)),
                ("alphaChnl", u8::from(common.alpha_channel).into()),
                ("redChnl", u8::from(common.red_channel).into()),
                ("greenChnl", u8::from(common.green_channel).into()),
                ("blueChnl", u8::from(common.blue_channel).into()),
            ],
        }
    }

    fn page(id: u32, file: &'a str) -> Self {
        Record {
            tag: "page",
            fields: vec![("id", id.into()), ("file", Value::Str(file))],
        }
    }

    fn character(id: u32, character: &Character) -> Self {
        Record {
            tag: "char",
            fields: vec![
                ("id", id.into()),
                ("x", character.x.into()),
                ("y", character.y.into()),
                ("width", character.width.into()),
                ("height", character.height.into()),
                ("xoffset", character.x_offset.into()),
                ("yoffset", character.y_offset.into()),
                ("xadvance", character.x_advance.into()),
                ("page", character.page.into()),
                ("chnl", u8::from(character.channel).into()),
            ],
        }
    }

    fn kerning(pair: KerningPair, amount: i32) -> Self {
        Record {
            tag: "kerning",
            fields: vec![
                ("first", pair.first.into()),
                ("second", pair.second.into()),
                ("amount", amount.into()),
            ],
        }
    }
}

/// A run of records of one kind, introduced by a `count` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Group<'a> {
    pub tag: &'static str,
    pub count: usize,
    pub records: Vec<Record<'a>>,
}

impl<'a> Group<'a> {
    fn new(tag: &'static str, records: Vec<Record<'a>>) -> Self {
        Group {
            tag,
            count: records.len(),
            records,
        }
    }

    /// The `count` record that precedes the group.
    pub fn header(&self) -> Record<'static> {
        Record {
            tag: self.tag,
            fields: vec![("count", self.count.into())],
        }
    }
}

/// Everything a text or XML file contains, in output order.
///
/// Empty collections produce no records at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Document<'a> {
    pub info: Option<Record<'a>>,
    pub common: Option<Record<'a>>,
    pub pages: Vec<Record<'a>>,
    pub chars: Option<Group<'a>>,
    pub kernings: Option<Group<'a>>,
}

impl<'a> Document<'a> {
    pub fn new(font: &'a BitmapFont, order: RecordOrder) -> Self {
        let chars: Vec<_> = order
            .entries(&font.characters)
            .into_iter()
            .map(|(id, character)| Record::character(*id, character))
            .collect();
        let kernings: Vec<_> = order
            .entries(&font.kerning_pairs)
            .into_iter()
            .map(|(pair, amount)| Record::kerning(*pair, *amount))
            .collect();
        Document {
            info: font.info.as_ref().map(Record::info),
            common: font
                .common
                .as_ref()
                .map(|common| Record::common(common, font.pages.len())),
            pages: order
                .entries(&font.pages)
                .into_iter()
                .map(|(id, file)| Record::page(*id, file))
                .collect(),
            chars: (!chars.is_empty()).then(|| Group::new("chars", chars)),
            kernings: (!kernings.is_empty()).then(|| Group::new("kernings", kernings)),
        }
    }
}
