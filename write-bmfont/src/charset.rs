//! Character set identifiers used by the `info` block.
//!
//! The binary format stores the character set of the source font as a
//! single byte. Byte 0 means no character set was named, so every known set
//! has a non-zero id. The text and XML formats carry the set by name
//! instead.

use std::{fmt, str::FromStr};

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// A named character set, with its binary `info` block id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Charset {
    Ansi = 1,
    Default = 2,
    Symbol = 3,
    Mac = 4,
    ShiftJis = 5,
    Hangul = 6,
    Johab = 7,
    Gb2312 = 8,
    ChineseBig5 = 9,
    Greek = 10,
    Turkish = 11,
    Vietnamese = 12,
    Hebrew = 13,
    Arabic = 14,
    Baltic = 15,
    Russian = 16,
    Thai = 17,
    EastEurope = 18,
    Oem = 19,
}

impl Charset {
    /// Every known character set, in ascending id order.
    pub const ALL: [Charset; 19] = [
        Charset::Ansi,
        Charset::Default,
        Charset::Symbol,
        Charset::Mac,
        Charset::ShiftJis,
        Charset::Hangul,
        Charset::Johab,
        Charset::Gb2312,
        Charset::ChineseBig5,
        Charset::Greek,
        Charset::Turkish,
        Charset::Vietnamese,
        Charset::Hebrew,
        Charset::Arabic,
        Charset::Baltic,
        Charset::Russian,
        Charset::Thai,
        Charset::EastEurope,
        Charset::Oem,
    ];

    /// The name of this set, as written by BMFont.
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Ansi => "ANSI",
            Charset::Default => "DEFAULT",
            Charset::Symbol => "SYMBOL",
            Charset::Mac => "MAC",
            Charset::ShiftJis => "SHIFTJIS",
            Charset::Hangul => "HANGUL",
            Charset::Johab => "JOHAB",
            Charset::Gb2312 => "GB2312",
            Charset::ChineseBig5 => "CHINESEBIG5",
            Charset::Greek => "GREEK",
            Charset::Turkish => "TURKISH",
            Charset::Vietnamese => "VIETNAMESE",
            Charset::Hebrew => "HEBREW",
            Charset::Arabic => "ARABIC",
            Charset::Baltic => "BALTIC",
            Charset::Russian => "RUSSIAN",
            Charset::Thai => "THAI",
            Charset::EastEurope => "EASTEUROPE",
            Charset::Oem => "OEM",
        }
    }

    /// The byte written to the binary `info` block for a charset name.
    ///
    /// An empty name is written as zero, which no known set uses.
    pub fn id_for_name(name: &str) -> Result<u8, UnknownCharset> {
        if name.is_empty() {
            return Ok(0);
        }
        name.parse::<Charset>().map(u8::from)
    }
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    /// Names are matched ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::ALL
            .into_iter()
            .find(|charset| charset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCharset(s.to_owned()))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A charset name that is not in [`Charset::ALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCharset(pub String);

impl fmt::Display for UnknownCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid character set '{}'", self.0)
    }
}

impl std::error::Error for UnknownCharset {}
