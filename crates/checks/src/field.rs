//! Closed enumeration of the font fields a check can observe.

use std::fmt;

/// A scalar field read from one of the checked font tables.
///
/// Keeping this a closed enum (rather than string-keyed lookup) means a
/// missing field is a typed `None`, not a runtime key error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // [head]
    UnitsPerEm,
    // [hhea]
    Ascent,
    Descent,
    LineGap,
    // [OS/2]
    CapHeight,
    XHeight,
    TypoAscender,
    TypoDescender,
    TypoLineGap,
    WinAscent,
    WinDescent,
    StrikeoutPosition,
    StrikeoutSize,
    AverageWidth,
    SuperscriptXSize,
    SuperscriptXOffset,
    SuperscriptYSize,
    SuperscriptYOffset,
    SubscriptXSize,
    SubscriptXOffset,
    SubscriptYSize,
    SubscriptYOffset,
    // [post]
    UnderlinePosition,
    UnderlineThickness,
    ItalicAngle,
    // [maxp]
    NumGlyphs,
}

impl Field {
    /// The 25 metric fields checked by the `metrics` command, in report order.
    pub const METRICS: [Field; 25] = [
        Field::UnitsPerEm,
        Field::Ascent,
        Field::Descent,
        Field::LineGap,
        Field::CapHeight,
        Field::XHeight,
        Field::TypoAscender,
        Field::TypoDescender,
        Field::TypoLineGap,
        Field::WinAscent,
        Field::WinDescent,
        Field::StrikeoutPosition,
        Field::StrikeoutSize,
        Field::AverageWidth,
        Field::SuperscriptXSize,
        Field::SuperscriptXOffset,
        Field::SuperscriptYSize,
        Field::SuperscriptYOffset,
        Field::SubscriptXSize,
        Field::SubscriptXOffset,
        Field::SubscriptYSize,
        Field::SubscriptYOffset,
        Field::UnderlinePosition,
        Field::UnderlineThickness,
        Field::ItalicAngle,
    ];

    /// Tag of the table this field lives in.
    pub fn table(self) -> &'static str {
        match self {
            Field::UnitsPerEm => "head",
            Field::Ascent | Field::Descent | Field::LineGap => "hhea",
            Field::UnderlinePosition | Field::UnderlineThickness | Field::ItalicAngle => "post",
            Field::NumGlyphs => "maxp",
            _ => "OS/2",
        }
    }

    /// Key of this field in an expectation document.
    pub fn key(self) -> &'static str {
        match self {
            Field::UnitsPerEm => "unitsPerEm",
            Field::Ascent => "ascent",
            Field::Descent => "descent",
            Field::LineGap => "lineGap",
            Field::CapHeight => "capHeight",
            Field::XHeight => "xHeight",
            Field::TypoAscender => "typoAscender",
            Field::TypoDescender => "typoDescender",
            Field::TypoLineGap => "typoLineGap",
            Field::WinAscent => "winAscent",
            Field::WinDescent => "winDescent",
            Field::StrikeoutPosition => "strikeoutPosition",
            Field::StrikeoutSize => "strikeoutSize",
            Field::AverageWidth => "averageWidth",
            Field::SuperscriptXSize => "superscriptXSize",
            Field::SuperscriptXOffset => "superscriptXOffset",
            Field::SuperscriptYSize => "superscriptYSize",
            Field::SuperscriptYOffset => "superscriptYOffset",
            Field::SubscriptXSize => "subscriptXSize",
            Field::SubscriptXOffset => "subscriptXOffset",
            Field::SubscriptYSize => "subscriptYSize",
            Field::SubscriptYOffset => "subscriptYOffset",
            Field::UnderlinePosition => "underlinePosition",
            Field::UnderlineThickness => "underlineThickness",
            Field::ItalicAngle => "italicAngle",
            Field::NumGlyphs => "numGlyphs",
        }
    }

    /// Human-readable label for report lines.
    pub fn label(self) -> &'static str {
        match self {
            Field::UnitsPerEm => "Units per Em",
            Field::Ascent => "Ascent",
            Field::Descent => "Descent",
            Field::LineGap => "Line Gap",
            Field::CapHeight => "Cap Height",
            Field::XHeight => "x-Height",
            Field::TypoAscender => "Typo Ascender",
            Field::TypoDescender => "Typo Descender",
            Field::TypoLineGap => "Typo Line Gap",
            Field::WinAscent => "Win Ascent",
            Field::WinDescent => "Win Descent",
            Field::StrikeoutPosition => "Strikeout Position",
            Field::StrikeoutSize => "Strikeout Size",
            Field::AverageWidth => "Average Char Width",
            Field::SuperscriptXSize => "Superscript X Size",
            Field::SuperscriptXOffset => "Superscript X Offset",
            Field::SuperscriptYSize => "Superscript Y Size",
            Field::SuperscriptYOffset => "Superscript Y Offset",
            Field::SubscriptXSize => "Subscript X Size",
            Field::SubscriptXOffset => "Subscript X Offset",
            Field::SubscriptYSize => "Subscript Y Size",
            Field::SubscriptYOffset => "Subscript Y Offset",
            Field::UnderlinePosition => "Underline Position",
            Field::UnderlineThickness => "Underline Thickness",
            Field::ItalicAngle => "Italic Angle",
            Field::NumGlyphs => "Glyph Count",
        }
    }
}

/// An observed or expected value. Compared by exact equality only; font
/// metrics are integral by format and version tokens keep their leading
/// zeros, so no numeric tolerance is ever applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}
