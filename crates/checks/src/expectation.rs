//! Loading and generating expectation documents.
//!
//! An expectation document is a flat TOML file whose keys mirror the field
//! identifiers in [`Field`](crate::field::Field). Every key is optional; a
//! rule whose expected value is absent fails with a distinct diagnostic
//! instead of being skipped silently.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::field::{Field, Value};

/// Expected values for one conformance run, deserialized from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Expectation {
    pub units_per_em: Option<i64>,
    pub ascent: Option<i64>,
    pub descent: Option<i64>,
    pub line_gap: Option<i64>,
    pub cap_height: Option<i64>,
    pub x_height: Option<i64>,
    pub typo_ascender: Option<i64>,
    pub typo_descender: Option<i64>,
    pub typo_line_gap: Option<i64>,
    pub win_ascent: Option<i64>,
    pub win_descent: Option<i64>,
    pub strikeout_position: Option<i64>,
    pub strikeout_size: Option<i64>,
    pub average_width: Option<i64>,
    pub superscript_x_size: Option<i64>,
    pub superscript_x_offset: Option<i64>,
    pub superscript_y_size: Option<i64>,
    pub superscript_y_offset: Option<i64>,
    pub subscript_x_size: Option<i64>,
    pub subscript_x_offset: Option<i64>,
    pub subscript_y_size: Option<i64>,
    pub subscript_y_offset: Option<i64>,
    pub underline_position: Option<i64>,
    pub underline_thickness: Option<i64>,
    pub italic_angle: Option<f64>,
    pub num_glyphs: Option<i64>,
    /// Uniform advance width for the monospace check.
    pub advance_width: Option<i64>,
    /// Expected `D.DDD` version token, e.g. `"3.001"`.
    pub version: Option<String>,
}

impl Expectation {
    /// Expectation for the glyph-count check, from a CLI scalar.
    pub fn glyph_count(expected: i64) -> Self {
        Self { num_glyphs: Some(expected), ..Self::default() }
    }

    /// Expectation for the monospace check, from a CLI scalar.
    pub fn monospace(advance_width: i64) -> Self {
        Self { advance_width: Some(advance_width), ..Self::default() }
    }

    /// Typed lookup of the expected value for a scalar field.
    pub fn scalar(&self, field: Field) -> Option<Value> {
        let int = |v: Option<i64>| v.map(Value::Int);
        match field {
            Field::UnitsPerEm => int(self.units_per_em),
            Field::Ascent => int(self.ascent),
            Field::Descent => int(self.descent),
            Field::LineGap => int(self.line_gap),
            Field::CapHeight => int(self.cap_height),
            Field::XHeight => int(self.x_height),
            Field::TypoAscender => int(self.typo_ascender),
            Field::TypoDescender => int(self.typo_descender),
            Field::TypoLineGap => int(self.typo_line_gap),
            Field::WinAscent => int(self.win_ascent),
            Field::WinDescent => int(self.win_descent),
            Field::StrikeoutPosition => int(self.strikeout_position),
            Field::StrikeoutSize => int(self.strikeout_size),
            Field::AverageWidth => int(self.average_width),
            Field::SuperscriptXSize => int(self.superscript_x_size),
            Field::SuperscriptXOffset => int(self.superscript_x_offset),
            Field::SuperscriptYSize => int(self.superscript_y_size),
            Field::SuperscriptYOffset => int(self.superscript_y_offset),
            Field::SubscriptXSize => int(self.subscript_x_size),
            Field::SubscriptXOffset => int(self.subscript_x_offset),
            Field::SubscriptYSize => int(self.subscript_y_size),
            Field::SubscriptYOffset => int(self.subscript_y_offset),
            Field::UnderlinePosition => int(self.underline_position),
            Field::UnderlineThickness => int(self.underline_thickness),
            Field::ItalicAngle => self.italic_angle.map(Value::Float),
            Field::NumGlyphs => int(self.num_glyphs),
        }
    }

    /// Parse an expectation document from TOML text.
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::ParseExpectation {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load an expectation document from disk.
pub fn load_expectation(path: &Path) -> Result<Expectation> {
    debug!("loading expectation {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| Error::ReadExpectation {
        path: path.to_path_buf(),
        source,
    })?;
    Expectation::from_toml(path, &text)
}

/// Render a template expectation document with every recognized key.
///
/// TOML has no unset value, so each key is written as a commented entry to
/// be filled in and uncommented.
pub fn stub_document() -> String {
    let mut out = String::from(
        "# Expected font metrics for fontqa.\n\
         # Uncomment and fill in the fields this font should be checked against.\n",
    );
    let mut table = "";
    for field in Field::METRICS {
        if field.table() != table {
            table = field.table();
            out.push_str(&format!("\n# [{table}]\n"));
        }
        out.push_str(&format!("# {} =\n", field.key()));
    }
    out.push_str("\n# [maxp]\n");
    out.push_str(&format!("# {} =\n", Field::NumGlyphs.key()));
    out.push_str("\n# [hmtx]\n# advanceWidth =\n");
    out.push_str("\n# [name] nameID 5, e.g. \"3.001\"\n# version =\n");
    out
}

/// Write the stub document to disk.
pub fn write_stub(path: &Path) -> Result<()> {
    std::fs::write(path, stub_document()).map_err(|source| Error::WriteStub {
        path: path.to_path_buf(),
        source,
    })
}
