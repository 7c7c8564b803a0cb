//! Reading a font's checkable attributes into an immutable snapshot.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use read_fonts::{
    FontRef, Offset, TableProvider,
    tables::name::Name,
    types::{GlyphId, GlyphId16},
};

use crate::error::{Error, Result};
use crate::field::{Field, Value};
use crate::version::Platform;

/// nameID of the version string in the naming table.
const NAME_ID_VERSION: u16 = 5;

/// Metrics read from the `head` table.
#[derive(Debug, Clone, Copy)]
pub struct HeadMetrics {
    pub units_per_em: u16,
}

/// Metrics read from the `hhea` table.
#[derive(Debug, Clone, Copy)]
pub struct HheaMetrics {
    pub ascent: i16,
    pub descent: i16,
    pub line_gap: i16,
}

/// Metrics read from the `OS/2` table.
///
/// Cap height and x-height only exist from table version 2 on, so they stay
/// optional even when the table itself is present.
#[derive(Debug, Clone, Copy)]
pub struct Os2Metrics {
    pub cap_height: Option<i16>,
    pub x_height: Option<i16>,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub typo_line_gap: i16,
    pub win_ascent: u16,
    pub win_descent: u16,
    pub strikeout_position: i16,
    pub strikeout_size: i16,
    pub average_width: i16,
    pub superscript_x_size: i16,
    pub superscript_x_offset: i16,
    pub superscript_y_size: i16,
    pub superscript_y_offset: i16,
    pub subscript_x_size: i16,
    pub subscript_x_offset: i16,
    pub subscript_y_size: i16,
    pub subscript_y_offset: i16,
}

/// Metrics read from the `post` table.
#[derive(Debug, Clone, Copy)]
pub struct PostMetrics {
    pub underline_position: i16,
    pub underline_thickness: i16,
    pub italic_angle: f64,
    pub is_fixed_pitch: u32,
}

/// A raw nameID 5 record, kept undecoded until checked.
#[derive(Debug, Clone)]
pub struct VersionRecord {
    pub platform: Platform,
    pub raw: Vec<u8>,
}

/// Advance width of one glyph, from `hmtx`.
///
/// Glyph names come from `post` and are not guaranteed unique, so entries
/// are kept per glyph id; two glyphs sharing a name stay distinct in
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphAdvance {
    pub gid: u16,
    pub name: String,
    pub width: u16,
}

/// Immutable snapshot of everything one font exposes to the checks.
///
/// Each table is read once; a table the font lacks is `None` rather than a
/// zero-filled default, so the engine can report "field not present" instead
/// of a bogus mismatch.
#[derive(Debug, Clone)]
pub struct FontAttributes {
    pub path: PathBuf,
    pub head: Option<HeadMetrics>,
    pub hhea: Option<HheaMetrics>,
    pub os2: Option<Os2Metrics>,
    pub post: Option<PostMetrics>,
    pub num_glyphs: Option<u16>,
    /// Per-glyph advance widths in glyph id order, from `hmtx`.
    pub advance_widths: Option<Vec<GlyphAdvance>>,
    pub version_records: Vec<VersionRecord>,
}

impl FontAttributes {
    /// Snapshot the checkable attributes of an already-parsed font.
    pub fn from_font(font: &FontRef, path: impl Into<PathBuf>) -> Self {
        let head = font
            .head()
            .ok()
            .map(|head| HeadMetrics { units_per_em: head.units_per_em() });

        let hhea = font.hhea().ok().map(|hhea| HheaMetrics {
            ascent: hhea.ascender().to_i16(),
            descent: hhea.descender().to_i16(),
            line_gap: hhea.line_gap().to_i16(),
        });

        let os2 = font.os2().ok().map(|os2| Os2Metrics {
            cap_height: os2.s_cap_height(),
            x_height: os2.sx_height(),
            typo_ascender: os2.s_typo_ascender(),
            typo_descender: os2.s_typo_descender(),
            typo_line_gap: os2.s_typo_line_gap(),
            win_ascent: os2.us_win_ascent(),
            win_descent: os2.us_win_descent(),
            strikeout_position: os2.y_strikeout_position(),
            strikeout_size: os2.y_strikeout_size(),
            average_width: os2.x_avg_char_width(),
            superscript_x_size: os2.y_superscript_x_size(),
            superscript_x_offset: os2.y_superscript_x_offset(),
            superscript_y_size: os2.y_superscript_y_size(),
            superscript_y_offset: os2.y_superscript_y_offset(),
            subscript_x_size: os2.y_subscript_x_size(),
            subscript_x_offset: os2.y_subscript_x_offset(),
            subscript_y_size: os2.y_subscript_y_size(),
            subscript_y_offset: os2.y_subscript_y_offset(),
        });

        let post = font.post().ok().map(|post| PostMetrics {
            underline_position: post.underline_position().to_i16(),
            underline_thickness: post.underline_thickness().to_i16(),
            italic_angle: post.italic_angle().to_f64(),
            is_fixed_pitch: post.is_fixed_pitch(),
        });

        let num_glyphs = font.maxp().ok().map(|maxp| maxp.num_glyphs());
        let advance_widths = num_glyphs.and_then(|count| read_advance_widths(font, count));
        let version_records = read_version_records(font);

        Self {
            path: path.into(),
            head,
            hhea,
            os2,
            post,
            num_glyphs,
            advance_widths,
            version_records,
        }
    }

    /// Typed lookup of a scalar field. `None` means the owning table (or a
    /// version-gated field) is absent from this font.
    pub fn scalar(&self, field: Field) -> Option<Value> {
        let int = |v: i64| Some(Value::Int(v));
        match field {
            Field::UnitsPerEm => int(i64::from(self.head?.units_per_em)),
            Field::Ascent => int(i64::from(self.hhea?.ascent)),
            Field::Descent => int(i64::from(self.hhea?.descent)),
            Field::LineGap => int(i64::from(self.hhea?.line_gap)),
            Field::CapHeight => int(i64::from(self.os2?.cap_height?)),
            Field::XHeight => int(i64::from(self.os2?.x_height?)),
            Field::TypoAscender => int(i64::from(self.os2?.typo_ascender)),
            Field::TypoDescender => int(i64::from(self.os2?.typo_descender)),
            Field::TypoLineGap => int(i64::from(self.os2?.typo_line_gap)),
            Field::WinAscent => int(i64::from(self.os2?.win_ascent)),
            Field::WinDescent => int(i64::from(self.os2?.win_descent)),
            Field::StrikeoutPosition => int(i64::from(self.os2?.strikeout_position)),
            Field::StrikeoutSize => int(i64::from(self.os2?.strikeout_size)),
            Field::AverageWidth => int(i64::from(self.os2?.average_width)),
            Field::SuperscriptXSize => int(i64::from(self.os2?.superscript_x_size)),
            Field::SuperscriptXOffset => int(i64::from(self.os2?.superscript_x_offset)),
            Field::SuperscriptYSize => int(i64::from(self.os2?.superscript_y_size)),
            Field::SuperscriptYOffset => int(i64::from(self.os2?.superscript_y_offset)),
            Field::SubscriptXSize => int(i64::from(self.os2?.subscript_x_size)),
            Field::SubscriptXOffset => int(i64::from(self.os2?.subscript_x_offset)),
            Field::SubscriptYSize => int(i64::from(self.os2?.subscript_y_size)),
            Field::SubscriptYOffset => int(i64::from(self.os2?.subscript_y_offset)),
            Field::UnderlinePosition => int(i64::from(self.post?.underline_position)),
            Field::UnderlineThickness => int(i64::from(self.post?.underline_thickness)),
            Field::ItalicAngle => Some(Value::Float(self.post?.italic_angle)),
            Field::NumGlyphs => int(i64::from(self.num_glyphs?)),
        }
    }

    /// The raw version record for a platform, if the font carries one.
    pub fn version_record(&self, platform: Platform) -> Option<&VersionRecord> {
        self.version_records.iter().find(|rec| rec.platform == platform)
    }
}

/// Read and snapshot a font file from disk.
///
/// The font data is dropped before this returns, so long batch runs hold at
/// most one font's bytes at a time.
pub fn read_font_attributes(path: &Path) -> Result<FontAttributes> {
    debug!("reading font {}", path.display());
    let data = std::fs::read(path).map_err(|source| Error::ReadFont {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontRef::new(&data).map_err(|source| Error::ParseFont {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FontAttributes::from_font(&font, path))
}

fn read_advance_widths(font: &FontRef, num_glyphs: u16) -> Option<Vec<GlyphAdvance>> {
    let hmtx = font.hmtx().ok()?;
    let post = font.post().ok();
    let mut widths = Vec::with_capacity(usize::from(num_glyphs));
    for gid in 0..num_glyphs {
        let Some(advance) = hmtx.advance(GlyphId::new(u32::from(gid))) else {
            continue;
        };
        let name = post
            .as_ref()
            .and_then(|post| post.glyph_name(GlyphId16::new(gid)))
            .map(str::to_string)
            // post version 3 fonts drop glyph names; fall back to synthetic
            // names so the report still identifies the glyph.
            .unwrap_or_else(|| format!("glyph{gid:05}"));
        widths.push(GlyphAdvance { gid, name, width: advance });
    }
    Some(widths)
}

fn read_version_records(font: &FontRef) -> Vec<VersionRecord> {
    match font.name() {
        Ok(name) => version_records_from(&name),
        Err(_) => Vec::new(),
    }
}

fn version_records_from(name: &Name) -> Vec<VersionRecord> {
    let string_data = name.string_data();
    let mut records = Vec::new();
    for record in name.name_record() {
        if record.name_id().to_u16() != NAME_ID_VERSION {
            continue;
        }
        let start = record.string_offset().non_null().unwrap_or(0);
        let end = start + record.length() as usize;
        let Some(raw) = string_data.as_bytes().get(start..end) else {
            warn!(
                "nameID 5 record for platform {} points outside string storage",
                record.platform_id()
            );
            continue;
        };
        records.push(VersionRecord {
            platform: Platform::from_id(record.platform_id()),
            raw: raw.to_vec(),
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_attributes() -> FontAttributes {
        FontAttributes {
            path: PathBuf::from("empty.ttf"),
            head: None,
            hhea: None,
            os2: None,
            post: None,
            num_glyphs: None,
            advance_widths: None,
            version_records: Vec::new(),
        }
    }

    #[test]
    fn test_missing_tables_are_none_not_zero() {
        let attrs = empty_attributes();
        for field in Field::METRICS {
            assert_eq!(attrs.scalar(field), None, "{field:?}");
        }
        assert_eq!(attrs.scalar(Field::NumGlyphs), None);
    }

    #[test]
    fn test_from_font_smoke() {
        let font = FontRef::new(font_test_data::CMAP12_FONT1).unwrap();
        let attrs = FontAttributes::from_font(&font, "test.ttf");
        // A real test font always carries head and maxp.
        assert!(attrs.head.is_some());
        assert!(attrs.num_glyphs.is_some());
    }

    #[test]
    fn test_scalar_reads_typed_fields() {
        let mut attrs = empty_attributes();
        attrs.head = Some(HeadMetrics { units_per_em: 2048 });
        attrs.hhea = Some(HheaMetrics { ascent: 1900, descent: -480, line_gap: 0 });
        assert_eq!(attrs.scalar(Field::UnitsPerEm), Some(Value::Int(2048)));
        assert_eq!(attrs.scalar(Field::Descent), Some(Value::Int(-480)));
        assert_eq!(attrs.scalar(Field::CapHeight), None);
    }

    /// Build a format-0 name table: header, records, then string storage.
    fn name_table(records: &[(u16, u16, u16, u16, &[u8])]) -> Vec<u8> {
        let mut storage: Vec<u8> = Vec::new();
        let mut out: Vec<u8> = Vec::new();
        out.extend(0u16.to_be_bytes());
        out.extend((records.len() as u16).to_be_bytes());
        out.extend((6 + 12 * records.len() as u16).to_be_bytes());
        for &(platform_id, encoding_id, language_id, name_id, raw) in records {
            for value in [
                platform_id,
                encoding_id,
                language_id,
                name_id,
                raw.len() as u16,
                storage.len() as u16,
            ] {
                out.extend(value.to_be_bytes());
            }
            storage.extend_from_slice(raw);
        }
        out.extend(storage);
        out
    }

    #[test]
    fn test_version_records_read_raw_bytes_per_platform() {
        use read_fonts::{FontData, FontRead};

        let windows_raw: Vec<u8> = "Version 3.001"
            .encode_utf16()
            .flat_map(|u| u.to_be_bytes())
            .collect();
        let bytes = name_table(&[
            (1, 0, 0, 1, b"Test Family"),
            (1, 0, 0, 5, b"Version 3.001"),
            (3, 1, 0x409, 5, &windows_raw),
        ]);
        let name = Name::read(FontData::new(&bytes)).unwrap();

        let records = version_records_from(&name);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].platform, Platform::Macintosh);
        assert_eq!(records[0].raw, b"Version 3.001");
        assert_eq!(records[1].platform, Platform::Windows);
        assert_eq!(records[1].raw, windows_raw);
    }

    #[test]
    fn test_version_record_lookup_by_platform() {
        let mut attrs = empty_attributes();
        attrs.version_records = vec![VersionRecord {
            platform: Platform::Macintosh,
            raw: b"Version 3.001".to_vec(),
        }];
        assert!(attrs.version_record(Platform::Macintosh).is_some());
        assert!(attrs.version_record(Platform::Windows).is_none());
    }
}
