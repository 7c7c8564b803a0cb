//! Conformance checks for compiled font binaries.
//!
//! Reads scalar and string attributes out of a font's tables and compares
//! them against externally supplied expected values: glyph count, monospace
//! advance widths, OpenType metrics fields, and embedded version strings.

pub mod engine;
pub mod error;
pub mod expectation;
pub mod field;
pub mod font;
pub mod report;
pub mod rules;
pub mod version;

pub use engine::check_font;
pub use error::{Error, Result};
pub use expectation::{Expectation, load_expectation, stub_document, write_stub};
pub use field::{Field, Value};
pub use font::{FontAttributes, GlyphAdvance, read_font_attributes};
pub use report::{FontReport, GlyphWidth, Outcome, RunReport};
pub use rules::{Rule, RuleKind, glyph_count_rules, metrics_rules, monospace_rules, version_rules};
pub use version::{Platform, VersionError, decode_name_string, extract_version_token};
