//! Rule declarations for the four check families.
//!
//! Rules are stateless and declared once per command invocation; the same
//! slice is applied to every font in the batch, in order.

use crate::field::Field;
use crate::version::Platform;

/// How a rule compares the font against the expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Exact equality on a scalar field.
    Scalar(Field),
    /// `post.isFixedPitch` must be nonzero.
    FixedPitchFlag,
    /// Every glyph's advance width must equal the expected scalar.
    UniformAdvanceWidth,
    /// The nameID 5 record for a platform must carry the expected token.
    VersionString(Platform),
}

/// One named check.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    pub table: &'static str,
    pub kind: RuleKind,
}

impl Rule {
    const fn new(label: &'static str, table: &'static str, kind: RuleKind) -> Self {
        Self { label, table, kind }
    }

    fn scalar(field: Field) -> Self {
        Self::new(field.label(), field.table(), RuleKind::Scalar(field))
    }
}

/// Rules for the `metrics` command: the 25 metric fields in report order.
pub fn metrics_rules() -> Vec<Rule> {
    Field::METRICS.iter().copied().map(Rule::scalar).collect()
}

/// Rules for the `glyph-count` command.
pub fn glyph_count_rules() -> Vec<Rule> {
    vec![Rule::scalar(Field::NumGlyphs)]
}

/// Rules for the `monospace` command.
pub fn monospace_rules() -> Vec<Rule> {
    vec![
        Rule::new("Fixed Pitch Flag", "post", RuleKind::FixedPitchFlag),
        Rule::new("Uniform Advance Width", "hmtx", RuleKind::UniformAdvanceWidth),
    ]
}

/// Rules for the `version` command. Both platform records are checked
/// independently; either one missing is its own failure.
pub fn version_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Version String (Macintosh)",
            "name",
            RuleKind::VersionString(Platform::Macintosh),
        ),
        Rule::new(
            "Version String (Windows)",
            "name",
            RuleKind::VersionString(Platform::Windows),
        ),
    ]
}
