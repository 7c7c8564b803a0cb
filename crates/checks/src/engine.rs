//! Applies a declared rule list to one font's attributes.

use log::debug;

use crate::expectation::Expectation;
use crate::field::Value;
use crate::font::FontAttributes;
use crate::report::{GlyphWidth, Outcome};
use crate::rules::{Rule, RuleKind};
use crate::version::{VersionError, extract_version_token};

const MISSING_FIELD: &str = "field not present in font";
const MISSING_EXPECTED: &str = "no expected value defined";

/// Apply every rule to one font, in declaration order.
///
/// A failing rule never stops the remaining rules; the full outcome list is
/// always produced so one invocation surfaces every defect at once.
pub fn check_font(attrs: &FontAttributes, expected: &Expectation, rules: &[Rule]) -> Vec<Outcome> {
    debug!("checking {} with {} rules", attrs.path.display(), rules.len());
    rules.iter().map(|rule| apply_rule(attrs, expected, rule)).collect()
}

fn apply_rule(attrs: &FontAttributes, expected: &Expectation, rule: &Rule) -> Outcome {
    match rule.kind {
        RuleKind::Scalar(field) => {
            let Some(want) = expected.scalar(field) else {
                return Outcome::fail(rule, MISSING_EXPECTED);
            };
            let Some(got) = attrs.scalar(field) else {
                return Outcome::fail(rule, MISSING_FIELD);
            };
            if got == want {
                Outcome::pass(rule)
            } else {
                Outcome::mismatch(rule, got, want)
            }
        }
        RuleKind::FixedPitchFlag => match attrs.post.as_ref().map(|post| post.is_fixed_pitch) {
            None => Outcome::fail(rule, MISSING_FIELD),
            // The flag is stored as an integer; any nonzero value means
            // fixed pitch.
            Some(0) => Outcome::mismatch(rule, Value::Int(0), Value::Int(1)),
            Some(_) => Outcome::pass(rule),
        },
        RuleKind::UniformAdvanceWidth => {
            let Some(want) = expected.advance_width else {
                return Outcome::fail(rule, MISSING_EXPECTED);
            };
            let Some(widths) = &attrs.advance_widths else {
                return Outcome::fail(rule, MISSING_FIELD);
            };
            let offending: Vec<GlyphWidth> = widths
                .iter()
                .filter(|glyph| i64::from(glyph.width) != want)
                .map(|glyph| GlyphWidth { name: glyph.name.clone(), width: glyph.width })
                .collect();
            if offending.is_empty() {
                Outcome::pass(rule)
            } else {
                let mut outcome = Outcome::fail(
                    rule,
                    format!(
                        "{} of {} glyphs differ from expected advance width {}",
                        offending.len(),
                        widths.len(),
                        want
                    ),
                );
                outcome.glyph_widths = offending;
                outcome
            }
        }
        RuleKind::VersionString(platform) => {
            let Some(want) = expected.version.as_deref() else {
                return Outcome::fail(rule, MISSING_EXPECTED);
            };
            let Some(record) = attrs.version_record(platform) else {
                return Outcome::fail(
                    rule,
                    VersionError::RecordMissing { platform }.to_string(),
                );
            };
            match extract_version_token(&record.raw, platform) {
                Ok(token) if token == want => Outcome::pass(rule),
                Ok(token) => Outcome::mismatch(rule, Value::Str(token), Value::from(want)),
                Err(err) => Outcome::fail(rule, err.to_string()),
            }
        }
    }
}
