//! Outcomes, per-font reports, and run-level aggregation.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::field::Value;
use crate::rules::Rule;

/// An offending glyph from the uniform-advance-width check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphWidth {
    pub name: String,
    pub width: u16,
}

/// Result of applying one rule to one font.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub label: &'static str,
    pub table: &'static str,
    pub passed: bool,
    pub observed: Option<Value>,
    pub expected: Option<Value>,
    pub message: Option<String>,
    /// Every mismatched glyph, not just the first; truncating would hide
    /// the scope of a regression.
    pub glyph_widths: Vec<GlyphWidth>,
}

impl Outcome {
    pub fn pass(rule: &Rule) -> Self {
        Self {
            label: rule.label,
            table: rule.table,
            passed: true,
            observed: None,
            expected: None,
            message: None,
            glyph_widths: Vec::new(),
        }
    }

    pub fn mismatch(rule: &Rule, observed: Value, expected: Value) -> Self {
        Self {
            label: rule.label,
            table: rule.table,
            passed: false,
            observed: Some(observed),
            expected: Some(expected),
            message: None,
            glyph_widths: Vec::new(),
        }
    }

    pub fn fail(rule: &Rule, message: impl Into<String>) -> Self {
        Self {
            label: rule.label,
            table: rule.table,
            passed: false,
            observed: None,
            expected: None,
            message: Some(message.into()),
            glyph_widths: Vec::new(),
        }
    }
}

/// Ordered outcomes for one font.
#[derive(Debug, Clone)]
pub struct FontReport {
    pub path: PathBuf,
    pub outcomes: Vec<Outcome>,
}

impl FontReport {
    pub fn new(path: impl Into<PathBuf>, outcomes: Vec<Outcome>) -> Self {
        Self { path: path.into(), outcomes }
    }

    pub fn any_failed(&self) -> bool {
        self.outcomes.iter().any(|o| !o.passed)
    }
}

/// All outcomes of one invocation, in font order then rule order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    fonts: Vec<FontReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, font: FontReport) {
        self.fonts.push(font);
    }

    pub fn fonts(&self) -> &[FontReport] {
        &self.fonts
    }

    /// True iff at least one outcome anywhere in the run failed. Derived
    /// from the outcome sequence, so it cannot drift out of sync with it.
    pub fn any_failed(&self) -> bool {
        self.fonts.iter().any(FontReport::any_failed)
    }

    /// Render the report as human-readable pass/fail lines.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for font in &self.fonts {
            writeln!(out, ">>> Checking '{}'", font.path.display())?;
            for outcome in &font.outcomes {
                render_outcome(out, outcome)?;
            }
        }
        Ok(())
    }
}

fn render_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    if outcome.passed {
        return writeln!(out, "  \u{2713} [{}] {}", outcome.table, outcome.label);
    }
    write!(out, "  \u{2717} [{}] {}", outcome.table, outcome.label)?;
    if let Some(message) = &outcome.message {
        write!(out, ": {message}")?;
    }
    if let (Some(observed), Some(expected)) = (&outcome.observed, &outcome.expected) {
        write!(out, ": observed {observed}, expected {expected}")?;
    }
    writeln!(out)?;
    for glyph in &outcome.glyph_widths {
        writeln!(out, "      {} : {}", glyph.name, glyph.width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::monospace_rules;

    fn rendered(report: &RunReport) -> String {
        let mut buf = Vec::new();
        report.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_run_has_no_failures() {
        assert!(!RunReport::new().any_failed());
    }

    #[test]
    fn test_any_failed_derived_from_outcomes() {
        let rules = monospace_rules();
        let mut report = RunReport::new();
        report.push(FontReport::new("a.ttf", vec![Outcome::pass(&rules[0])]));
        assert!(!report.any_failed());
        report.push(FontReport::new(
            "b.ttf",
            vec![Outcome::fail(&rules[0], "isFixedPitch is not set")],
        ));
        assert!(report.any_failed());
    }

    #[test]
    fn test_render_pass_and_fail_lines() {
        let rules = monospace_rules();
        let mut report = RunReport::new();
        let mut failing = Outcome::mismatch(&rules[1], Value::Int(620), Value::Int(600));
        failing.glyph_widths.push(GlyphWidth { name: "A".into(), width: 620 });
        report.push(FontReport::new("a.ttf", vec![Outcome::pass(&rules[0]), failing]));

        let text = rendered(&report);
        assert!(text.contains(">>> Checking 'a.ttf'"));
        assert!(text.contains("\u{2713} [post] Fixed Pitch Flag"));
        assert!(text.contains("\u{2717} [hmtx] Uniform Advance Width: observed 620, expected 600"));
        assert!(text.contains("      A : 620"));
    }
}
