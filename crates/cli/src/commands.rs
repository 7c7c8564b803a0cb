//! Per-command run functions.
//!
//! Argument-shape problems (missing trailing value, malformed pair syntax,
//! nonexistent paths) abort before any font is read; check failures never
//! do, so every font in a batch is always examined.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;

use fontqa_checks::{
    Expectation, FontReport, Rule, RunReport, check_font, glyph_count_rules, load_expectation,
    metrics_rules, monospace_rules, read_font_attributes, version_rules, write_stub,
};

/// Check the maxp glyph count across one or more fonts.
pub fn run_glyph_count(args: &[String]) -> Result<RunReport> {
    let (fonts, expected) = split_trailing_count(args, "expected glyph count")?;
    run_batch(&fonts, &Expectation::glyph_count(expected), &glyph_count_rules())
}

/// Check the fixed-pitch flag and uniform advance widths.
pub fn run_monospace(args: &[String]) -> Result<RunReport> {
    let (fonts, expected) = split_trailing_count(args, "expected advance width")?;
    run_batch(&fonts, &Expectation::monospace(expected), &monospace_rules())
}

/// Check metrics fields, one expectation document per font.
pub fn run_metrics(pairs: &[String]) -> Result<RunReport> {
    run_paired(pairs, &metrics_rules())
}

/// Check version strings, one expectation document per font.
pub fn run_version(pairs: &[String]) -> Result<RunReport> {
    run_paired(pairs, &version_rules())
}

/// Write a template expectation document.
pub fn run_stub(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("'{}' already exists; pass --force to overwrite", path.display());
    }
    write_stub(path)?;
    info!("wrote expectation stub to {}", path.display());
    Ok(())
}

/// Apply one shared expectation to every font in the batch.
fn run_batch(fonts: &[PathBuf], expected: &Expectation, rules: &[Rule]) -> Result<RunReport> {
    let mut report = RunReport::new();
    for path in fonts {
        let attrs = read_font_attributes(path)?;
        report.push(FontReport::new(path, check_font(&attrs, expected, rules)));
    }
    Ok(report)
}

/// Apply per-font expectation documents from FONT:EXPECTATION pairs.
fn run_paired(pairs: &[String], rules: &[Rule]) -> Result<RunReport> {
    let pairs: Vec<(PathBuf, PathBuf)> =
        pairs.iter().map(|pair| split_pair(pair)).collect::<Result<_>>()?;

    let mut report = RunReport::new();
    for (font_path, expectation_path) in pairs {
        let expected = load_expectation(&expectation_path)?;
        let attrs = read_font_attributes(&font_path)?;
        report.push(FontReport::new(font_path, check_font(&attrs, &expected, rules)));
    }
    Ok(report)
}

/// Split the CLI argument list into font paths and a trailing integer.
fn split_trailing_count(args: &[String], what: &str) -> Result<(Vec<PathBuf>, i64)> {
    let (last, fonts) = args.split_last().context("missing arguments")?;
    let expected: i64 = last
        .parse()
        .with_context(|| format!("the last argument must be the {what}, got '{last}'"))?;
    let fonts: Vec<PathBuf> = fonts.iter().map(PathBuf::from).collect();
    for font in &fonts {
        require_file(font)?;
    }
    Ok((fonts, expected))
}

/// Split a `font:expectation` argument into its two existing paths.
fn split_pair(pair: &str) -> Result<(PathBuf, PathBuf)> {
    let parts: Vec<&str> = pair.split(':').collect();
    let [font, expectation] = parts[..] else {
        bail!("'{pair}' is not a FONT:EXPECTATION pair");
    };
    let font = PathBuf::from(font);
    let expectation = PathBuf::from(expectation);
    require_file(&font)?;
    require_file(&expectation)?;
    Ok((font, expectation))
}

fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("'{}' is not a file", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trailing_argument_must_be_integer() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("a.ttf");
        std::fs::write(&font, font_test_data::CMAP12_FONT1).unwrap();

        let args = strings(&[font.to_str().unwrap(), "not-a-number"]);
        let err = split_trailing_count(&args, "expected glyph count").unwrap_err();
        assert!(err.to_string().contains("expected glyph count"));
    }

    #[test]
    fn test_missing_font_is_fatal() {
        let args = strings(&["/nonexistent/a.ttf", "512"]);
        assert!(split_trailing_count(&args, "expected glyph count").is_err());
    }

    #[test]
    fn test_pair_syntax_requires_two_parts() {
        assert!(split_pair("just-a-font.ttf").is_err());
        assert!(split_pair("a.ttf:b.toml:c").is_err());
    }

    #[test]
    fn test_stub_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expected.toml");
        run_stub(&path, false).unwrap();
        assert!(run_stub(&path, false).is_err());
        run_stub(&path, true).unwrap();
    }
}
