//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fontqa_checks::RunReport;

use crate::commands;

#[derive(Parser)]
#[command(name = "fontqa")]
#[command(about = "Conformance checks for compiled font binaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the maxp glyph count of one or more fonts.
    ///
    /// The last argument is the expected count; all preceding arguments
    /// are font paths.
    GlyphCount {
        #[arg(value_name = "FONT... EXPECTED", required = true, num_args = 2..)]
        args: Vec<String>,
    },
    /// Check the fixed-pitch flag and uniform advance widths.
    ///
    /// The last argument is the expected advance width; all preceding
    /// arguments are font paths.
    Monospace {
        #[arg(value_name = "FONT... EXPECTED", required = true, num_args = 2..)]
        args: Vec<String>,
    },
    /// Check metrics fields against expectation documents.
    ///
    /// Each argument is a FONT:EXPECTATION pair, e.g. `build/A.ttf:a.toml`.
    Metrics {
        #[arg(value_name = "FONT:EXPECTATION", required = true)]
        pairs: Vec<String>,
    },
    /// Check nameID 5 version strings against expectation documents.
    ///
    /// Each argument is a FONT:EXPECTATION pair; the document's `version`
    /// key holds the expected D.DDD token.
    Version {
        #[arg(value_name = "FONT:EXPECTATION", required = true)]
        pairs: Vec<String>,
    },
    /// Write a template expectation document with every recognized key.
    Stub {
        #[arg(default_value = "expected-metrics.toml")]
        path: PathBuf,
        /// Overwrite the file if it already exists.
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Run the command, returning the accumulated report.
    ///
    /// An `Err` here is a fatal configuration error; check failures are
    /// carried inside the report instead.
    pub fn run(self) -> Result<RunReport> {
        match self {
            Commands::GlyphCount { args } => commands::run_glyph_count(&args),
            Commands::Monospace { args } => commands::run_monospace(&args),
            Commands::Metrics { pairs } => commands::run_metrics(&pairs),
            Commands::Version { pairs } => commands::run_version(&pairs),
            Commands::Stub { path, force } => {
                commands::run_stub(&path, force)?;
                Ok(RunReport::new())
            }
        }
    }
}
