//! fontqa CLI library.

pub mod cli;
pub mod commands;

pub use commands::{run_glyph_count, run_metrics, run_monospace, run_stub, run_version};
