use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::init;
use fontqa_cli::cli::Cli;

fn main() -> ExitCode {
    init();
    match Cli::parse().command.run() {
        Ok(report) => {
            let stdout = std::io::stdout();
            if report.render(&mut stdout.lock()).is_err() {
                return ExitCode::FAILURE;
            }
            if report.any_failed() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
