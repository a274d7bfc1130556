//! CLI entry point for spanwise.
//!
//! Parses arguments with clap, executes the selected command, renders its
//! summary to stdout and maps failures to a non-zero exit code. Logging is
//! initialised first so every command emits structured diagnostics on
//! stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanwise_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Runs the parsed command and writes its rendered summary to stdout.
fn try_main() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("command failed")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("failed to write results")?;
    stdout.flush().context("failed to flush stdout")
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_failure(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .map(|cli_error| field::display(cli_error.code()));
        let message = format!("{err:#}");
        error!(error = %message, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber exists yet to carry this message"
)]
fn report_logging_failure(err: &LoggingError) {
    eprintln!("spanwise: cannot set up logging: {err}");
}
