//! Tabula command-line shell.
//!
//! Reads one formula, prints its subformulas and truth table, and maps
//! every failure to a diagnostic and an exit code. The library crates never
//! print; everything user-visible happens here.

pub mod commands;
mod error;
pub mod options;
pub mod report;

use std::io::{self, BufRead, Write};
use std::sync::Once;

pub use error::CliError;
pub use options::{parse_args, CliOptions, ColorChoice, Command, USAGE};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tabula_eval=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// The formula from the command line, or else the first line of `input`
/// without its line terminator.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading `input` fails.
pub fn read_formula<R: BufRead>(options: &CliOptions, mut input: R) -> Result<String, CliError> {
    if let Some(formula) = &options.formula {
        return Ok(formula.clone());
    }
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Run the selected command on `source`, writing results to `out`.
///
/// # Errors
///
/// Whatever the command fails with.
pub fn run<W: Write>(options: &CliOptions, source: &str, out: &mut W) -> Result<(), CliError> {
    tracing::debug!(command = ?options.command, "running");
    match options.command {
        Command::Table => commands::run_table(source, options.table_only, out)?,
        Command::Lex => commands::run_lex(source, out)?,
        Command::Parse => commands::run_parse(source, out)?,
        Command::Help => out.write_all(USAGE.as_bytes())?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
