//! Tabula CLI
//!
//! Truth tables for propositional formulas.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tabulac::{init_tracing, parse_args, read_formula, report, run, Command, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::from(err.exit_code());
        }
    };

    let source = if options.command == Command::Help {
        String::new()
    } else {
        match read_formula(&options, io::stdin().lock()) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(err.exit_code());
            }
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&options, &source, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let color = options.color.enabled();
            let mut stderr = io::stderr().lock();
            if report::report_failure(&err, &source, color, &mut out, &mut stderr).is_err() {
                eprintln!("error: {err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
