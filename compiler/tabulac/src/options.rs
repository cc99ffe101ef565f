//! Command-line options.
//!
//! ```text
//! tabula [table] [FORMULA] [--table-only] [--color=auto|always|never]
//! tabula lex [FORMULA]
//! tabula parse [FORMULA]
//! tabula help
//! ```
//!
//! The first positional argument selects the command when it is one of the
//! command words; otherwise it is the formula. Without a formula the first
//! line of standard input is used.

use std::io::IsTerminal;

use crate::CliError;

/// What to do with the formula.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Command {
    /// Print the subformulas and the truth table.
    #[default]
    Table,
    /// Print the token stream.
    Lex,
    /// Print the canonical rendering.
    Parse,
    /// Print usage.
    Help,
}

/// When diagnostics are colored.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorChoice::Auto),
            "always" => Some(ColorChoice::Always),
            "never" => Some(ColorChoice::Never),
            _ => None,
        }
    }

    /// Resolve to a yes/no for stderr.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CliOptions {
    pub command: Command,
    /// Formula given on the command line, if any.
    pub formula: Option<String>,
    /// Skip the operation count and subformula list.
    pub table_only: bool,
    pub color: ColorChoice,
}

/// Parse arguments, not including the program name.
///
/// # Errors
///
/// Returns [`CliError::Usage`] for unknown flags, a bad `--color` value,
/// more than one formula, or `--table-only` outside the table command.
pub fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut positionals = 0;

    for arg in args {
        if arg == "--table-only" {
            options.table_only = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorChoice::from_flag(value).ok_or_else(|| {
                CliError::usage(format!(
                    "invalid value `{value}` for --color (expected auto, always or never)"
                ))
            })?;
        } else if arg == "-h" || arg == "--help" {
            options.command = Command::Help;
        } else if arg.starts_with("--") {
            return Err(CliError::usage(format!("unknown option `{arg}`")));
        } else {
            positionals += 1;
            match command_word(&arg) {
                Some(command) if positionals == 1 => options.command = command,
                _ if options.formula.is_none() => options.formula = Some(arg),
                _ => {
                    return Err(CliError::usage(format!(
                        "unexpected argument `{arg}` (quote the formula to pass it as one argument)"
                    )))
                }
            }
        }
    }

    if options.table_only && !matches!(options.command, Command::Table | Command::Help) {
        return Err(CliError::usage("--table-only only applies to the table command"));
    }
    Ok(options)
}

fn command_word(arg: &str) -> Option<Command> {
    match arg {
        "table" => Some(Command::Table),
        "lex" => Some(Command::Lex),
        "parse" => Some(Command::Parse),
        "help" => Some(Command::Help),
        _ => None,
    }
}

/// Usage text printed by `tabula help`.
pub const USAGE: &str = "\
Usage: tabula [table] [FORMULA] [--table-only] [--color=auto|always|never]
       tabula lex [FORMULA]
       tabula parse [FORMULA]
       tabula help

Prints the truth table of a propositional formula. Without FORMULA the
first line of standard input is read.

Syntax (loosest first, all binary operators fold left):
  a -> b   a <-> b     implication, equivalence
  a | b    a ^ b       disjunction, exclusive or
  a & b                conjunction
  !a                   negation
  0  1  name  ( )      constants, variables, grouping

Options:
  --table-only         Print only the header and the rows
  --color=<when>       Color diagnostics: auto, always, never

Set RUST_LOG (e.g. RUST_LOG=tabula_eval=debug) for tracing output.
";
