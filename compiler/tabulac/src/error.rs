//! Everything that can stop the shell, and the exit code for each.

use std::io;

use tabula_eval::{CapacityError, EvalError, TableError};
use tabula_lexer::LexError;
use tabula_parse::ParseError;

/// A failure of one `tabula` invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Io(_) => 1,
            CliError::Lex(_) => 2,
            CliError::Parse(_) => 3,
            CliError::Capacity(_) => 4,
            CliError::Eval(_) => 5,
        }
    }
}

impl From<TableError> for CliError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::Capacity(err) => CliError::Capacity(err),
            TableError::Eval(err) => CliError::Eval(err),
        }
    }
}
