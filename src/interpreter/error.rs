use std::num::ParseIntError;

use thiserror::Error;

/// Why a single command line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid key {token:?}: {source}")]
    InvalidKey {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure of the interpreter loop as a whole
#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InterpreterError>;
