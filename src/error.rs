/// Lexical errors.
///
/// Defines the diagnostics the scanner reports while tokenizing source code.
/// Lexical errors never stop the scanner; they are collected next to the
/// token stream and surfaced to the caller once scanning is complete.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from tokens. The parser stops at the first one it encounters.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include type mismatches between operands and references to
/// variables that were never declared.
pub mod runtime_error;

use thiserror::Error;

pub use lex_error::{LexError, LexErrors};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that can end a run, tagged by the phase that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more diagnostics reported while scanning.
    #[error(transparent)]
    Lex(#[from] LexErrors),
    /// The first syntax error found by the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The error that aborted execution.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source line the error points at.
    ///
    /// For lexical errors this is the line of the first diagnostic.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(errors) => errors.iter().next().map_or(0, LexError::line),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
