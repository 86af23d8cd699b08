//! Parse error types for query templates.

use thiserror::Error;

/// An error that occurred while tokenizing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A placeholder whose digit run cannot be represented as an index.
    #[error("invalid placeholder index '?{digits}' at {line}:{column}")]
    InvalidIndex {
        line: usize,
        column: usize,
        digits: String,
    },

    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// Line and column (both 1-based) of the error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::InvalidIndex { line, column, .. }
            | ParseError::Syntax { line, column, .. } => (*line, *column),
        }
    }
}
