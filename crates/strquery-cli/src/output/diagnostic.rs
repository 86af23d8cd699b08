//! Miette diagnostic wrapper for template and repository file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use strquery::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a template or file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(strquery::syntax))]
pub struct QueryDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl QueryDiagnostic {
    /// Create a diagnostic from a template ParseError.
    pub fn from_parse_error(name: &str, template: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let (message, help) = match err {
            ParseError::InvalidIndex { digits, .. } => (
                format!("invalid placeholder index '?{}'", digits),
                Some("placeholder indices must fit in a machine-sized integer".to_string()),
            ),
            ParseError::Syntax { message, .. } => (message.clone(), None),
        };
        let length = match err {
            ParseError::InvalidIndex { digits, .. } => digits.len() + 1,
            ParseError::Syntax { .. } => 1,
        };
        Self::at(name, template, line, column, length, message, help)
    }

    /// Create a diagnostic from a JSON error in a repository file.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        Self::at(
            &path.display().to_string(),
            content,
            err.line().max(1),
            err.column().max(1),
            1,
            err.to_string(),
            Some("expected { \"methods\": [ { \"name\", \"query\", \"params\" } ] }".to_string()),
        )
    }

    fn at(
        name: &str,
        content: &str,
        line: usize,
        column: usize,
        length: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        // Convert line:column to byte offset. Lines start after each '\n', so
        // a preceding '\r' stays part of the previous line.
        let line_start = match line.checked_sub(2) {
            None => 0,
            Some(newlines) => content
                .match_indices('\n')
                .nth(newlines)
                .map_or(content.len(), |(pos, _)| pos + 1),
        };
        let offset = line_start + column.saturating_sub(1);

        // Clamp to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());
        let length = length.min(content.len() - offset);

        QueryDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, length).into(),
            message,
            help,
        }
    }
}
