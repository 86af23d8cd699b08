//! Error types for formatting, binding and query method definitions.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::ParamKind;

/// A value that cannot be rendered under its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Absent values are never bound to a placeholder.
    #[error("null value cannot be bound")]
    Null,

    /// A collection inside a collection.
    #[error("nested collection cannot be bound as {kind}")]
    NestedCollection { kind: ParamKind },

    /// The value's shape does not match the declared kind.
    #[error("expected {expected} value, found {found}")]
    KindMismatch {
        expected: ParamKind,
        found: &'static str,
    },

    /// A collection element failed to format.
    #[error("element {position}: {source}")]
    Element {
        position: usize,
        #[source]
        source: Box<FormatError>,
    },

    /// A value shape with no query rendering at all.
    #[error("{found} values are not supported")]
    Unsupported { found: &'static str },
}

/// An error that occurred while binding arguments into a template.
#[derive(Debug, Error)]
pub enum BindError {
    /// A placeholder references a position past the argument list.
    #[error("placeholder ?{index} is out of range: {len} arguments bound")]
    IndexOutOfRange { index: usize, len: usize },

    /// The argument at a placeholder's position could not be formatted.
    #[error("argument {index}: {source}")]
    Format {
        index: usize,
        #[source]
        source: FormatError,
    },

    /// A query method was invoked with the wrong number of values.
    #[error("query method '{method}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        method: String,
        expected: usize,
        got: usize,
    },

    /// No query method with this name is registered.
    #[error("query method not found: '{name}'{}", format_suggestions(suggestions))]
    MethodNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// The template text given to `bind_str` did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// An error in a query method definition, detected when it is compiled.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The method's template did not parse.
    #[error("query method '{method}': {source}")]
    Parse {
        method: String,
        #[source]
        source: ParseError,
    },

    /// A placeholder references a parameter the method does not declare.
    #[error(
        "query method '{method}': placeholder ?{index} is out of range: {declared} parameters declared"
    )]
    IndexOutOfRange {
        method: String,
        index: usize,
        declared: usize,
    },

    /// Two methods with the same name in one registry.
    #[error("duplicate query method '{name}'")]
    DuplicateMethod { name: String },

    /// A repository definition file is not valid JSON for its schema.
    #[error("invalid repository definition: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// File I/O error when reading a repository definition file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A definition that is valid but probably not what its author meant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionWarning {
    /// A declared parameter that no placeholder references.
    #[error("query method '{method}': parameter {index} is never referenced")]
    UnusedParameter { method: String, index: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Names within a small edit distance of `key`, closest first, at most three.
///
/// Keys of up to three characters allow a distance of one; longer keys allow
/// two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|name| (levenshtein(key, name), name))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, name)| name.clone())
        .collect()
}
