//! Query template parser.
//!
//! This module tokenizes template strings into literal text and positional
//! placeholders. The resulting AST is computed once per template and reused
//! for every binding.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::{PLACEHOLDER_MARKER, parse_template};
