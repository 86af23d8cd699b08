//! Internal AST types for the query! macro.
//!
//! These types mirror the runtime template AST but keep the literal's span
//! for error messages.

use proc_macro2::Span;
use syn::Expr;

/// Macro input: a template literal followed by argument expressions.
pub struct MacroInput {
    pub template: Template,
    pub args: Vec<Expr>,
}

/// A tokenized template string.
pub struct Template {
    pub segments: Vec<Segment>,
    pub span: Span,
}

/// A segment of a template: literal text or placeholder.
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A `?<digits>` placeholder, index not yet range-checked.
pub struct Placeholder {
    /// The digit run as written.
    pub digits: String,
    /// Parsed index, `None` if the digits overflow `usize`.
    pub index: Option<usize>,
}
