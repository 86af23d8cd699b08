//! Public AST types for query templates.
//!
//! These types are public so that tooling (the CLI, the `query!` macro's
//! parity tests) can inspect a template without binding it.

use std::collections::BTreeSet;

/// A parsed query template: literal text interleaved with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// A positional placeholder `?<index>`.
    Placeholder(usize),
}

impl Template {
    /// Builds a template directly from segments.
    ///
    /// Used by code generated with `query!`, which tokenizes the template at
    /// compile time.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Iterates over placeholder indices in scan order, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(index) => Some(*index),
            Segment::Literal(_) => None,
        })
    }

    /// The distinct placeholder indices referenced by this template.
    pub fn referenced_indices(&self) -> BTreeSet<usize> {
        self.placeholders().collect()
    }

    /// The number of arguments this template needs at minimum: one more
    /// than its highest placeholder index, or zero without placeholders.
    pub fn required_arguments(&self) -> usize {
        self.placeholders().max().map_or(0, |max| max + 1)
    }
}
