//! Query template tokenizer using winnow.
//!
//! Splits a template into literal text and positional placeholders:
//! - `?` followed by one or more ASCII digits is a placeholder
//! - a `?` not followed by a digit is literal text (wildcard syntax in many
//!   query languages)
//! - everything else is literal text

use winnow::ascii::digit1;
use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::stream::Offset;
use winnow::token::take_till;

use super::ast::{Segment, Template};
use super::error::ParseError;

/// Marker character that introduces a placeholder.
pub const PLACEHOLDER_MARKER: char = '?';

/// A segment as produced by the tokenizer, before index conversion.
#[derive(Debug, Clone)]
enum RawSegment<'i> {
    Literal(&'i str),
    Placeholder(&'i str),
}

/// Parse a template string into segments.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    let raw = match raw_segments(&mut remaining) {
        Ok(raw) => raw,
        Err(e) => {
            let (line, column) = calculate_position(input, remaining.offset_from(&input));
            return Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            });
        }
    };
    if !remaining.is_empty() {
        let (line, column) = calculate_position(input, remaining.offset_from(&input));
        return Err(ParseError::Syntax {
            line,
            column,
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        });
    }

    let mut segments = Vec::with_capacity(raw.len());
    for segment in raw {
        match segment {
            RawSegment::Literal(text) => push_literal(&mut segments, text),
            RawSegment::Placeholder(digits) => {
                let index = digits.parse::<usize>().map_err(|_| {
                    // Point at the marker, one byte before the digit run.
                    let offset = digits.offset_from(&input) - PLACEHOLDER_MARKER.len_utf8();
                    let (line, column) = calculate_position(input, offset);
                    ParseError::InvalidIndex {
                        line,
                        column,
                        digits: digits.to_string(),
                    }
                })?;
                segments.push(Segment::Placeholder(index));
            }
        }
    }
    Ok(Template { segments })
}

/// Calculate 1-based line and column from a byte offset into `original`.
fn calculate_position(original: &str, offset: usize) -> (usize, usize) {
    let consumed_str = &original[..offset];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => offset - pos,
        None => offset + 1,
    };
    (line, column)
}

/// Append literal text, merging with a preceding literal segment.
fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Literal(prev)) = segments.last_mut() {
        prev.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}

/// Tokenize the whole input.
fn raw_segments<'i>(input: &mut &'i str) -> ModalResult<Vec<RawSegment<'i>>> {
    repeat(0.., raw_segment).parse_next(input)
}

/// Parse a single segment (placeholder, literal run, or lone marker).
fn raw_segment<'i>(input: &mut &'i str) -> ModalResult<RawSegment<'i>> {
    alt((placeholder, literal_run, lone_marker)).parse_next(input)
}

/// Parse a placeholder: `?` followed by a digit run.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<RawSegment<'i>> {
    preceded(PLACEHOLDER_MARKER, digit1)
        .map(RawSegment::Placeholder)
        .parse_next(input)
}

/// Parse a run of text up to the next marker.
fn literal_run<'i>(input: &mut &'i str) -> ModalResult<RawSegment<'i>> {
    take_till(1.., PLACEHOLDER_MARKER)
        .map(RawSegment::Literal)
        .parse_next(input)
}

/// Parse a marker that does not start a placeholder.
fn lone_marker<'i>(input: &mut &'i str) -> ModalResult<RawSegment<'i>> {
    PLACEHOLDER_MARKER
        .value(RawSegment::Literal("?"))
        .parse_next(input)
}
