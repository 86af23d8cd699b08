//! Value formatter: renders one bound value as the text spliced in at a
//! placeholder site.
//!
//! Rendering is driven by the declared [`ParamKind`]:
//! - scalars render in their literal form, unquoted
//! - strings render with `"` and `\` escaped, but without surrounding quotes
//!   (the template author decides whether the placeholder sits inside quotes)
//! - collections render as `[e0,e1,...]`, string elements quoted and escaped

use crate::binder::FormatError;
use crate::types::{BoundArgument, ElementKind, ParamKind, Value};

/// Format a value under its declared kind, returning the fragment.
pub fn format_value(value: &Value, kind: ParamKind) -> Result<String, FormatError> {
    let mut out = String::new();
    write_value(&mut out, value, kind)?;
    Ok(out)
}

/// Format a bound argument, returning the fragment.
pub fn format_argument(argument: &BoundArgument) -> Result<String, FormatError> {
    format_value(&argument.value, argument.kind)
}

/// Append the fragment for `value` to `out`.
///
/// On error, `out` may hold a partial fragment; callers discard the buffer.
pub fn write_value(out: &mut String, value: &Value, kind: ParamKind) -> Result<(), FormatError> {
    match kind {
        ParamKind::String => write_string(out, value),
        ParamKind::Scalar => write_scalar(out, value),
        ParamKind::StringCollection | ParamKind::ScalarCollection => {
            let items = match value {
                Value::List(items) => items,
                Value::Null => return Err(FormatError::Null),
                other => {
                    return Err(FormatError::KindMismatch {
                        expected: kind,
                        found: other.type_name(),
                    });
                }
            };
            out.push('[');
            for (position, item) in items.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_element(out, item, kind).map_err(|source| FormatError::Element {
                    position,
                    source: Box::new(source),
                })?;
            }
            out.push(']');
            Ok(())
        }
    }
}

/// Append one collection element.
fn write_element(out: &mut String, item: &Value, kind: ParamKind) -> Result<(), FormatError> {
    if let Value::List(_) = item {
        return Err(FormatError::NestedCollection { kind });
    }
    match kind.element_kind() {
        ElementKind::String => {
            out.push('"');
            write_string(out, item)?;
            out.push('"');
            Ok(())
        }
        ElementKind::Scalar => write_scalar(out, item),
    }
}

fn write_string(out: &mut String, value: &Value) -> Result<(), FormatError> {
    match value {
        Value::String(s) => {
            escape_into(out, s);
            Ok(())
        }
        Value::Null => Err(FormatError::Null),
        other => Err(FormatError::KindMismatch {
            expected: ParamKind::String,
            found: other.type_name(),
        }),
    }
}

fn write_scalar(out: &mut String, value: &Value) -> Result<(), FormatError> {
    match value {
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(n) => out.push_str(&n.to_string()),
        Value::Null => return Err(FormatError::Null),
        Value::String(_) | Value::List(_) => {
            return Err(FormatError::KindMismatch {
                expected: ParamKind::Scalar,
                found: value.type_name(),
            });
        }
    }
    Ok(())
}

/// Append `s` with every `\` and `"` prefixed by a backslash.
pub fn escape_into(out: &mut String, s: &str) {
    out.reserve(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Escape a string for placement inside double quotes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}
