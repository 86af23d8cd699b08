//! Template binder: splices formatted arguments into a parsed template.

use tracing::trace;

use crate::binder::format::write_value;
use crate::binder::BindError;
use crate::parser::{Segment, Template, parse_template};
use crate::types::{BoundArgument, ParamKind, Value};

/// Bind arguments into a parsed template, producing the query text.
///
/// Literal segments are copied unchanged. Each placeholder is resolved by
/// its index value, so the same argument may fill several positions and
/// positions may appear in any order. Replacement text is never scanned for
/// further placeholders.
///
/// # Errors
///
/// Returns an error if:
/// - A placeholder index is not less than `arguments.len()`
/// - An argument's value does not conform to its declared kind
///
/// No partial output is returned on error.
pub fn bind(template: &Template, arguments: &[BoundArgument]) -> Result<String, BindError> {
    bind_resolved(template, arguments.len(), |index| {
        arguments
            .get(index)
            .map(|argument| (argument.kind, &argument.value))
    })
}

/// Bind with arguments supplied by a lookup over `len` positions.
///
/// Lets a query method pair its declared kinds with caller values without
/// building intermediate [`BoundArgument`]s.
pub(crate) fn bind_resolved<'a, F>(
    template: &Template,
    len: usize,
    resolve: F,
) -> Result<String, BindError>
where
    F: Fn(usize) -> Option<(ParamKind, &'a Value)>,
{
    let mut output = String::with_capacity(estimate_capacity(template));
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(index) => {
                let (kind, value) = resolve(*index).ok_or(BindError::IndexOutOfRange {
                    index: *index,
                    len,
                })?;
                write_value(&mut output, value, kind).map_err(|source| BindError::Format {
                    index: *index,
                    source,
                })?;
            }
        }
    }
    trace!(
        segments = template.segments.len(),
        arguments = len,
        output_len = output.len(),
        "bound query template"
    );
    Ok(output)
}

/// Parse `text` as a template and bind `arguments` into it.
///
/// Prefer parsing once with [`parse_template`] when a template is reused.
pub fn bind_str(text: &str, arguments: &[BoundArgument]) -> Result<String, BindError> {
    let template = parse_template(text)?;
    bind(&template, arguments)
}

fn estimate_capacity(template: &Template) -> usize {
    template
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.len(),
            Segment::Placeholder(_) => 8,
        })
        .sum()
}
