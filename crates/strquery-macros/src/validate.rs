//! Compile-time validation for the query! macro.
//!
//! Checks that every placeholder index parses and references one of the
//! macro's arguments. Errors point at the template literal.

use crate::input::{MacroInput, Placeholder, Segment};

/// Main validation entry point.
pub fn validate(input: &MacroInput) -> syn::Result<()> {
    let arg_count = input.args.len();
    for segment in &input.template.segments {
        let Segment::Placeholder(placeholder) = segment else {
            continue;
        };
        check_placeholder(placeholder, arg_count)
            .map_err(|message| syn::Error::new(input.template.span, message))?;
    }
    Ok(())
}

/// Check one placeholder against the argument count.
fn check_placeholder(placeholder: &Placeholder, arg_count: usize) -> Result<(), String> {
    let Some(index) = placeholder.index else {
        return Err(format!(
            "invalid placeholder index '?{}'\nhelp: the index does not fit in usize",
            placeholder.digits
        ));
    };
    if index >= arg_count {
        let help = match arg_count {
            0 => "no arguments were given".to_string(),
            1 => "the only valid placeholder is ?0".to_string(),
            n => format!("valid placeholders are ?0 through ?{}", n - 1),
        };
        return Err(format!(
            "placeholder ?{index} is out of range: {arg_count} arguments given\nhelp: {help}"
        ));
    }
    Ok(())
}
