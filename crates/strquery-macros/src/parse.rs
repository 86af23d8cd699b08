//! Parse implementations for converting TokenStream to macro AST.
//!
//! The template tokenizer follows the runtime grammar: `?` followed by one
//! or more ASCII digits is a placeholder, any other `?` is literal text.

use std::mem;

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, LitStr, Token};

use crate::input::{MacroInput, Placeholder, Segment, Template};

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let literal: LitStr = input.parse()?;
        let template = tokenize(&literal.value(), literal.span());

        let args = if input.is_empty() {
            Vec::new()
        } else {
            input.parse::<Token![,]>()?;
            let args: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(input)?;
            args.into_iter().collect()
        };

        Ok(MacroInput { template, args })
    }
}

/// Split template text into literal and placeholder segments.
pub fn tokenize(value: &str, span: Span) -> Template {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '?' && chars.peek().is_some_and(char::is_ascii_digit) {
            let mut digits = String::new();
            while let Some(d) = chars.next_if(char::is_ascii_digit) {
                digits.push(d);
            }
            if !text.is_empty() {
                segments.push(Segment::Literal(mem::take(&mut text)));
            }
            let index = digits.parse::<usize>().ok();
            segments.push(Segment::Placeholder(Placeholder { digits, index }));
        } else {
            text.push(c);
        }
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text));
    }

    Template { segments, span }
}
