//! Code generation for the query! macro.
//!
//! Expands to a block that builds the pre-tokenized template, binds each
//! argument once through `QueryParam`, and calls the runtime binder.

use proc_macro2::TokenStream;
use quote::quote;

use crate::input::{MacroInput, Segment};

/// Main code generation entry point.
pub fn codegen(input: &MacroInput) -> TokenStream {
    let segments: Vec<TokenStream> = input
        .template
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => quote! {
                ::strquery::Segment::Literal(::std::string::String::from(#text))
            },
            Segment::Placeholder(placeholder) => {
                // Validation guarantees the index parsed.
                let index = placeholder.index.unwrap_or_default();
                quote! { ::strquery::Segment::Placeholder(#index) }
            }
        })
        .collect();

    let arg_count = input.args.len();
    let bindings: Vec<TokenStream> = input
        .args
        .iter()
        .map(|arg| quote! { ::strquery::QueryParam::bind_argument(&(#arg)) })
        .collect();

    quote! {
        {
            let __strquery_template = ::strquery::Template::from_segments(
                ::std::vec![#(#segments),*]
            );
            let __strquery_args: [::strquery::BoundArgument; #arg_count] = [#(#bindings),*];
            ::strquery::bind(&__strquery_template, &__strquery_args)
        }
    }
}
