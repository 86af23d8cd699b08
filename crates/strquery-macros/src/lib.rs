use proc_macro::TokenStream;

mod codegen;
mod input;
mod parse;
mod validate;

/// The query! macro for binding typed arguments into a query template.
///
/// The template literal is tokenized at compile time. Every placeholder
/// `?<index>` must reference one of the given arguments; out-of-range and
/// malformed indices are compile errors. Each argument's declared kind is
/// taken from its static type through `strquery::QueryParam`.
///
/// The expansion evaluates each argument expression exactly once and has
/// type `Result<String, ::strquery::BindError>`.
///
/// # Example
///
/// ```ignore
/// let age = 30;
/// let query = query!("{ 'term' : { 'age' : ?0 } }", age)?;
/// assert_eq!(query, "{ 'term' : { 'age' : 30 } }");
/// ```
#[proc_macro]
pub fn query(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    if let Err(e) = validate::validate(&input) {
        return e.to_compile_error().into();
    }

    codegen::codegen(&input).into()
}
