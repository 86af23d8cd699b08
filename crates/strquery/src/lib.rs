pub mod binder;
pub mod parser;
pub mod types;

pub use binder::{
    BindError, DefinitionError, DefinitionWarning, FormatError, QueryMethod,
    QueryMethodDefinition, QueryRegistry, RepositoryDefinition, bind, bind_str,
    compute_suggestions, format_value,
};
pub use parser::{ParseError, Segment, Template, parse_template};
pub use types::{BoundArgument, ElementKind, ParamKind, QueryElement, QueryParam, Value};

// Re-export the query! macro
pub use strquery_macros::query;

/// Creates a `Vec<BoundArgument>` from typed values.
///
/// Each value's declared kind comes from its static type via
/// [`QueryParam`], so `30` binds as a scalar and `"Luke"` as a string.
///
/// # Example
///
/// ```
/// use strquery::{ParamKind, args};
///
/// let a = args![30, "Luke", vec![1, 2]];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[0].kind, ParamKind::Scalar);
/// assert_eq!(a[1].kind, ParamKind::String);
/// assert_eq!(a[2].kind, ParamKind::ScalarCollection);
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::BoundArgument>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![
            $( $crate::QueryParam::bind_argument(&$value) ),+
        ]
    };
}
