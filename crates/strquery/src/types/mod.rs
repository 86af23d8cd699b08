mod bound;
mod param;
mod param_kind;
mod value;

pub use bound::BoundArgument;
pub use param::{QueryElement, QueryParam};
pub use param_kind::{ElementKind, ParamKind, UnknownKindError};
pub use value::Value;
