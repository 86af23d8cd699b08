//! Query binding engine.
//!
//! This module turns parsed templates and typed arguments into query text:
//! the value formatter renders one argument per its declared kind, the
//! binder splices fragments into templates, and query methods and the
//! registry hold templates compiled once against their declared parameters.

mod bind;
mod error;
pub mod format;
mod method;
mod registry;

pub use bind::{bind, bind_str};
pub use error::{BindError, DefinitionError, DefinitionWarning, FormatError, compute_suggestions};
pub use format::{escape, format_argument, format_value};
pub use method::{QueryMethod, QueryMethodDefinition};
pub use registry::{QueryRegistry, RepositoryDefinition};
