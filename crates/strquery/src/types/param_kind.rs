//! Declared parameter type classification.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a declared parameter is rendered at a placeholder site.
///
/// The kind belongs to the statically declared parameter type, not to the
/// runtime value. It is decided once when a query method is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    /// String-like scalar: inner quotes and backslashes are escaped.
    String,
    /// Non-string scalar (number, boolean): rendered as its literal form.
    Scalar,
    /// Collection of strings: `["a","b"]`.
    StringCollection,
    /// Collection of non-string scalars: `[1,2]`.
    ScalarCollection,
}

/// Classification of a single collection element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    String,
    Scalar,
}

impl ParamKind {
    /// All kinds, in declaration order.
    pub const ALL: [ParamKind; 4] = [
        ParamKind::String,
        ParamKind::Scalar,
        ParamKind::StringCollection,
        ParamKind::ScalarCollection,
    ];

    /// The kind of a collection of the given element kind.
    pub const fn collection_of(element: ElementKind) -> ParamKind {
        match element {
            ElementKind::String => ParamKind::StringCollection,
            ElementKind::Scalar => ParamKind::ScalarCollection,
        }
    }

    /// The element classification, for scalars the kind itself.
    pub const fn element_kind(self) -> ElementKind {
        match self {
            ParamKind::String | ParamKind::StringCollection => ElementKind::String,
            ParamKind::Scalar | ParamKind::ScalarCollection => ElementKind::Scalar,
        }
    }

    /// The name used in definition files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Scalar => "scalar",
            ParamKind::StringCollection => "string-collection",
            ParamKind::ScalarCollection => "scalar-collection",
        }
    }
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter kind '{name}', expected one of: string, scalar, string-collection, scalar-collection")]
pub struct UnknownKindError {
    pub name: String,
}

impl FromStr for ParamKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "str" => Ok(ParamKind::String),
            "scalar" | "number" | "bool" => Ok(ParamKind::Scalar),
            "string-collection" | "string-list" | "strings" => Ok(ParamKind::StringCollection),
            "scalar-collection" | "scalar-list" | "scalars" => Ok(ParamKind::ScalarCollection),
            _ => Err(UnknownKindError {
                name: s.to_string(),
            }),
        }
    }
}
