use super::{ParamKind, QueryParam, Value};

/// A runtime value paired with its declared kind, supplied to one binding.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgument {
    pub kind: ParamKind,
    pub value: Value,
}

impl BoundArgument {
    /// Pair a value with an explicit declared kind.
    pub fn new(kind: ParamKind, value: impl Into<Value>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Bind a typed parameter, taking its kind from the static type.
    pub fn of<T: QueryParam + ?Sized>(param: &T) -> Self {
        param.bind_argument()
    }

    /// A string-like scalar argument.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ParamKind::String, Value::String(value.into()))
    }

    /// A non-string scalar argument.
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::new(ParamKind::Scalar, value)
    }

    /// A collection of strings.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ParamKind::StringCollection,
            Value::List(
                values
                    .into_iter()
                    .map(|s| Value::String(s.into()))
                    .collect(),
            ),
        )
    }

    /// A collection of non-string scalars.
    pub fn scalars<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(
            ParamKind::ScalarCollection,
            Value::List(values.into_iter().map(Into::into).collect()),
        )
    }
}
