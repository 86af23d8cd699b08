use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};

use serde_json::Value as JsonValue;

use crate::binder::FormatError;

/// A runtime value bound to a query parameter.
///
/// Values carry no classification of their own. The declared
/// [`ParamKind`](super::ParamKind) of the parameter decides how a value is
/// rendered, and the formatter rejects values that do not conform to it.
///
/// # Example
///
/// ```
/// use strquery::Value;
///
/// let age: Value = 30.into();
/// let name: Value = "Luke".into();
/// let ages: Value = vec![30, 35, 40].into();
/// assert_eq!(ages, Value::List(vec![30.into(), 35.into(), 40.into()]));
/// # let _ = (age, name);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value. Never bindable.
    Null,

    /// A boolean.
    Bool(bool),

    /// An integer, wide enough for every primitive integer type but `u128`.
    Integer(i128),

    /// A floating-point number.
    Float(f64),

    /// A string.
    String(String),

    /// An ordered collection.
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Convert a JSON value. Objects have no query rendering and are rejected.
    pub fn from_json(json: &JsonValue) -> Result<Value, FormatError> {
        Ok(match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Integer(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::List(
                items
                    .iter()
                    .map(Value::from_json)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(_) => return Err(FormatError::Unsupported { found: "object" }),
        })
    }
}

// From implementations for common types

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i128::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<f32> for Value {
    /// Widens through the shortest decimal text of `n`, so `0.1_f32` stays
    /// `0.1` instead of the nearest double to it.
    fn from(n: f32) -> Self {
        Value::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<VecDeque<T>> for Value {
    fn from(items: VecDeque<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(items: BTreeSet<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
