//! Static classification of Rust types as query parameters.

use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};

use super::{BoundArgument, ElementKind, ParamKind, Value};

/// A Rust type that can be bound to a query placeholder.
///
/// The declared [`ParamKind`] is an associated constant, so it is fixed by
/// the parameter's static type. Collections are only implemented over
/// [`QueryElement`] types, which makes nested collections a compile error.
///
/// # Example
///
/// ```
/// use strquery::{ParamKind, QueryParam};
///
/// assert_eq!(<i32 as QueryParam>::KIND, ParamKind::Scalar);
/// assert_eq!(<Vec<String> as QueryParam>::KIND, ParamKind::StringCollection);
/// assert_eq!(<&[u8] as QueryParam>::KIND, ParamKind::ScalarCollection);
/// ```
pub trait QueryParam {
    /// The declared kind of this type.
    const KIND: ParamKind;

    /// Convert to a runtime value.
    fn to_value(&self) -> Value;

    /// Pair the runtime value with the declared kind.
    fn bind_argument(&self) -> BoundArgument {
        BoundArgument::new(Self::KIND, self.to_value())
    }
}

/// A type that may appear as an element of a collection parameter.
///
/// Collections are not elements, so nested collections do not bind:
///
/// ```compile_fail
/// use strquery::QueryParam;
///
/// let nested: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
/// let _ = nested.bind_argument();
/// ```
pub trait QueryElement: QueryParam {
    const ELEMENT: ElementKind;
}

macro_rules! scalar_param {
    ($($t:ty),*) => {
        $(
            impl QueryParam for $t {
                const KIND: ParamKind = ParamKind::Scalar;

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }

            impl QueryElement for $t {
                const ELEMENT: ElementKind = ElementKind::Scalar;
            }
        )*
    };
}

scalar_param!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64, bool
);

macro_rules! string_param {
    ($($t:ty),*) => {
        $(
            impl QueryParam for $t {
                const KIND: ParamKind = ParamKind::String;

                fn to_value(&self) -> Value {
                    Value::String(self.to_string())
                }
            }

            impl QueryElement for $t {
                const ELEMENT: ElementKind = ElementKind::String;
            }
        )*
    };
}

string_param!(str, String, char, Cow<'_, str>);

impl<T: QueryParam + ?Sized> QueryParam for &T {
    const KIND: ParamKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: QueryElement + ?Sized> QueryElement for &T {
    const ELEMENT: ElementKind = T::ELEMENT;
}

/// `None` becomes [`Value::Null`], which the formatter refuses to bind.
impl<T: QueryParam> QueryParam for Option<T> {
    const KIND: ParamKind = T::KIND;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, QueryParam::to_value)
    }
}

impl<T: QueryElement> QueryElement for Option<T> {
    const ELEMENT: ElementKind = T::ELEMENT;
}

impl<T: QueryElement> QueryParam for [T] {
    const KIND: ParamKind = ParamKind::collection_of(T::ELEMENT);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(QueryParam::to_value).collect())
    }
}

impl<T: QueryElement, const N: usize> QueryParam for [T; N] {
    const KIND: ParamKind = ParamKind::collection_of(T::ELEMENT);

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: QueryElement> QueryParam for Vec<T> {
    const KIND: ParamKind = ParamKind::collection_of(T::ELEMENT);

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: QueryElement> QueryParam for VecDeque<T> {
    const KIND: ParamKind = ParamKind::collection_of(T::ELEMENT);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(QueryParam::to_value).collect())
    }
}

impl<T: QueryElement> QueryParam for BTreeSet<T> {
    const KIND: ParamKind = ParamKind::collection_of(T::ELEMENT);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(QueryParam::to_value).collect())
    }
}
