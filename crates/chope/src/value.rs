//! The closed set of values a tree can hold.
//!
//! Attribute values, declaration values, variable defaults and substitution
//! values are all [`Value`]s. Containers ([`Element`], [`Css`], declaration
//! mappings and lists) may nest further variables, which is what makes
//! resolution recursive.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::css::Css;
use crate::element::Element;
use crate::variable::Var;

/// Property name to value, in insertion order.
///
/// Equality ignores order, rendering follows it.
pub type DeclarationMap = IndexMap<String, Value>;

/// Variable name to substitution value.
pub type Values = HashMap<String, Value>;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Space-joined when rendered.
    List(Vec<Value>),
    /// Declarations, e.g. the value bound to a rule's declaration variable.
    Map(DeclarationMap),
    Var(Var),
    Element(Box<Element>),
    Css(Css),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Map(_) => "mapping",
            Value::Var(_) => "variable",
            Value::Element(_) => "element",
            Value::Css(_) => "style sheet",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Follows variable bindings down to the value they ultimately hold.
    ///
    /// Returns the last variable of the chain when it has no value.
    pub fn terminal(&self) -> Result<&Value, &Var> {
        let mut current = self;
        loop {
            match current {
                Value::Var(var) => match var.value() {
                    Some(inner) => current = inner,
                    None => return Err(var),
                },
                other => return Ok(other),
            }
        }
    }

    /// Text of a primitive value; `None` for containers and variables.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(format_float(*f)),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Integral floats keep a trailing `.0` so `3.0` does not collapse to `3`.
pub fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Values past `i64::MAX` saturate.
macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> From<($($name,)+)> for Value {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Value::List(vec![$($name.into()),+])
            }
        }
    };
}

impl_from_tuple!(A, B);
impl_from_tuple!(A, B, C);
impl_from_tuple!(A, B, C, D);

impl From<DeclarationMap> for Value {
    fn from(value: DeclarationMap) -> Self {
        Value::Map(value)
    }
}

impl From<Var> for Value {
    fn from(value: Var) -> Self {
        Value::Var(value)
    }
}

impl From<Element> for Value {
    fn from(value: Element) -> Self {
        Value::Element(Box::new(value))
    }
}

impl From<Css> for Value {
    fn from(value: Css) -> Self {
        Value::Css(value)
    }
}
