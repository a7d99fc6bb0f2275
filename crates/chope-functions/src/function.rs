//! CSS functional notation: `name(arg, arg, ...)`.

use std::fmt;

use chope::Value;
use chope::value::format_float;

/// One argument of a [`Function`].
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Arg {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True when the argument is text carrying `marker` somewhere.
    pub(crate) fn text_contains(&self, marker: &str) -> bool {
        self.as_text().is_some_and(|text| text.contains(marker))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(i) => write!(f, "{i}"),
            Arg::Float(x) => f.write_str(&format_float(*x)),
            Arg::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(value as f64)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

/// A named function call such as `rgb(0, 0, 0)` or `translateX(1px)`.
///
/// ```rust
/// use chope_functions::{Function, units::PX};
///
/// let f = Function::new("test_func", [PX / 1]).arg(2).arg(3.0);
/// assert_eq!(f.render(), "test_func(1px, 2, 3.0)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    name: String,
    args: Vec<Arg>,
}

impl Function {
    /// A function with no arguments yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn new<A: Into<Arg>>(name: impl Into<String>, args: impl IntoIterator<Item = A>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Str(function.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        assert_eq!(Function::named("none").render(), "none()");
    }

    #[test]
    fn arguments_keep_their_formatting() {
        let f = Function::new("f", [Arg::Int(-1), Arg::Float(0.25), Arg::Float(2.0)]);
        assert_eq!(f.to_string(), "f(-1, 0.25, 2.0)");
    }

    #[test]
    fn text_markers() {
        assert!(Arg::from("50%").text_contains("%"));
        assert!(!Arg::from(50).text_contains("%"));
    }
}
