//! Named placeholders.
//!
//! A [`Var`] stands in for a value that is supplied later through
//! [`Resolve::resolve`]. Its default may itself be another variable, which
//! lets callers layer fallbacks:
//!
//! ```rust
//! use chope::{Resolve, Value, Values, Var};
//!
//! let size = Var::with_default("size", Var::with_default("size_nested", "10px"));
//! let values = Values::from([("size_nested".to_string(), Value::from("5px"))]);
//!
//! let resolved = size.set_vars(&values);
//! assert_eq!(resolved.name(), "size");
//! assert_eq!(Value::from(resolved).terminal(), Ok(&Value::from("5px")));
//! ```

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::resolve::Resolve;
use crate::value::{Value, Values};

/// A named placeholder with an optional default.
///
/// Equality is structural: same name, same value.
#[derive(Clone, Debug, PartialEq)]
pub struct Var {
    name: String,
    value: Option<Box<Value>>,
}

impl Var {
    /// A required variable. Rendering fails until a value is supplied.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A variable that falls back to `value` when no substitution is given.
    pub fn with_default(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(Box::new(value.into())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value: the default, or the substituted value once resolved.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }
}

impl Resolve for Var {
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self> {
        if let Some(supplied) = values.get(&self.name) {
            if self.value() == Some(supplied) {
                return Cow::Borrowed(self);
            }
            log::trace!("variable '{}' bound to {}", self.name, supplied.kind());
            return Cow::Owned(Var::with_default(self.name.clone(), supplied.clone()));
        }

        let Some(current) = self.value() else {
            return Cow::Borrowed(self);
        };

        match current.resolve(values) {
            Cow::Borrowed(_) => Cow::Borrowed(self),
            Cow::Owned(nested) => Cow::Owned(Var::with_default(self.name.clone(), nested)),
        }
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        out.insert(self.name.clone());
        if let Some(value) = self.value() {
            value.collect_vars(out);
        }
    }
}
