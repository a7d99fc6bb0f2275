//! Variable discovery and substitution over trees.
//!
//! Resolution never mutates: every node returns either itself, borrowed,
//! when nothing below it changed, or a freshly built copy. Callers that only
//! need to know whether anything changed can match on the [`Cow`].

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::value::{DeclarationMap, Value, Values};

/// A node that may hold variables.
pub trait Resolve: Clone {
    /// Substitutes every variable whose name appears in `values`.
    ///
    /// Returns `Cow::Borrowed(self)` when nothing changed.
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self>;

    /// Adds the name of every variable reachable from this node to `out`.
    fn collect_vars(&self, out: &mut BTreeSet<String>);

    /// Names of every variable reachable from this node, at any depth.
    fn vars(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_vars(&mut out);
        out
    }

    /// Owned form of [`Resolve::resolve`].
    fn set_vars(&self, values: &Values) -> Self {
        self.resolve(values).into_owned()
    }
}

/// `Some` with the new value when `cow` is owned.
pub(crate) fn changed<T: Clone>(cow: Cow<'_, T>) -> Option<T> {
    match cow {
        Cow::Owned(value) => Some(value),
        Cow::Borrowed(_) => None,
    }
}

/// Resolves each item, allocating only once the first item changes.
pub(crate) fn resolve_slice<T: Resolve>(items: &[T], values: &Values) -> Option<Vec<T>> {
    let mut out: Option<Vec<T>> = None;
    for (index, item) in items.iter().enumerate() {
        match item.resolve(values) {
            Cow::Owned(new) => out
                .get_or_insert_with(|| items[..index].to_vec())
                .push(new),
            Cow::Borrowed(same) => {
                if let Some(out) = out.as_mut() {
                    out.push(same.clone());
                }
            }
        }
    }
    out
}

pub(crate) fn resolve_map(map: &DeclarationMap, values: &Values) -> Option<DeclarationMap> {
    let mut out: Option<DeclarationMap> = None;
    for (index, (key, value)) in map.iter().enumerate() {
        match value.resolve(values) {
            Cow::Owned(new) => {
                out.get_or_insert_with(|| {
                    map.iter()
                        .take(index)
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect()
                })
                .insert(key.clone(), new);
            }
            Cow::Borrowed(same) => {
                if let Some(out) = out.as_mut() {
                    out.insert(key.clone(), same.clone());
                }
            }
        }
    }
    out
}

impl Resolve for Value {
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self> {
        let resolved = match self {
            Value::Var(var) => changed(var.resolve(values)).map(Value::Var),
            Value::Element(element) => {
                changed(element.as_ref().resolve(values)).map(|e| Value::Element(Box::new(e)))
            }
            Value::Css(css) => changed(css.resolve(values)).map(Value::Css),
            Value::List(items) => resolve_slice(items, values).map(Value::List),
            Value::Map(map) => resolve_map(map, values).map(Value::Map),
            Value::Str(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_) => None,
        };

        match resolved {
            Some(value) => Cow::Owned(value),
            None => Cow::Borrowed(self),
        }
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Value::Var(var) => var.collect_vars(out),
            Value::Element(element) => element.collect_vars(out),
            Value::Css(css) => css.collect_vars(out),
            Value::List(items) => items.iter().for_each(|item| item.collect_vars(out)),
            Value::Map(map) => map.values().for_each(|value| value.collect_vars(out)),
            Value::Str(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Var;

    #[test]
    fn unchanged_slice_does_not_allocate() {
        let items = vec![Value::from("a"), Value::from(1)];
        assert!(resolve_slice(&items, &Values::new()).is_none());
    }

    #[test]
    fn changed_slice_keeps_untouched_items() {
        let items = vec![Value::from("a"), Value::from(Var::new("b")), Value::from("c")];
        let values = Values::from([("b".to_string(), Value::from("x"))]);

        let resolved = resolve_slice(&items, &values).unwrap();
        assert_eq!(resolved[0], Value::from("a"));
        assert_eq!(resolved[1], Value::from(Var::with_default("b", "x")));
        assert_eq!(resolved[2], Value::from("c"));
    }

    #[test]
    fn map_resolution_preserves_order() {
        let mut map = DeclarationMap::new();
        map.insert("first".into(), Var::new("one").into());
        map.insert("second".into(), "plain".into());
        let values = Values::from([("one".to_string(), Value::from(1))]);

        let resolved = resolve_map(&map, &values).unwrap();
        let keys: Vec<_> = resolved.keys().cloned().collect();
        assert_eq!(keys, vec!["first", "second"]);
    }
}
