use crate::element::selector::parse_selector;
use crate::error::BuildError;
use crate::value::{DeclarationMap, Value};

/// Attribute name that sets the element id.
pub const ID: &str = "id";

/// Attribute names that add classes. `class_` is accepted for callers that
/// generate names from identifiers.
pub const CLASS_NAMES: [&str; 2] = ["class", "class_"];

/// Construction inputs for an [`Element`](crate::Element).
///
/// Attributes arrive through three channels, applied in this order:
///
/// 1. a selector, `#id.class1.class2`
/// 2. a flat list alternating names and values
/// 3. named attributes
///
/// Classes from every channel are concatenated. The id, and any other
/// attribute, may come from one channel only; a second source is a
/// [`BuildError::DuplicateAttribute`].
///
/// ```rust
/// use chope::{Attrs, Element, Render};
///
/// let link = Element::new(
///     "a",
///     Attrs::new()
///         .selector("#home.nav")
///         .pairs(["href", "/"])
///         .class("active"),
/// )
/// .unwrap()
/// .children("Home");
///
/// assert_eq!(
///     link.render(0).unwrap(),
///     r#"<a id="home" class="nav active" href="/">Home</a>"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs {
    selector: Option<String>,
    pairs: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Appends to the flat `name, value, name, value, ...` list.
    pub fn pairs<I, T>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.pairs.extend(pairs.into_iter().map(Into::into));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }

    pub fn id(self, id: impl Into<Value>) -> Self {
        self.attr(ID, id)
    }

    pub fn class(self, classes: impl Into<Value>) -> Self {
        self.attr(CLASS_NAMES[0], classes)
    }

    /// Merges the channels, rejecting conflicting sources.
    pub(crate) fn into_parts(self) -> Result<Parts, BuildError> {
        let mut merger = Merger::default();

        if let Some(selector) = &self.selector {
            let parsed = parse_selector(selector)?;
            if let Some(id) = parsed.id {
                merger.id = Some((format!("#{id}"), Value::Str(id)));
            }
            merger.classes.push(Value::Str(parsed.classes.join(" ")));
        }

        let mut pairs = self.pairs.into_iter();
        while let Some(name) = pairs.next() {
            let name = match name {
                Value::Str(name) => name,
                other => return Err(BuildError::AttributeName(other.kind().to_string())),
            };
            let value = pairs
                .next()
                .ok_or_else(|| BuildError::DanglingAttribute(name.clone()))?;
            merger.assign(name, value)?;
        }

        for (name, value) in self.named {
            merger.assign(name, value)?;
        }

        Ok(merger.finish())
    }
}

/// Id, classes and remaining attributes after merging.
#[derive(Debug, Default)]
pub(crate) struct Parts {
    pub id: Option<Value>,
    pub classes: Option<Value>,
    pub attributes: DeclarationMap,
}

#[derive(Default)]
struct Merger {
    /// The id with how it was written, for conflict messages.
    id: Option<(String, Value)>,
    classes: Vec<Value>,
    attributes: DeclarationMap,
}

impl Merger {
    fn assign(&mut self, name: String, value: Value) -> Result<(), BuildError> {
        if name == ID {
            if matches!(&value, Value::Str(id) if id.is_empty()) {
                return Ok(());
            }
            let shown = describe(&name, &value);
            if let Some((first, _)) = &self.id {
                return Err(BuildError::DuplicateAttribute {
                    name,
                    first: first.clone(),
                    second: shown,
                });
            }
            self.id = Some((shown, value));
        } else if CLASS_NAMES.contains(&name.as_str()) {
            self.classes.push(value);
        } else if let Some(existing) = self.attributes.get(&name) {
            return Err(BuildError::DuplicateAttribute {
                first: describe(&name, existing),
                second: describe(&name, &value),
                name,
            });
        } else {
            self.attributes.insert(name, value);
        }
        Ok(())
    }

    fn finish(self) -> Parts {
        Parts {
            id: self.id.map(|(_, value)| value),
            classes: merge_classes(self.classes),
            attributes: self.attributes,
        }
    }
}

/// Joins plain class strings; keeps variable-valued classes as list members.
fn merge_classes(sources: Vec<Value>) -> Option<Value> {
    let mut sources: Vec<Value> = sources
        .into_iter()
        .filter(|value| !matches!(value, Value::Str(s) if s.trim().is_empty()))
        .collect();

    if sources.iter().all(|value| matches!(value, Value::Str(_))) {
        let joined = sources
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        return (!joined.is_empty()).then_some(Value::Str(joined));
    }

    if sources.len() == 1 {
        return sources.pop();
    }
    Some(Value::List(sources))
}

/// How an attribute was written, e.g. `id="main"` or `id=$page-id`.
fn describe(name: &str, value: &Value) -> String {
    match value {
        Value::Str(text) => format!("{name}=\"{text}\""),
        Value::Var(var) => format!("{name}=${}", var.name()),
        other => match other.scalar_text() {
            Some(text) => format!("{name}={text}"),
            None => format!("{name}=<{}>", other.kind()),
        },
    }
}
