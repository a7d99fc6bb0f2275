use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::error::RenderError;
use crate::render::{Layout, Render, break_lines};
use crate::resolve::{Resolve, changed, resolve_map};
use crate::value::{DeclarationMap, Value, Values};
use crate::variable::Var;

/// The body of a rule: either the declarations themselves, or a variable
/// whose eventual value must be a declaration mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum Declarations {
    Map(DeclarationMap),
    Var(Var),
}

impl From<DeclarationMap> for Declarations {
    fn from(map: DeclarationMap) -> Self {
        Declarations::Map(map)
    }
}

impl From<Var> for Declarations {
    fn from(var: Var) -> Self {
        Declarations::Var(var)
    }
}

/// A named block of declarations, e.g. `h1 { color: red; }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    name: String,
    declarations: Declarations,
}

impl Rule {
    /// Creates a rule. Underscores in `name` become hyphens.
    pub fn new(name: impl Into<String>, declarations: impl Into<Declarations>) -> Self {
        Self {
            name: hyphenate(&name.into()),
            declarations: declarations.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Follows the declarations through any variable chain to the mapping.
    fn declaration_map(&self) -> Result<&DeclarationMap, RenderError> {
        let var = match &self.declarations {
            Declarations::Map(map) => return Ok(map),
            Declarations::Var(var) => var,
        };

        let unresolved = |variable: &Var| RenderError::UnresolvedDeclarations {
            rule: self.name.clone(),
            variable: variable.name().to_string(),
        };

        match var.value().ok_or_else(|| unresolved(var))?.terminal() {
            Ok(Value::Map(map)) => Ok(map),
            Ok(other) => Err(RenderError::InvalidDeclarations {
                rule: self.name.clone(),
                found: other.kind(),
            }),
            Err(last) => Err(unresolved(last)),
        }
    }
}

impl Render for Rule {
    fn render(&self, indent: i32) -> Result<String, RenderError> {
        let layout = Layout::new(indent);
        let declarations = self
            .declaration_map()
            .inspect_err(|err| log::debug!("cannot render rule: {err}"))?;

        let mut body = String::new();
        for (property, value) in declarations {
            let text = property_value(value).map_err(|err| err.in_rule(&self.name, property))?;
            body.push_str(&format!(
                "{}{}: {};{}",
                layout.pad,
                hyphenate(property),
                text,
                layout.newline
            ));
        }

        Ok(format!("{} {{{}{}}}", self.name, layout.newline, body))
    }
}

impl Resolve for Rule {
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self> {
        let declarations = match &self.declarations {
            Declarations::Map(map) => resolve_map(map, values).map(Declarations::Map),
            Declarations::Var(var) => changed(var.resolve(values)).map(Declarations::Var),
        };

        match declarations {
            Some(declarations) => Cow::Owned(Self {
                name: self.name.clone(),
                declarations,
            }),
            None => Cow::Borrowed(self),
        }
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match &self.declarations {
            Declarations::Map(map) => map.values().for_each(|value| value.collect_vars(out)),
            Declarations::Var(var) => var.collect_vars(out),
        }
    }
}

pub(crate) fn hyphenate(name: &str) -> String {
    name.replace('_', "-")
}

/// Why a value cannot be written after a `property:`.
#[derive(Debug)]
pub(crate) enum PropertyError {
    Unresolved(String),
    Invalid(&'static str),
}

impl PropertyError {
    pub fn in_rule(self, rule: &str, property: &str) -> RenderError {
        match self {
            PropertyError::Unresolved(variable) => RenderError::UnresolvedProperty {
                rule: rule.to_string(),
                property: property.to_string(),
                variable,
            },
            PropertyError::Invalid(found) => RenderError::InvalidPropertyValue {
                rule: rule.to_string(),
                property: property.to_string(),
                found,
            },
        }
    }
}

/// Text of a declaration value: primitives as-is, lists space-joined.
pub(crate) fn property_value(value: &Value) -> Result<String, PropertyError> {
    let bound = matches!(value, Value::Var(_));
    let value = value
        .terminal()
        .map_err(|var| PropertyError::Unresolved(var.name().to_string()))?;

    // Strings substituted through a variable get the same line breaks as
    // element text.
    if let (true, Value::Str(text)) = (bound, value) {
        return Ok(break_lines(text));
    }
    if let Some(text) = value.scalar_text() {
        return Ok(text);
    }

    match value {
        Value::List(items) => Ok(items
            .iter()
            .map(property_value)
            .collect::<Result<Vec<_>, _>>()?
            .join(" ")),
        other => Err(PropertyError::Invalid(other.kind())),
    }
}
