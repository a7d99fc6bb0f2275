//! Markup elements.
//!
//! An [`Element`] is a tag name, an optional id, classes, attributes and an
//! ordered list of children ([`Node`]s: text, elements, style sheets or
//! variables). Elements are plain values: each one owns its children, and
//! resolution builds new elements instead of editing existing ones.
//!
//! ## Example
//!
//! ```rust
//! use chope::{children, Attrs, Element, Render};
//!
//! let page = Element::new("div", Attrs::new().selector(".card").attr("hidden", true))
//!     .unwrap()
//!     .children(children![
//!         "text",
//!         Element::empty("b").children("bold"),
//!     ]);
//!
//! assert_eq!(
//!     page.render(2).unwrap(),
//!     "<div class=\"card\" hidden>\n  text\n  <b>\n    bold\n  </b>\n</div>"
//! );
//! ```

pub mod attrs;
pub mod children;
pub mod selector;

use std::borrow::Cow;
use std::collections::BTreeSet;

pub use attrs::Attrs;
pub use children::{Children, Node};

use crate::css::rule::{PropertyError, hyphenate, property_value};
use crate::error::{BuildError, RenderError};
use crate::render::{Layout, Render, break_lines, quote};
use crate::resolve::{Resolve, changed, resolve_map};
use crate::value::{DeclarationMap, Value, Values};
use crate::variable::Var;

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<Value>,
    classes: Option<Value>,
    attributes: DeclarationMap,
    children: Vec<Node>,
}

impl Element {
    /// Builds an element, merging the attribute channels of `attrs`.
    pub fn new(tag: impl Into<String>, attrs: Attrs) -> Result<Self, BuildError> {
        let parts = attrs.into_parts()?;
        Ok(Self {
            tag: tag.into(),
            id: parts.id,
            classes: parts.classes,
            attributes: parts.attributes,
            children: Vec::new(),
        })
    }

    /// An element with no attributes.
    pub fn empty(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: None,
            attributes: DeclarationMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    pub fn classes(&self) -> Option<&Value> {
        self.classes.as_ref()
    }

    pub fn attributes(&self) -> &DeclarationMap {
        &self.attributes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Replaces the children.
    pub fn children(mut self, children: impl Into<Children>) -> Self {
        self.children = children.into().into_nodes();
        self
    }

    /// A copy with `attrs` applied over the current id, classes and
    /// attributes. Whatever `attrs` leaves out keeps its current value, and
    /// the children are carried over.
    ///
    /// ```rust
    /// use chope::{Attrs, Element, Render};
    ///
    /// let base = Element::new("p", Attrs::new().selector("#intro.lead").attr("lang", "en"))
    ///     .unwrap()
    ///     .children("hi");
    /// let patched = base.patch(Attrs::new().attr("lang", "fr")).unwrap();
    ///
    /// assert_eq!(
    ///     patched.render(0).unwrap(),
    ///     r#"<p id="intro" class="lead" lang="fr">hi</p>"#
    /// );
    /// ```
    pub fn patch(&self, attrs: Attrs) -> Result<Self, BuildError> {
        let parts = attrs.into_parts()?;
        let mut attributes = self.attributes.clone();
        attributes.extend(parts.attributes);

        Ok(Self {
            tag: self.tag.clone(),
            id: parts.id.or_else(|| self.id.clone()),
            classes: parts.classes.or_else(|| self.classes.clone()),
            attributes,
            children: self.children.clone(),
        })
    }
}

impl Render for Element {
    fn render(&self, indent: i32) -> Result<String, RenderError> {
        let layout = Layout::new(indent);

        let mut head = String::new();
        if let Some(id) = &self.id {
            push_attribute(&mut head, attrs::ID, id, indent)?;
        }
        if let Some(classes) = &self.classes {
            push_attribute(&mut head, attrs::CLASS_NAMES[0], classes, indent)?;
        }
        for (name, value) in &self.attributes {
            push_attribute(&mut head, name, value, indent)?;
        }

        let mut body = String::from(layout.newline);
        for child in &self.children {
            let line = match child {
                Node::Text(text) => break_lines(text),
                Node::Var(var) => {
                    let value = var.value().ok_or_else(|| unresolved(var))?;
                    inline_text(value, indent)?
                }
                Node::Element(element) => layout.nest(&element.render(indent)?),
                Node::Css(css) => layout.nest(&css.render(indent)?),
                Node::Style(map) => inline_style(map)?,
            };
            body.push_str(&layout.pad);
            body.push_str(&line);
            body.push_str(layout.newline);
        }

        Ok(format!("<{tag}{head}>{body}</{tag}>", tag = self.tag))
    }
}

impl Resolve for Element {
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self> {
        let resolve_optional = |value: &Option<Value>| {
            value
                .as_ref()
                .and_then(|value| changed(value.resolve(values)))
        };

        let id = resolve_optional(&self.id);
        let classes = resolve_optional(&self.classes);
        let attributes = resolve_map(&self.attributes, values);
        let children = children::resolve_children(&self.children, values);

        if id.is_none() && classes.is_none() && attributes.is_none() && children.is_none() {
            return Cow::Borrowed(self);
        }

        Cow::Owned(Self {
            tag: self.tag.clone(),
            id: id.or_else(|| self.id.clone()),
            classes: classes.or_else(|| self.classes.clone()),
            attributes: attributes.unwrap_or_else(|| self.attributes.clone()),
            children: children.unwrap_or_else(|| self.children.clone()),
        })
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        self.id.iter().for_each(|id| id.collect_vars(out));
        self.classes.iter().for_each(|classes| classes.collect_vars(out));
        self.attributes.values().for_each(|value| value.collect_vars(out));
        self.children.iter().for_each(|child| child.collect_vars(out));
    }
}

fn unresolved(var: &Var) -> RenderError {
    let err = RenderError::UnresolvedVariable {
        name: var.name().to_string(),
    };
    log::debug!("cannot render element: {err}");
    err
}

/// Appends ` name=value`, ` name` for `true`, nothing for `false`.
fn push_attribute(
    out: &mut String,
    name: &str,
    value: &Value,
    indent: i32,
) -> Result<(), RenderError> {
    match value.terminal().map_err(unresolved)? {
        Value::Bool(true) => {
            out.push(' ');
            out.push_str(name);
        }
        Value::Bool(false) => {}
        value @ (Value::Str(_) | Value::List(_) | Value::Map(_)) => {
            out.push_str(&format!(" {name}={}", quote(&inline_text(value, indent)?)));
        }
        value => {
            out.push_str(&format!(" {name}={}", inline_text(value, indent)?));
        }
    }
    Ok(())
}

/// Unquoted text of a value in body or attribute position.
fn inline_text(value: &Value, indent: i32) -> Result<String, RenderError> {
    let value = value.terminal().map_err(unresolved)?;
    let layout = Layout::new(indent);
    match value {
        Value::Str(text) => Ok(break_lines(text)),
        Value::List(items) => Ok(items
            .iter()
            .map(|item| inline_text(item, indent))
            .collect::<Result<Vec<_>, _>>()?
            .join(" ")),
        Value::Map(map) => inline_style(map),
        Value::Element(element) => Ok(layout.nest(&element.render(indent)?)),
        Value::Css(css) => Ok(layout.nest(&css.render(indent)?)),
        scalar => Ok(scalar.scalar_text().unwrap_or_default()),
    }
}

/// `prop: value; prop: value;` for mappings in attribute position.
fn inline_style(map: &DeclarationMap) -> Result<String, RenderError> {
    let mut declarations = Vec::with_capacity(map.len());
    for (property, value) in map {
        let text = property_value(value).map_err(|err| match err {
            PropertyError::Unresolved(name) => RenderError::UnresolvedVariable { name },
            PropertyError::Invalid(found) => RenderError::InvalidPropertyValue {
                rule: "inline style".to_string(),
                property: property.clone(),
                found,
            },
        })?;
        declarations.push(format!("{}: {};", hyphenate(property), text));
    }
    Ok(declarations.join(" "))
}
