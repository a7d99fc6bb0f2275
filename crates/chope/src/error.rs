//! Error types for building and rendering markup trees.
//!
//! Construction problems surface as [`BuildError`] the moment an element is
//! built; problems that only show up once variables are followed to their
//! values surface as [`RenderError`] from `render`.

use thiserror::Error;

/// Errors raised while constructing an element.
///
/// # Examples
///
/// ```rust
/// use chope::{Attrs, BuildError, Element};
///
/// let result = Element::new("div", Attrs::new().selector("#id").attr("id", "di"));
/// assert!(matches!(result, Err(BuildError::DuplicateAttribute { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The same attribute was supplied through more than one channel.
    #[error("{name} declared twice: {first} and {second}")]
    DuplicateAttribute {
        name: String,
        first: String,
        second: String,
    },

    /// The selector was not of the form `#id.class1.class2`.
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),

    /// A flat attribute list ended with a name that has no value.
    #[error("attribute {0:?} has no value")]
    DanglingAttribute(String),

    /// A name slot of a flat attribute list did not hold a string.
    #[error("attribute name must be a string, found {0}")]
    AttributeName(String),
}

/// Errors raised while rendering a tree to text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A rule's declarations are bound to a variable that has no value.
    #[error("declarations of rule '{rule}' are bound to unresolved variable '{variable}'")]
    UnresolvedDeclarations { rule: String, variable: String },

    /// A rule's declarations resolved to something other than a mapping.
    #[error("invalid declarations in rule '{rule}': expected a mapping, found {found}")]
    InvalidDeclarations { rule: String, found: &'static str },

    /// A property value cannot be written into a declaration.
    #[error("invalid value for '{property}' in rule '{rule}': found {found}")]
    InvalidPropertyValue {
        rule: String,
        property: String,
        found: &'static str,
    },

    /// A property is bound to a variable that has no value.
    #[error("'{property}' in rule '{rule}' is bound to unresolved variable '{variable}'")]
    UnresolvedProperty {
        rule: String,
        property: String,
        variable: String,
    },

    /// An element attribute or child is bound to a variable with no value.
    #[error("unresolved variable '{name}'")]
    UnresolvedVariable { name: String },
}

/// Any error produced by this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChopeError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ChopeError>;
