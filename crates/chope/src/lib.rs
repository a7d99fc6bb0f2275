//! # Chope - markup and style sheet builder
//!
//! Build element and style-sheet trees in memory, leave named placeholders
//! ([`Var`]) in them, substitute values later and render the result to
//! indented text.
//!
//! The workflow has two passes:
//!
//! 1. **Resolve**: [`Resolve::vars`] lists the placeholder names in a tree,
//!    and [`Resolve::resolve`] returns a tree with the supplied values
//!    substituted. Nodes that did not change are returned as-is.
//! 2. **Render**: [`Render::render`] serializes the tree. It fails if a
//!    variable that is still needed has neither a supplied value nor a
//!    default.
//!
//! ## Quick Start
//!
//! ```rust
//! use chope::{children, css, values, Attrs, Element, Render, Resolve, Var};
//!
//! let page = Element::new("main", Attrs::new().selector("#page"))
//!     .unwrap()
//!     .children(children![
//!         css!["h1" => { color: Var::with_default("accent", "red") }],
//!         Element::empty("h1").children(Var::new("title")),
//!     ]);
//!
//! assert_eq!(
//!     page.vars().into_iter().collect::<Vec<_>>(),
//!     vec!["accent", "title"]
//! );
//!
//! let resolved = page.set_vars(&values! { "title" => "Hello" });
//! assert_eq!(
//!     resolved.render(0).unwrap(),
//!     r#"<main id="page">h1 {color: red;}<h1>Hello</h1></main>"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`variable`]: named placeholders
//! - [`css`]: rules and style sheets
//! - [`element`]: elements, attribute channels and children
//! - [`resolve`]: variable discovery and substitution
//! - [`render`]: indentation rules shared by every renderer
//! - [`error`]: construction and render errors

pub mod css;
pub mod element;
pub mod error;
pub mod macros;
pub mod render;
pub mod resolve;
pub mod value;
pub mod variable;

pub use css::{Css, Declarations, Rule};
pub use element::{Attrs, Children, Element, Node};
pub use error::{BuildError, ChopeError, RenderError, Result};
pub use render::{DEFAULT_INDENT, LINE_BREAK, Render};
pub use resolve::Resolve;
pub use value::{DeclarationMap, Value, Values};
pub use variable::Var;
