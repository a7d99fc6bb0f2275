//! Build HTML-like markup and CSS in Rust, leave named placeholders in the
//! tree, fill them in later and render to indented text.
//!
//! This crate re-exports [`chope`] and exposes the unit and style-function
//! helpers as [`functions`].
//!
//! ```rust
//! use chope_rs::prelude::*;
//!
//! let card = Element::new("div", Attrs::new().selector(".card"))
//!     .unwrap()
//!     .children(children![
//!         css![".card" => { padding: REM / 1, color: Var::with_default("fg", "black") }],
//!         Element::empty("p").children(Var::new("body")),
//!     ]);
//!
//! let html = card.set_vars(&values! { "body" => "Hi" }).render(0).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<div class="card">.card {padding: 1rem;color: black;}<p>Hi</p></div>"#
//! );
//! ```

pub use chope::*;
pub use chope_functions as functions;

/// Everything needed to build, resolve and render a tree.
pub mod prelude {
    pub use chope::{
        Attrs, Children, Css, Element, Render, Resolve, Rule, Value, Values, Var, children, css,
        declarations, values,
    };
    pub use chope_functions::Function;
    pub use chope_functions::units::*;
}
