//! Style rules and style sheets.
//!
//! - [`Rule`]: a selector with a block of `property: value;` declarations
//! - [`Css`]: an ordered sequence of rules, rendered in order
//!
//! ## Example
//!
//! ```rust
//! use chope::{css, Render};
//!
//! let sheet = css![
//!     "a" => { b: "c" },
//!     "d" => { e: "f" },
//! ];
//! assert_eq!(sheet.render(0).unwrap(), "a {b: c;}d {e: f;}");
//! ```

pub mod rule;
pub mod stylesheet;

pub use rule::{Declarations, Rule};
pub use stylesheet::Css;
