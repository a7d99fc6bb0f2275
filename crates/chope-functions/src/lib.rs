//! # Chope functions
//!
//! Length units and CSS functional notation for style values.
//!
//! Everything here renders to plain text, which a rule or attribute holds as
//! an ordinary string value:
//!
//! ```rust
//! use chope::{Render, css};
//! use chope_functions::color::rgb;
//! use chope_functions::units::{PX, REM};
//!
//! let sheet = css![
//!     "h1" => {
//!         font_size: REM / 1.5,
//!         color: rgb(10, 20, 30, None).unwrap(),
//!         outline: (PX / 1, "dotted"),
//!     },
//! ];
//! assert_eq!(
//!     sheet.render(0).unwrap(),
//!     "h1 {font-size: 1.5rem;color: rgb(10, 20, 30);outline: 1px dotted;}"
//! );
//! ```

pub mod color;
pub mod error;
pub mod function;
pub mod shape;
pub mod transform;
pub mod units;

pub use error::ValidationError;
pub use function::{Arg, Function};
pub use units::Unit;
