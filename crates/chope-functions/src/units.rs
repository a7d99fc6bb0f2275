//! CSS length units.
//!
//! Dividing a unit by a number yields the suffixed token:
//!
//! ```rust
//! use chope_functions::units::{EM, PX, REM};
//!
//! assert_eq!(REM / 1.2, "1.2rem");
//! assert_eq!(EM / 1, "1em");
//! assert_eq!(PX / -4, "-4px");
//! ```

use std::fmt::Display;
use std::ops::Div;

/// A length unit suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Unit(&'static str);

impl Unit {
    pub const fn new(suffix: &'static str) -> Self {
        Self(suffix)
    }

    pub fn suffix(&self) -> &'static str {
        self.0
    }
}

impl<T: Display> Div<T> for Unit {
    type Output = String;

    fn div(self, value: T) -> String {
        format!("{value}{}", self.0)
    }
}

pub const CM: Unit = Unit::new("cm");
pub const CH: Unit = Unit::new("ch");
pub const EM: Unit = Unit::new("em");
pub const EX: Unit = Unit::new("ex");
pub const IN: Unit = Unit::new("in");
pub const MM: Unit = Unit::new("mm");
pub const PC: Unit = Unit::new("pc");
pub const PERCENT: Unit = Unit::new("%");
pub const PT: Unit = Unit::new("pt");
pub const PX: Unit = Unit::new("px");
pub const REM: Unit = Unit::new("rem");
pub const VH: Unit = Unit::new("vh");
pub const VMAX: Unit = Unit::new("vmax");
pub const VMIN: Unit = Unit::new("vmin");
pub const VW: Unit = Unit::new("vw");
