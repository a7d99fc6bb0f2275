//! Translation functions for `transform`.
//!
//! ```rust
//! use chope_functions::transform::{translate, translate_x};
//! use chope_functions::units::PX;
//!
//! assert_eq!(translate_x(PX / 4).render(), "translateX(4px)");
//! assert_eq!(translate("10%", Some(0.into())).render(), "translate(10%, 0)");
//! ```

use crate::error::ValidationError;
use crate::function::{Arg, Function};

pub fn translate_x(length: impl Into<Arg>) -> Function {
    Function::named("translateX").arg(length)
}

pub fn translate_y(length: impl Into<Arg>) -> Function {
    Function::named("translateY").arg(length)
}

pub fn translate_z(length: impl Into<Arg>) -> Function {
    Function::named("translateZ").arg(length)
}

pub fn translate(x: impl Into<Arg>, y: Option<Arg>) -> Function {
    let function = Function::named("translate").arg(x);
    match y {
        Some(y) => function.arg(y),
        None => function,
    }
}

/// `translate3d(tx)` or `translate3d(tx, ty, tz)`. `tz` cannot be a percentage.
pub fn translate3d(
    tx: impl Into<Arg>,
    ty: Option<Arg>,
    tz: Option<Arg>,
) -> Result<Function, ValidationError> {
    let function = Function::named("translate3d").arg(tx);
    match (ty, tz) {
        (None, None) => Ok(function),
        (Some(_), Some(tz)) if tz.text_contains("%") => Err(ValidationError::invalid(
            "translate3d",
            "tz cannot be a percentage",
        )),
        (Some(ty), Some(tz)) => Ok(function.arg(ty).arg(tz)),
        _ => Err(ValidationError::invalid(
            "translate3d",
            "ty and tz must be both given or both omitted",
        )),
    }
}
