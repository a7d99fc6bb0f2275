//! Color functions.
//!
//! ```rust
//! use chope_functions::color::{hsl, rgb};
//!
//! assert_eq!(rgb(255, 0, 0, None).unwrap().render(), "rgb(255, 0, 0)");
//! assert_eq!(
//!     hsl("120deg", "50%", "25%", Some("40%".into())).unwrap().render(),
//!     "hsl(120deg, 50%, 25%, 40%)"
//! );
//! ```

use crate::error::ValidationError;
use crate::function::{Arg, Function};

const ANGLE_UNITS: [&str; 4] = ["deg", "rad", "grad", "turn"];

pub fn rgb(
    red: impl Into<Arg>,
    green: impl Into<Arg>,
    blue: impl Into<Arg>,
    alpha: Option<Arg>,
) -> Result<Function, ValidationError> {
    check_alpha("rgb", alpha.as_ref())?;
    Ok(with_alpha(
        Function::named("rgb").arg(red).arg(green).arg(blue),
        alpha,
    ))
}

pub fn hsl(
    hue: impl Into<Arg>,
    saturation: &str,
    lightness: &str,
    alpha: Option<Arg>,
) -> Result<Function, ValidationError> {
    let hue = hue.into();
    check_hue("hsl", &hue)?;
    check_percentage("hsl", "saturation", saturation)?;
    check_percentage("hsl", "lightness", lightness)?;
    check_alpha("hsl", alpha.as_ref())?;
    Ok(with_alpha(
        Function::new("hsl", [hue, saturation.into(), lightness.into()]),
        alpha,
    ))
}

pub fn hwb(
    hue: impl Into<Arg>,
    whiteness: &str,
    blackness: &str,
    alpha: Option<Arg>,
) -> Result<Function, ValidationError> {
    let hue = hue.into();
    check_hue("hwb", &hue)?;
    check_percentage("hwb", "whiteness", whiteness)?;
    check_percentage("hwb", "blackness", blackness)?;
    check_alpha("hwb", alpha.as_ref())?;
    Ok(with_alpha(
        Function::new("hwb", [hue, whiteness.into(), blackness.into()]),
        alpha,
    ))
}

fn with_alpha(function: Function, alpha: Option<Arg>) -> Function {
    match alpha {
        Some(alpha) => function.arg(alpha),
        None => function,
    }
}

fn check_hue(function: &'static str, hue: &Arg) -> Result<(), ValidationError> {
    match hue.as_text() {
        Some(text) if !ANGLE_UNITS.iter().any(|unit| text.contains(unit)) => Err(
            ValidationError::invalid(function, "hue must be a number or an angle"),
        ),
        _ => Ok(()),
    }
}

fn check_percentage(
    function: &'static str,
    field: &str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.contains('%') {
        Ok(())
    } else {
        Err(ValidationError::invalid(
            function,
            format!("{field} must be a percentage"),
        ))
    }
}

fn check_alpha(function: &'static str, alpha: Option<&Arg>) -> Result<(), ValidationError> {
    match alpha {
        Some(alpha) if alpha.as_text().is_some() && !alpha.text_contains("%") => Err(
            ValidationError::invalid(function, "alpha must be a number or a percentage"),
        ),
        _ => Ok(()),
    }
}
