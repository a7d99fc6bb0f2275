//! Basic shapes for `clip-path` and `shape-outside`.

use crate::error::ValidationError;
use crate::function::{Arg, Function};

const FILL_RULES: [&str; 2] = ["nonzero", "evenodd"];

/// `circle(r)` or `circle(r at x y)`.
///
/// ```rust
/// use chope_functions::shape::circle;
///
/// assert_eq!(circle("50%", Some("0"), Some("0")).unwrap().render(), "circle(50% at 0 0)");
/// assert!(circle("50%", Some("0"), None).is_err());
/// ```
pub fn circle(
    radius: impl Into<Arg>,
    position_x: Option<&str>,
    position_y: Option<&str>,
) -> Result<Function, ValidationError> {
    let position = position("circle", position_x, position_y)?;
    Ok(Function::named("circle").arg(with_position(radius.into(), position)))
}

/// `ellipse(rx ry)` or `ellipse(rx ry at x y)`.
pub fn ellipse(
    radius_x: impl Into<Arg>,
    radius_y: impl Into<Arg>,
    position_x: Option<&str>,
    position_y: Option<&str>,
) -> Result<Function, ValidationError> {
    let position = position("ellipse", position_x, position_y)?;
    let radii = format!("{} {}", radius_x.into(), radius_y.into());
    Ok(Function::named("ellipse").arg(with_position(radii.into(), position)))
}

/// `polygon([fill-rule,] x y, x y, ...)`.
///
/// ```rust
/// use chope_functions::shape::polygon;
/// use chope_functions::units::PERCENT;
///
/// let triangle = polygon(None, [(PERCENT / 50, "0"), ("0".into(), "100%"), (PERCENT / 100, "100%")]);
/// assert_eq!(triangle.unwrap().render(), "polygon(50% 0, 0 100%, 100% 100%)");
/// ```
pub fn polygon<X, Y>(
    fill_rule: Option<&str>,
    points: impl IntoIterator<Item = (X, Y)>,
) -> Result<Function, ValidationError>
where
    X: Into<Arg>,
    Y: Into<Arg>,
{
    let mut function = with_fill_rule("polygon", fill_rule)?;
    let start = function.args().len();
    for (x, y) in points {
        function = function.arg(format!("{} {}", x.into(), y.into()));
    }
    if function.args().len() == start {
        return Err(ValidationError::invalid(
            "polygon",
            "at least one point is required",
        ));
    }
    Ok(function)
}

/// `path([fill-rule,] data)`; `data` is emitted verbatim.
pub fn path(fill_rule: Option<&str>, data: &str) -> Result<Function, ValidationError> {
    Ok(with_fill_rule("path", fill_rule)?.arg(data))
}

fn position<'a>(
    function: &'static str,
    x: Option<&'a str>,
    y: Option<&'a str>,
) -> Result<Option<(&'a str, &'a str)>, ValidationError> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some((x, y))),
        (None, None) => Ok(None),
        _ => Err(ValidationError::invalid(
            function,
            "positions must be both given or both omitted",
        )),
    }
}

fn with_position(size: Arg, position: Option<(&str, &str)>) -> Arg {
    match position {
        Some((x, y)) => format!("{size} at {x} {y}").into(),
        None => size,
    }
}

fn with_fill_rule(
    function: &'static str,
    fill_rule: Option<&str>,
) -> Result<Function, ValidationError> {
    match fill_rule {
        None => Ok(Function::named(function)),
        Some(rule) if FILL_RULES.contains(&rule) => Ok(Function::named(function).arg(rule)),
        Some(rule) => Err(ValidationError::invalid(
            function,
            format!("fill rule must be \"nonzero\" or \"evenodd\", got \"{rule}\""),
        )),
    }
}
