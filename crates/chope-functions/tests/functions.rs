//! Tests for units and style functions used inside trees.

use chope::{Attrs, Element, Render, Resolve, Value, Var, css, declarations, values};
use chope_functions::color::{hsl, hwb, rgb};
use chope_functions::shape::{circle, polygon};
use chope_functions::transform::{translate, translate3d};
use chope_functions::units::*;
use chope_functions::{Function, ValidationError};

#[test]
fn custom_function_renders_its_arguments() {
    let f = Function::new("test_func", [PX / 1]).arg(2).arg(3.0);
    assert_eq!(f.render(), "test_func(1px, 2, 3.0)");
}

#[test]
fn every_unit_suffix() {
    let rendered: Vec<String> = [CM, CH, EM, EX, IN, MM, PC, PERCENT, PT, PX, REM, VH, VMAX, VMIN, VW]
        .into_iter()
        .map(|unit| unit / 2)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "2cm", "2ch", "2em", "2ex", "2in", "2mm", "2pc", "2%", "2pt", "2px", "2rem", "2vh",
            "2vmax", "2vmin", "2vw",
        ]
    );
}

#[test]
fn functions_as_declaration_values() {
    let sheet = css![
        ".badge" => {
            background: hwb("90deg", "10%", "20%", Some(0.5.into())).unwrap(),
            transform: translate(PX / 2, Some((PX / 3).into())),
            clip_path: circle(PERCENT / 40, None, None).unwrap(),
        },
    ];

    insta::assert_snapshot!(sheet.render_default().unwrap(), @r"
    .badge {
      background: hwb(90deg, 10%, 20%, 0.5);
      transform: translate(2px, 3px);
      clip-path: circle(40%);
    }
    ");
}

#[test]
fn functions_as_variable_defaults() {
    let accent = Var::with_default("accent", rgb(0, 0, 0, None).unwrap());
    let button = Element::new("button", Attrs::new().attr("style", declarations! { color: accent }))
        .unwrap()
        .children("Go");

    assert_eq!(
        button.render(0).unwrap(),
        "<button style=\"color: rgb(0, 0, 0);\">Go</button>"
    );

    let themed = button.set_vars(&values! {
        "accent" => hsl(200, "50%", "50%", None).unwrap(),
    });
    assert_eq!(
        themed.render(0).unwrap(),
        "<button style=\"color: hsl(200, 50%, 50%);\">Go</button>"
    );
}

#[test]
fn function_converts_to_string_value() {
    let value = Value::from(polygon(Some("nonzero"), [(0, 0), (10, 0), (5, 5)]).unwrap());
    assert_eq!(value, Value::from("polygon(nonzero, 0 0, 10 0, 5 5)"));
}

#[test]
fn validation_errors_name_the_function() {
    let err = translate3d(1, Some(2.into()), Some((PERCENT / 5).into())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument for translate3d(): tz cannot be a percentage"
    );
    assert!(matches!(
        hsl("red", "1%", "1%", None),
        Err(ValidationError::InvalidArgument { function: "hsl", .. })
    ));
}
