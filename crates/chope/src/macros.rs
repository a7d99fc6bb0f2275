//! Declarative builders for children, substitution values and style sheets.

/// Builds [`Children`](crate::Children) from a mixed list of single children
/// and collections.
///
/// ```rust
/// use chope::{children, Element, Var};
///
/// let kids = children!["text", Var::new("content"), vec![Element::empty("b"), Element::empty("i")]];
/// assert_eq!(kids.len(), 4);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        $crate::Children::new()
    };
    ($($child:expr),+ $(,)?) => {
        $crate::Children::from(::std::vec![$($crate::Children::from($child)),+])
    };
}

/// Builds a [`Values`](crate::Values) substitution mapping.
///
/// ```rust
/// let values = chope::values! { "color" => "blue", "size" => 3 };
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! values {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut values = $crate::Values::new();
        $(
            values.insert(::std::string::String::from($name), $crate::Value::from($value));
        )*
        values
    }};
}

/// Builds a [`DeclarationMap`](crate::DeclarationMap). Keys may be
/// identifiers (`font_size`) or string literals (`"font-size"`).
#[macro_export]
macro_rules! declarations {
    ($($property:tt : $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::DeclarationMap::new();
        $(
            map.insert(
                ::std::string::String::from($crate::__property_name!($property)),
                $crate::Value::from($value),
            );
        )*
        map
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __property_name {
    ($name:ident) => {
        stringify!($name)
    };
    ($name:literal) => {
        $name
    };
}

/// Builds a [`Css`](crate::Css) sheet of rules with literal declarations.
///
/// ```rust
/// use chope::{css, Render};
///
/// let sheet = css!["h1" => { color: "red", font_size: "1.2rem" }];
/// assert_eq!(sheet.render(0).unwrap(), "h1 {color: red;font-size: 1.2rem;}");
/// ```
#[macro_export]
macro_rules! css {
    ($($name:expr => { $($body:tt)* }),* $(,)?) => {
        $crate::Css::new(::std::vec![
            $($crate::Rule::new($name, $crate::declarations! { $($body)* })),*
        ])
    };
}
