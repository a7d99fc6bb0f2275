use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::{preceded, tuple},
};

use crate::error::BuildError;

/// The id and classes named by a `#id.class1.class2` selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedSelector {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// Parses the `#id` part.
fn parse_id(input: &str) -> IResult<&str, &str> {
    preceded(
        char('#'),
        take_while1(|c: char| !c.is_whitespace() && c != '.' && c != '#'),
    )(input)
}

/// Parses the `.class1.class2` part as a single run.
fn parse_classes(input: &str) -> IResult<&str, &str> {
    preceded(
        char('.'),
        take_while1(|c: char| !c.is_whitespace() && c != '#'),
    )(input)
}

/// Parses an element selector. Both parts are optional, so `""` is valid and
/// names nothing.
pub fn parse_selector(input: &str) -> Result<ParsedSelector, BuildError> {
    let (_, (id, classes)) = all_consuming(tuple((opt(parse_id), opt(parse_classes))))(
        input.trim(),
    )
    .map_err(|_| BuildError::InvalidSelector(input.to_string()))?;

    Ok(ParsedSelector {
        id: id.map(str::to_string),
        classes: classes
            .map(|run| {
                run.split('.')
                    .filter(|class| !class.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    })
}
