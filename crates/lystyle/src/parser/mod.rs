//! Raw declaration block parsing.
//!
//! Some components carry pre-written CSS for a part of their look (icon
//! glyph sizing, injected font faces). [`parse_declarations`] turns such text
//! into a [`StyleObject`] so it goes through the same serializer, direction
//! mapping and caching as every other description.

use crate::error::{Result, StyleError};
use crate::types::StyleObject;

use nom::{
    IResult,
    bytes::complete::{is_not, take_while1},
    character::complete::{char, multispace0},
    combinator::opt,
    multi::many0,
    sequence::tuple,
};

/// Parses a property name (`font-size`, `--gap`, `WebkitAppearance`).
pub fn parse_property(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_single_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_property(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = is_not(";")(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, (property, value.trim())))
}

/// Parses `name: value;` pairs into a flat [`StyleObject`].
///
/// The last declaration may omit its semicolon. Anything that is not a
/// declaration, including nested blocks, is an
/// [`StyleError::InvalidDeclaration`].
///
/// ```rust
/// use lystyle::{StyleValue, parser::parse_declarations};
///
/// let object = parse_declarations("font-size: 24px; width: 1em").unwrap();
/// assert_eq!(object.get("width"), Some(&StyleValue::Str("1em".into())));
/// ```
pub fn parse_declarations(source: &str) -> Result<StyleObject> {
    let (remaining, pairs) = many0(parse_single_declaration)(source)
        .map_err(|e| StyleError::InvalidDeclaration(e.to_string()))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(StyleError::InvalidDeclaration(format!(
            "Unexpected tokens at end of declarations: {}",
            remaining
        )));
    }

    Ok(pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .fold(StyleObject::new(), |object, (property, value)| {
            object.with(property, value)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleValue;

    #[test]
    fn test_parse_property() {
        assert_eq!(parse_property("font-size: 1em"), Ok((": 1em", "font-size")));
        assert!(parse_property(": 1em").is_err());
    }

    #[test]
    fn test_values_keep_inner_spaces() {
        let object = parse_declarations("transition:  color 300ms ease-in ;").unwrap();
        assert_eq!(
            object.get("transition"),
            Some(&StyleValue::Str("color 300ms ease-in".into()))
        );
    }

    #[test]
    fn test_later_declarations_win() {
        let object = parse_declarations("color:red;color:blue").unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("color"), Some(&StyleValue::Str("blue".into())));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_declarations("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_nested_block_is_rejected() {
        let err = parse_declarations("color:red; &:hover { color: blue }").unwrap_err();
        assert!(matches!(err, StyleError::InvalidDeclaration(_)));
    }
}
