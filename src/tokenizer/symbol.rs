//! # Symbol Token Handling
//!
//! Operators and parentheses recognized in calculator expressions.
//!
//! Every symbol is a single glyph. The multiplication glyph is the lowercase
//! letter `x`; neither `*` nor `×` is recognized and both are skipped as noise.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use nom::{
    branch::alt,
    character::complete::char,
    combinator::{map, value},
    error::context,
};

use super::token::{ParserResult, Token};

/// Binary arithmetic operators.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Operator {
    /// Addition (`+`)
    #[strum(serialize = "+")]
    Add,
    /// Subtraction (`-`)
    #[strum(serialize = "-")]
    Subtract,
    /// Multiplication (`x`)
    #[strum(serialize = "x")]
    Multiply,
    /// Division (`/`)
    #[strum(serialize = "/")]
    Divide,
}

/// Grouping markers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Parenthesis {
    /// Opening group (`(`)
    #[strum(serialize = "(")]
    Opening,
    /// Closing group (`)`)
    #[strum(serialize = ")")]
    Closing,
}

/// Returns true for every glyph that maps to an [`Operator`] or [`Parenthesis`].
pub fn is_symbol_glyph(c: char) -> bool {
    matches!(c, '+' | '-' | 'x' | '/' | '(' | ')')
}

/// Parses a single operator glyph.
///
/// # Examples
///
/// ```
/// # use calclex::tokenizer::symbol::{parse_operator, Operator};
/// # use calclex::tokenizer::token::Token;
/// let (rest, token) = parse_operator("x5").unwrap();
/// assert_eq!(token, Token::Operator(Operator::Multiply));
/// assert_eq!(rest, "5");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<Token> {
    context(
        "operator",
        map(
            alt((
                value(Operator::Add, char('+')),
                value(Operator::Subtract, char('-')),
                value(Operator::Multiply, char('x')),
                value(Operator::Divide, char('/')),
            )),
            Token::Operator,
        ),
    )(input)
}

/// Parses a single parenthesis glyph.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_parenthesis(input: &str) -> ParserResult<Token> {
    context(
        "parenthesis",
        map(
            alt((
                value(Parenthesis::Opening, char('(')),
                value(Parenthesis::Closing, char(')')),
            )),
            Token::Parenthesis,
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_operators() {
        let test_cases = [
            ("+", Token::Operator(Operator::Add)),
            ("-", Token::Operator(Operator::Subtract)),
            ("x", Token::Operator(Operator::Multiply)),
            ("/", Token::Operator(Operator::Divide)),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, token) = parse_operator(input).unwrap();
            assert_eq!(token, *expected);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_parentheses() {
        let (rest, token) = parse_parenthesis("(1").unwrap();
        assert_eq!(token, Token::Parenthesis(Parenthesis::Opening));
        assert_eq!(rest, "1");

        let (rest, token) = parse_parenthesis(")").unwrap();
        assert_eq!(token, Token::Parenthesis(Parenthesis::Closing));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_other_multiplication_glyphs_rejected() {
        assert!(parse_operator("*").is_err());
        assert!(parse_operator("×").is_err());
        assert!(parse_operator("X").is_err());
    }

    // every glyph round-trips through strum and is known to is_symbol_glyph
    #[test]
    fn test_all_glyphs() {
        for op in Operator::iter() {
            let glyph = op.to_string();
            assert_eq!(Operator::from_str(&glyph).unwrap(), op);
            assert!(glyph.chars().all(is_symbol_glyph));
            let (rest, token) = parse_operator(&glyph).unwrap();
            assert_eq!(token, Token::Operator(op));
            assert_eq!(rest, "");
        }
        for paren in Parenthesis::iter() {
            let glyph = paren.as_ref();
            assert_eq!(Parenthesis::from_str(glyph).unwrap(), paren);
            assert!(glyph.chars().all(is_symbol_glyph));
        }
    }
}
