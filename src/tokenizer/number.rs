//! # Number Token Handling
//!
//! A number is a run of ASCII digits holding at most one decimal point:
//!
//! ```text
//! number := digit+ ('.' digit*)?
//!         | '.' digit+
//! ```
//!
//! A run ends right before a second decimal point, so `1.2.3` yields `1.2`
//! followed by a fresh run `.3`. A decimal point with no adjacent digit is not
//! a number at all and is left to the noise recognizer.
//!
//! Signs are never part of a number. A leading `-` is always a separate
//! [`Operator::Subtract`](super::symbol::Operator::Subtract) token.

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1},
    combinator::{map, map_res, opt, recognize},
    error::context,
    sequence::pair,
};

use super::token::{ParserResult, Token};

/// Returns true for characters that may appear inside a number run.
pub fn is_number_glyph(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

#[tracing::instrument(level = "debug", skip(input))]
fn recognize_run(input: &str) -> ParserResult<&str> {
    context(
        "number run",
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    )(input)
}

/// Parses a number run into a [`Token::Number`].
///
/// # Examples
///
/// ```
/// # use calclex::tokenizer::number::parse_number;
/// # use calclex::tokenizer::token::Token;
/// let (rest, token) = parse_number("4.55-0.12").unwrap();
/// assert_eq!(token, Token::Number(4.55));
/// assert_eq!(rest, "-0.12");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<Token> {
    context(
        "number",
        map(
            map_res(recognize_run, |run: &str| run.parse::<f64>()),
            Token::Number,
        ),
    )(input)
}
