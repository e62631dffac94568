//! # Noise Handling
//!
//! Anything outside the glyph alphabet is noise: whitespace, letters other
//! than `x`, punctuation, and any other code point. Noise is consumed and
//! produces no token.
//!
//! A decimal point that cannot start a number (no digit next to it) is also
//! consumed here, one character at a time.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::anychar,
    combinator::recognize,
    error::context,
};

use super::{number::is_number_glyph, symbol::is_symbol_glyph, token::ParserResult};

/// Returns true for characters that belong to the glyph alphabet.
pub fn is_recognized(c: char) -> bool {
    is_number_glyph(c) || is_symbol_glyph(c)
}

/// Consumes a maximal run of unrecognized characters, or a single stray
/// character that no other recognizer accepted.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_noise(input: &str) -> ParserResult<&str> {
    context(
        "noise",
        alt((take_while1(|c: char| !is_recognized(c)), recognize(anychar))),
    )(input)
}
