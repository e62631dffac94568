use nom::{
    branch::alt,
    combinator::map,
    error::{context, VerboseError},
    IResult,
};
use serde::{Deserialize, Serialize};

use super::{
    noise::parse_noise,
    number::parse_number,
    symbol::{parse_operator, parse_parenthesis, Operator, Parenthesis},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Parenthesis(Parenthesis),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Operator(_) | Token::Parenthesis(_) => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Parenthesis(paren) => write!(f, "{}", paren),
        }
    }
}

/// One step of the scan: either a token or a stretch of skipped input.
#[derive(Debug, Clone, PartialEq)]
enum Lexeme<'a> {
    Token(Token),
    Noise(&'a str),
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    current_position: usize,
    current_line: usize,
    current_column: usize,
    skipped: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
            skipped: 0,
        }
    }

    /// Scans `input` left to right and returns every recognized token with its
    /// location. Unrecognized characters are skipped; this never fails.
    #[tracing::instrument(level = "debug", skip(input))]
    pub fn tokenize(&mut self, input: &str) -> Vec<TokenSpan> {
        *self = Self::new();

        let mut tokens = Vec::new();
        let mut remaining = input;

        while !remaining.is_empty() {
            let start_position = self.current_position;
            let start_line = self.current_line;
            let start_column = self.current_column;

            match parse_lexeme(remaining) {
                Ok((new_remaining, lexeme)) => {
                    let consumed = &remaining[..(remaining.len() - new_remaining.len())];
                    self.update_position(consumed);

                    match lexeme {
                        Lexeme::Token(token) => {
                            tracing::trace!("token {:?} at {}", token, start_position);
                            tokens.push(TokenSpan {
                                token,
                                span: Span {
                                    start: start_position,
                                    end: self.current_position,
                                    line: start_line,
                                    column: start_column,
                                },
                            });
                        }
                        Lexeme::Noise(text) => {
                            tracing::debug!(
                                "skipping unrecognized input {:?} at {}",
                                text,
                                start_position
                            );
                            self.skipped += text.chars().count();
                        }
                    }

                    remaining = new_remaining;
                }
                // parse_noise accepts any character, so only empty input gets here.
                Err(e) => {
                    tracing::error!("tokenizer stalled at {}: {:?}", start_position, e);
                    break;
                }
            }
        }

        tokens
    }

    /// Number of characters skipped as noise by the last [`Tokenizer::tokenize`] call.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.current_position += c.len_utf8();
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
        }
    }
}

fn parse_lexeme(input: &str) -> ParserResult<Lexeme<'_>> {
    context(
        "lexeme",
        alt((
            map(parse_number, Lexeme::Token),
            map(parse_operator, Lexeme::Token),
            map(parse_parenthesis, Lexeme::Token),
            map(parse_noise, Lexeme::Noise),
        )),
    )(input)
}

/// Tokenizes a calculator expression.
///
/// # Examples
///
/// ```
/// use calclex::{parse, Operator, Parenthesis, Token};
///
/// let tokens = parse("4-(4x5)");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Number(4.0),
///         Token::Operator(Operator::Subtract),
///         Token::Parenthesis(Parenthesis::Opening),
///         Token::Number(4.0),
///         Token::Operator(Operator::Multiply),
///         Token::Number(5.0),
///         Token::Parenthesis(Parenthesis::Closing),
///     ]
/// );
/// ```
pub fn parse(input: &str) -> Vec<Token> {
    Tokenizer::new()
        .tokenize(input)
        .into_iter()
        .map(|span| span.token)
        .collect()
}

/// Renders tokens back to glyph text, separated by single spaces.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub token: Token,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexeme_order() {
        let (rest, lexeme) = parse_lexeme("12+").unwrap();
        assert_eq!(lexeme, Lexeme::Token(Token::Number(12.0)));
        assert_eq!(rest, "+");

        let (rest, lexeme) = parse_lexeme("&&1").unwrap();
        assert_eq!(lexeme, Lexeme::Noise("&&"));
        assert_eq!(rest, "1");
    }

    #[test]
    fn test_tokenizer_with_position() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("12 +\n(3)");

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].token, Token::Number(12.0));
        assert_eq!(tokens[0].span.start, 0);
        assert_eq!(tokens[0].span.end, 2);

        assert_eq!(tokens[1].token, Token::Operator(Operator::Add));
        assert_eq!(tokens[1].span.column, 4);

        // second line
        assert_eq!(tokens[2].token, Token::Parenthesis(Parenthesis::Opening));
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[2].span.column, 1);
        assert_eq!(tokens[2].span.start, 5);
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("π1");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span.start, 2);
        assert_eq!(tokens[0].span.column, 2);
    }

    #[test]
    fn test_skipped_count() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.tokenize("3&+5v-3x}4/3");
        assert_eq!(tokenizer.skipped(), 3);

        // reset on every scan
        tokenizer.tokenize("1+1");
        assert_eq!(tokenizer.skipped(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Number(4.55).to_string(), "4.55");
        assert_eq!(Token::Number(3.0).to_string(), "3");
        assert_eq!(Token::Operator(Operator::Multiply).to_string(), "x");
        assert_eq!(Token::Parenthesis(Parenthesis::Closing).to_string(), ")");
    }

    #[test]
    fn test_format_tokens() {
        let tokens = parse("(2022-1992)/2+7");
        assert_eq!(format_tokens(&tokens), "( 2022 - 1992 ) / 2 + 7");
        assert_eq!(format_tokens(&[]), "");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Token::Number(1.5).as_number(), Some(1.5));
        assert!(Token::Number(1.5).is_number());
        assert_eq!(Token::Operator(Operator::Add).as_number(), None);
        assert!(!Token::Parenthesis(Parenthesis::Opening).is_number());
    }
}
