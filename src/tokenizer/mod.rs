//! # Tokenizer Component
//!
//! Lexical analysis of calculator expressions such as `(2022-1992)/2+7`,
//! turning free-form text into an ordered list of [`Token`](token::Token)s.
//!
//! ## Design Principles
//!
//! * **Total**: every input, including the empty string, tokenizes. Characters
//!   outside the glyph alphabet are dropped, never reported as errors.
//! * **Single pass**: one left-to-right scan with no backtracking across tokens.
//! * **No grammar**: operator placement and parenthesis balance are left to
//!   whatever consumes the tokens.
//!
//! ## Component Structure
//!
//! * [`token`]: token types, the scan loop and [`parse`](token::parse)
//! * [`number`]: digit/decimal-point runs
//! * [`symbol`]: operators and parentheses
//! * [`noise`]: everything else
//!
//! ## Glyph Alphabet
//!
//! | Glyph | Token |
//! |---|---|
//! | `0`-`9`, `.` | part of a number run |
//! | `+` | `Operator(Add)` |
//! | `-` | `Operator(Subtract)` |
//! | `x` | `Operator(Multiply)` |
//! | `/` | `Operator(Divide)` |
//! | `(` | `Parenthesis(Opening)` |
//! | `)` | `Parenthesis(Closing)` |
//!
//! ## Usage Example
//!
//! ```rust
//! use calclex::tokenizer::token::{Tokenizer, Token};
//!
//! let mut tokenizer = Tokenizer::new();
//! let tokens = tokenizer.tokenize("3 & + 5");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].token, Token::Number(5.0));
//! assert_eq!(tokenizer.skipped(), 4);
//! ```

pub mod noise;
pub mod number;
pub mod symbol;
pub mod token;
