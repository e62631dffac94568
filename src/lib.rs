//! # calclex
//!
//! Lexical analyzer for calculator expressions.
//!
//! The crate turns an expression string into typed tokens: numbers, the four
//! binary operators (`+`, `-`, `x`, `/`) and parentheses. It does not evaluate
//! anything and does not check that the token sequence forms a valid
//! expression; an evaluator downstream owns both.
//!
//! ```text
//! "3&+5v-3x}4/3"  →  3 + 5 - 3 x 4 / 3
//! ```
//!
//! Unrecognized characters (`&`, `v`, `}` above) are skipped silently.
//!
//! * [`tokenizer`]: the lexer itself
//! * [`config`]: settings for the `calclex` command-line tool
//! * [`error`]: errors of the command-line surface

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::symbol::{Operator, Parenthesis};
pub use tokenizer::token::{format_tokens, parse, Span, Token, TokenSpan, Tokenizer};
