/*!
# `jpexpr` Library

Lexer and postfix compiler for JSONPath-style queries with embedded
arithmetic and filter expressions.

- [`tokenizer::tokenize`] splits an expression into a flat token list.
- [`formula::build_rpn`] compiles it into Reverse Polish Notation.
*/

pub mod error;
pub mod formula;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use error::TokenizeError;
pub use formula::{build_rpn, build_rpn_with};
pub use tokenizer::{Tokens, tokenize};
