//! # Tokenizer
//!
//! Byte-oriented scanner for JSONPath-style expressions such as
//! `@['foo'].bar[(@.length - 1)].baz > 2`. Recognizers for numbers, quoted
//! strings and path tokens share a single [`Scanner`] cursor; the
//! [`tokenize`] driver strings them together into a flat token list.
pub mod buffer;
pub mod class;
pub mod lexer;
pub mod literal;
pub mod path;
pub mod state;
pub mod token;

// Re-exports
pub use buffer::{Checkpoint, Scanner};
pub use lexer::tokenize;
pub use state::State;
pub use token::{Tokens, plain_string, unquote};
