//! # Formulas
//!
//! Compilation of filter and arithmetic expressions into Reverse Polish
//! Notation, ready for a stack-based evaluator:
//!
//! ```
//! use jpexpr::formula::build_rpn;
//! let rpn = build_rpn("(@.price + 1) * 2 > 10").unwrap();
//! assert_eq!(
//!     rpn.into_inner(),
//!     vec!["@.price", "1", "+", "2", "*", "10", ">"]
//! );
//! ```
pub mod operators;
pub mod rpn;
pub mod vocabulary;

// Re-exports
pub use rpn::{build_rpn, build_rpn_with};
pub use vocabulary::{StandardVocabulary, Vocabulary};
