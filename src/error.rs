//! # Tokenizer Errors
//!
//! Every failure of a scan is reported as a [`TokenizeError`]. Errors are
//! terminal for the call that produced them: there is no partial token list.
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = TokenizeError> = std::result::Result<T, E>;

/// Represents errors that can occur while tokenizing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The input ended where more was structurally required, e.g. an
    /// unterminated string or bracket nesting.
    #[error("unexpected end of input at offset {offset}")]
    EndOfInput { offset: usize },

    /// A byte that is illegal in the current scanning context. `byte` is
    /// `None` when the scan ran off the end of a malformed literal.
    #[error("invalid symbol {} at offset {offset}", describe(.byte))]
    InvalidSymbol { offset: usize, byte: Option<u8> },

    /// A closing bracket or parenthesis without a matching opener, or an
    /// opener that was never closed.
    #[error("unbalanced parentheses at offset {offset}")]
    UnbalancedParens { offset: usize },

    /// A bare word used as a call that the vocabulary does not know.
    #[error("wrong formula, '{name}' is not a function (offset {offset})")]
    UnknownFunction { name: String, offset: usize },

    /// A bare word used as a value that the vocabulary does not know.
    #[error("wrong formula, '{name}' is not a constant (offset {offset})")]
    UnknownConstant { name: String, offset: usize },

    /// A pending stack entry that is neither an operator nor a function.
    #[error("wrong formula, '{entry}' is not an operation or function")]
    MalformedFormula { entry: String },
}

impl TokenizeError {
    /// Byte offset into the input the error refers to, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::EndOfInput { offset }
            | Self::InvalidSymbol { offset, .. }
            | Self::UnbalancedParens { offset }
            | Self::UnknownFunction { offset, .. }
            | Self::UnknownConstant { offset, .. } => Some(*offset),
            Self::MalformedFormula { .. } => None,
        }
    }
}

fn describe(byte: &Option<u8>) -> String {
    match *byte {
        Some(b) if b.is_ascii_graphic() => format!("'{}'", b as char),
        Some(b) => format!("0x{b:02x}"),
        None => "<end of input>".to_string(),
    }
}
