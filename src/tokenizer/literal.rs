//! # Literal Recognizers
//!
//! Drive the [`transition`] table over the scanner to consume a maximal
//! numeric literal or a complete quoted string starting at the cursor.
//!
//! Scan progress is threaded by value: callers pass the state to resume from
//! (or `None` for a fresh scan) and receive the last accepted state back.
use log::trace;

use crate::error::{Result, TokenizeError};
use crate::tokenizer::buffer::Scanner;
use crate::tokenizer::class::{Context, classify};
use crate::tokenizer::state::{State, Transition, transition};

impl Scanner<'_> {
    /// Consumes a numeric literal at the cursor.
    ///
    /// With `resume == None` the scan starts fresh from [`State::Start`] and
    /// is lenient: a byte that cannot extend the literal simply ends it. With
    /// `Some(state)` the scan continues from `state` and such a byte is an
    /// error. Strict mode serves callers that recognized a literal prefix
    /// themselves and need the rest to be a well-formed number up to a
    /// delimiter, e.g. the digits after an already consumed `.`.
    ///
    /// On success the cursor sits on the first byte after the literal and the
    /// last accepted state is returned; it is always terminal.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::InvalidSymbol`] for a control byte, for a disallowed
    /// byte in strict mode, or when the literal stops in a non-terminal state
    /// (e.g. `1e`, `-`, `2.`).
    pub fn scan_number(&mut self, resume: Option<State>) -> Result<State> {
        let lenient = resume.is_none();
        let mut last = resume.unwrap_or(State::Start);

        while let Some(byte) = self.current() {
            let class = classify(byte, Context::Numeric)
                .ok_or_else(|| self.error_symbol())?;
            match transition(last, class) {
                Transition::Next(state) if state.is_numeric() => last = state,
                Transition::Done => return Ok(last),
                // a quote opens a string, never a number
                Transition::Next(_) | Transition::Invalid if lenient => break,
                Transition::Next(_) | Transition::Invalid => {
                    return Err(self.error_symbol());
                }
            }
            self.bump(1);
        }

        if last.is_terminal_number() {
            Ok(last)
        } else {
            Err(self.error_symbol())
        }
    }

    /// Consumes a string delimited by `delimiter` at the cursor, including
    /// both delimiters. With `resume == Some(State::String)` the opening
    /// delimiter has already been consumed and the cursor sits on the first
    /// byte of the body.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::EndOfInput`] if the string is never closed, even
    /// when it also holds an illegal byte. [`TokenizeError::InvalidSymbol`]
    /// for a byte or escape that cannot appear in a closed string.
    pub fn scan_string(
        &mut self,
        delimiter: u8,
        resume: Option<State>,
    ) -> Result<()> {
        let context = Context::Quoted(delimiter);
        let mut last = resume.unwrap_or(State::Start);

        while let Some(byte) = self.current() {
            let Some(class) = classify(byte, context) else {
                return Err(self.string_error(delimiter));
            };
            match transition(last, class) {
                Transition::Next(state) => last = state,
                Transition::Done => {
                    // step over the closing delimiter
                    self.bump(1);
                    return Ok(());
                }
                Transition::Invalid => {
                    return Err(self.string_error(delimiter));
                }
            }
            self.bump(1);
        }

        trace!("unterminated string, last state {last:?}");
        Err(TokenizeError::EndOfInput {
            offset: self.position(),
        })
    }

    /// Error for an illegal byte under the cursor inside a string: the byte
    /// itself if an unescaped `delimiter` closes the string later on,
    /// otherwise end of input. The cursor is left on the byte.
    fn string_error(&mut self, delimiter: u8) -> TokenizeError {
        let symbol = self.error_symbol();
        let checkpoint = self.checkpoint();
        let closed = self.skip_to(delimiter).is_some();
        self.restore(checkpoint);
        if closed {
            symbol
        } else {
            trace!("unterminated string with {symbol}");
            self.error_eof()
        }
    }
}
