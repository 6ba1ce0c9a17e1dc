//! # Scanner Buffer
//!
//! Owns the input byte sequence and the single cursor every recognizer moves.
//! All cursor movement is bounds-checked: the cursor ranges over
//! `0..=input.len()` and reading at the end yields `None` instead of a byte.
use crate::error::TokenizeError;

/// Saved cursor position for speculative scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Byte cursor over a borrowed input.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The input sequence of bytes to scan
    input: &'a [u8],
    /// Current position (next byte to examine)
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    /// The full input.
    #[must_use]
    pub const fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Current cursor offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor has consumed all input.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Returns the byte after the cursor without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<u8> {
        self.input.get(self.position + 1).copied()
    }

    /// Moves to the next byte and returns it. Fails with `None`, leaving the
    /// cursor in place, when the cursor already sits on the last byte.
    pub fn advance(&mut self) -> Option<u8> {
        let next = self.peek_next()?;
        self.position += 1;
        Some(next)
    }

    /// Moves forward `n` bytes, stopping at the end of input.
    pub fn bump(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    /// Skips spaces, tabs, line feeds and carriage returns. Returns the first
    /// other byte, or `None` if the input is exhausted.
    pub fn skip_whitespace(&mut self) -> Option<u8> {
        while let Some(byte) = self.current() {
            if !matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
                return Some(byte);
            }
            self.position += 1;
        }
        None
    }

    /// Whether the byte under the cursor is escaped, i.e. preceded by an odd
    /// number of consecutive backslashes.
    #[must_use]
    pub fn is_escaped(&self) -> bool {
        let end = self.position.min(self.input.len());
        self.input[..end]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count()
            % 2
            == 1
    }

    /// Advances to the next unescaped occurrence of `target`, starting at the
    /// cursor. Returns its offset, or `None` (cursor at end) if there is none.
    pub fn skip_to(&mut self, target: u8) -> Option<usize> {
        self.skip_to_any(&[target])
    }

    /// Like [`Scanner::skip_to`] for any byte of `set`.
    pub fn skip_to_any(&mut self, set: &[u8]) -> Option<usize> {
        while let Some(byte) = self.current() {
            if set.contains(&byte) && !self.is_escaped() {
                return Some(self.position);
            }
            self.position += 1;
        }
        None
    }

    /// Records the cursor so a speculative scan can be undone.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    /// Rewinds the cursor to `checkpoint`.
    pub const fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0;
    }

    /// Input text between `start` and the cursor.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// An [`TokenizeError::InvalidSymbol`] for the byte under the cursor.
    #[must_use]
    pub fn error_symbol(&self) -> TokenizeError {
        TokenizeError::InvalidSymbol {
            offset: self.position,
            byte: self.current(),
        }
    }

    /// An [`TokenizeError::EndOfInput`] at the end of the input.
    #[must_use]
    pub const fn error_eof(&self) -> TokenizeError {
        TokenizeError::EndOfInput {
            offset: self.input.len(),
        }
    }
}
