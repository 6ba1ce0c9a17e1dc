//! # Path Token Boundaries
//!
//! Finds the end of a variable reference such as `@.length` or
//! `@['foo'].bar[(@.length - 1)].baz`. Only the boundary is determined here;
//! the structure of the reference is interpreted downstream.
use log::debug;

use crate::error::{Result, TokenizeError};
use crate::tokenizer::buffer::Scanner;
use crate::tokenizer::state::State;

/// Bytes that may appear in a reference outside of any bracket nesting.
pub const fn is_reference_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'_' | b'.' | b'*' | b'?' | b'$' | b'@')
}

impl Scanner<'_> {
    /// Consumes a path token starting at the cursor (normally on `$` or `@`)
    /// and leaves the cursor on the first byte after it.
    ///
    /// Everything inside `[...]` and `(...)` belongs to the token, quoted
    /// keys are scanned as strings. Outside of any nesting the token ends
    /// at the first byte that is not a reference byte; a closing bracket with
    /// nothing open also ends it, so the token can sit inside an enclosing
    /// expression.
    ///
    /// # Errors
    ///
    /// - [`TokenizeError::UnbalancedParens`] when a closer does not match the
    ///   innermost opener.
    /// - [`TokenizeError::EndOfInput`] for an unterminated quote or nesting.
    /// - [`TokenizeError::InvalidSymbol`] for an empty token or an illegal
    ///   byte inside a quoted key.
    pub fn scan_path_token(&mut self) -> Result<()> {
        let first = self.position();
        let mut stack: Vec<u8> = Vec::new();
        let mut found = false;

        while let Some(byte) = self.current() {
            match byte {
                b'"' | b'\'' => {
                    found = true;
                    self.bump(1);
                    // cursor already past the closing quote
                    self.scan_string(byte, Some(State::String))?;
                    continue;
                }
                b'[' | b'(' => {
                    found = true;
                    stack.push(byte);
                }
                b']' | b')' => {
                    found = true;
                    let Some(&open) = stack.last() else {
                        if self.position() == first {
                            return Err(self.error_symbol());
                        }
                        break;
                    };
                    if open != opener_of(byte) {
                        return Err(TokenizeError::UnbalancedParens {
                            offset: self.position(),
                        });
                    }
                    stack.pop();
                }
                _ if is_reference_byte(byte) || !stack.is_empty() => {
                    found = true;
                }
                b'-' | b'+' if !found => {
                    found = true;
                    let checkpoint = self.checkpoint();
                    match self.scan_number(None) {
                        // cursor already past the number
                        Ok(_) => continue,
                        Err(err) => {
                            debug!("sign does not start a number: {err}");
                            self.restore(checkpoint);
                            break;
                        }
                    }
                }
                _ => break,
            }
            self.bump(1);
        }

        if !stack.is_empty() {
            return Err(self.error_eof());
        }
        if self.position() == first {
            return Err(self.error_symbol());
        }
        Ok(())
    }
}

const fn opener_of(closer: u8) -> u8 {
    if closer == b']' { b'[' } else { b'(' }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(input: &str) -> Result<String> {
        let mut scanner = Scanner::new(input.as_bytes());
        scanner.scan_path_token()?;
        Ok(scanner.slice_from(0))
    }

    #[test]
    fn test_simple_references() {
        assert_eq!(path("@.length").unwrap(), "@.length");
        let input = "$.store.book[*].author";
        assert_eq!(path(input).unwrap(), input);
        assert_eq!(path("@.foo_bar").unwrap(), "@.foo_bar");
        assert_eq!(path("$..*").unwrap(), "$..*");
    }

    #[test]
    fn test_stops_at_operators_and_space() {
        assert_eq!(path("@.length - 1").unwrap(), "@.length");
        assert_eq!(path("@.length-1").unwrap(), "@.length");
        assert_eq!(path("@.price>10").unwrap(), "@.price");
        assert_eq!(path("@.a)").unwrap(), "@.a");
        assert_eq!(path("@.a] + 1").unwrap(), "@.a");
    }

    #[test]
    fn test_nested_brackets_and_quotes() {
        let input = "@['foo'].bar[(@.length - 1)].baz";
        assert_eq!(path(input).unwrap(), input);

        let input = "@['a'][(1+2)]";
        assert_eq!(path(input).unwrap(), input);

        assert_eq!(path("@['a]b'].c d").unwrap(), "@['a]b'].c");
        assert_eq!(path(r#"@["x\"]"].y"#).unwrap(), r#"@["x\"]"].y"#);

        let input = "$..book[?(@.price < 10)].title";
        assert_eq!(path(input).unwrap(), input);
    }

    #[test]
    fn test_unterminated_nesting() {
        assert_eq!(
            path("@['a'][(1+2"),
            Err(TokenizeError::EndOfInput { offset: 11 })
        );
        assert!(matches!(
            path(r#"@["unterminated]"#),
            Err(TokenizeError::EndOfInput { .. })
        ));
        assert!(matches!(
            path("@['"),
            Err(TokenizeError::EndOfInput { .. })
        ));
        assert_eq!(
            path(r"@['a\x"),
            Err(TokenizeError::EndOfInput { offset: 6 })
        );
    }

    #[test]
    fn test_invalid_escape_in_key() {
        assert_eq!(
            path(r"@['a\x'].b"),
            Err(TokenizeError::InvalidSymbol {
                offset: 5,
                byte: Some(b'x')
            })
        );
    }

    #[test]
    fn test_mismatched_closer() {
        assert_eq!(
            path("@[(1]"),
            Err(TokenizeError::UnbalancedParens { offset: 4 })
        );
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(
            path("]"),
            Err(TokenizeError::InvalidSymbol {
                offset: 0,
                byte: Some(b']')
            })
        );
        assert!(matches!(
            path(" @"),
            Err(TokenizeError::InvalidSymbol { offset: 0, .. })
        ));
    }

    #[test]
    fn test_leading_sign_is_speculative() {
        assert_eq!(path("-1]").unwrap(), "-1");
        assert_eq!(path("-2.5e3)").unwrap(), "-2.5e3");
        assert!(matches!(
            path("-x"),
            Err(TokenizeError::InvalidSymbol { offset: 0, .. })
        ));
    }
}
