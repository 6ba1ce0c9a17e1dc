//! # Expression Lexer
//!
//! Splits an expression into a flat list of tokens: operators, numbers,
//! quoted strings, path tokens, parentheses and bare words. Bare words are
//! lowercased but not checked against any vocabulary.
use log::{debug, trace};

use crate::error::Result;
use crate::formula::operators::{
    is_operator, is_operator_byte, is_postfix, is_sign,
};
use crate::tokenizer::buffer::Scanner;
use crate::tokenizer::token::Tokens;

/// A bare word read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    /// Lowercased text, empty if the cursor was not on a word byte
    pub text: String,
    /// Whether the word is directly followed by `(`
    pub call: bool,
    /// Offset of the first byte
    pub offset: usize,
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl Scanner<'_> {
    /// Reads the operator at the cursor, preferring a two-byte spelling when
    /// the pair is a known operator.
    pub(crate) fn read_operator(&mut self) -> String {
        let start = self.position();
        let pair = self
            .input()
            .get(start..start + 2)
            .and_then(|pair| std::str::from_utf8(pair).ok());
        if pair.is_some_and(is_operator) {
            self.bump(2);
        } else {
            self.bump(1);
        }
        self.slice_from(start)
    }

    /// Reads a run of identifier bytes. A word directly followed by `(` is a
    /// function call; the parenthesis itself is left for the caller.
    pub(crate) fn read_word(&mut self) -> Word {
        let offset = self.position();
        while self.current().is_some_and(is_word_byte) {
            self.bump(1);
        }
        Word {
            text: self.slice_from(offset).to_ascii_lowercase(),
            call: self.current() == Some(b'('),
            offset,
        }
    }

    /// Reads a single character, including all bytes of a multi-byte UTF-8
    /// sequence.
    pub(crate) fn read_symbol(&mut self) -> String {
        let start = self.position();
        self.bump(1);
        while self.current().is_some_and(|b| b & 0xC0 == 0x80) {
            self.bump(1);
        }
        self.slice_from(start)
    }
}

/// A lexer producing a flat token list from an expression.
struct Lexer<'a> {
    /// Cursor over the input bytes
    scanner: Scanner<'a>,
    /// Whether the previous token was a value, so that a following `+`/`-`
    /// is an operator rather than a sign
    after_operand: bool,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self {
            scanner: Scanner::new(input),
            after_operand: false,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        let Some(byte) = self.scanner.skip_whitespace() else {
            return Ok(None);
        };
        let start = self.scanner.position();

        let token = match byte {
            b if is_operator_byte(b) && (self.after_operand || !is_sign(b)) => {
                let op = self.scanner.read_operator();
                self.after_operand = is_postfix(&op);
                op
            }
            b'-' | b'+' | b'0'..=b'9' | b'.' => {
                self.after_operand = true;
                let checkpoint = self.scanner.checkpoint();
                match self.scanner.scan_number(None) {
                    Ok(_) => self.scanner.slice_from(start),
                    // a lone `.` is the descend operator
                    Err(err) if byte == b'.' => {
                        debug!("'.' at offset {start} is not a number: {err}");
                        self.scanner.restore(checkpoint);
                        self.scanner.bump(1);
                        ".".to_string()
                    }
                    Err(err) => return Err(err),
                }
            }
            b'"' | b'\'' => {
                self.after_operand = true;
                self.scanner.scan_string(byte, None)?;
                self.scanner.slice_from(start)
            }
            b'$' | b'@' => {
                self.after_operand = true;
                self.scanner.scan_path_token()?;
                self.scanner.slice_from(start)
            }
            b'(' => {
                self.after_operand = false;
                self.scanner.read_symbol()
            }
            b')' => {
                self.after_operand = true;
                self.scanner.read_symbol()
            }
            _ => {
                let word = self.scanner.read_word();
                if word.text.is_empty() {
                    // separators such as `,` or `:` start a new operand
                    self.after_operand = matches!(byte, b']' | b'}');
                    self.scanner.read_symbol()
                } else {
                    self.after_operand = !word.call;
                    word.text
                }
            }
        };

        trace!("token {token:?} at offset {start}");
        Ok(Some(token))
    }
}

/// Tokenize an expression into a flat list of tokens.
///
/// ```
/// use jpexpr::tokenizer::tokenize;
/// let tokens = tokenize("@.price * 2 >= Sqrt(@.x)").unwrap();
/// assert_eq!(
///     tokens.into_inner(),
///     vec!["@.price", "*", "2", ">=", "sqrt", "(", "@.x", ")"]
/// );
/// ```
///
/// # Errors
///
/// Returns the first [`TokenizeError`](crate::error::TokenizeError) raised by
/// a recognizer: a malformed number, an unterminated string or nesting, or
/// mismatched brackets inside a path token.
pub fn tokenize(input: &str) -> Result<Tokens> {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut tokens = Tokens::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenizeError;

    fn lex(input: &str) -> Vec<String> {
        tokenize(input)
            .unwrap_or_else(|err| panic!("tokenize({input:?}) failed: {err}"))
            .into_inner()
    }

    #[test]
    fn test_empty() {
        assert!(lex("").is_empty());
        assert!(lex("  \t\n").is_empty());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(lex("1 + 2 * 3"), vec!["1", "+", "2", "*", "3"]);
        assert_eq!(lex("1+2"), vec!["1", "+", "2"]);
        assert_eq!(lex("2 ** -1.5e3"), vec!["2", "**", "-1.5e3"]);
        assert_eq!(lex("-1 - -2"), vec!["-1", "-", "-2"]);
        assert_eq!(lex("3! - 1"), vec!["3", "!", "-", "1"]);
        assert_eq!(lex("007 + 1"), vec!["007", "+", "1"]);
        assert_eq!(lex("-00.5"), vec!["-00.5"]);
    }

    #[test]
    fn test_two_byte_operators() {
        assert_eq!(
            lex("@.a == 1 && @.b != 2 || @.c <= 3"),
            vec![
                "@.a", "==", "1", "&&", "@.b", "!=", "2", "||", "@.c", "<=",
                "3"
            ]
        );
        assert_eq!(lex("1 << 2"), vec!["1", "<<", "2"]);
        // `=` on its own is not an operator but is still a token
        assert_eq!(lex("1 = 2"), vec!["1", "=", "2"]);
        assert_eq!(lex("1 =~ 'x'"), vec!["1", "=~", "'x'"]);
    }

    #[test]
    fn test_paths_and_strings() {
        assert_eq!(
            lex("@['foo'].bar[(@.length - 1)].baz"),
            vec!["@['foo'].bar[(@.length - 1)].baz"]
        );
        assert_eq!(lex("@['a'][(1+2)]"), vec!["@['a'][(1+2)]"]);
        assert_eq!(
            lex(r#"@.name == "a\"b""#),
            vec!["@.name", "==", r#""a\"b""#]
        );
        assert_eq!(lex("(@.length-1)"), vec!["(", "@.length", "-", "1", ")"]);
    }

    #[test]
    fn test_words() {
        assert_eq!(
            lex("Round(PI) + e"),
            vec!["round", "(", "pi", ")", "+", "e"]
        );
        assert_eq!(lex("foo_bar2"), vec!["foo_bar2"]);
        // the lexer does not validate names
        assert_eq!(lex("nope(1)"), vec!["nope", "(", "1", ")"]);
    }

    #[test]
    fn test_dot_and_separators() {
        assert_eq!(lex("foo.bar"), vec!["foo", ".", "bar"]);
        assert_eq!(lex(".5"), vec![".", "5"]);
        assert_eq!(lex("a, b , c"), vec!["a", ",", "b", ",", "c"]);
        assert_eq!(lex("[1:-1]"), vec!["[", "1", ":", "-1", "]"]);
    }

    #[test]
    fn test_non_ascii_symbol() {
        assert_eq!(lex("a § b"), vec!["a", "§", "b"]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            tokenize(r#""abc"#),
            Err(TokenizeError::EndOfInput { .. })
        ));
        assert!(matches!(
            tokenize("@['a'][(1+2"),
            Err(TokenizeError::EndOfInput { .. })
        ));
        assert_eq!(
            tokenize("1 + 2e"),
            Err(TokenizeError::InvalidSymbol {
                offset: 6,
                byte: None
            })
        );
        assert!(matches!(
            tokenize("@[(]"),
            Err(TokenizeError::UnbalancedParens { offset: 3 })
        ));
    }

    #[test]
    fn test_unterminated_string_with_bad_escape() {
        assert_eq!(
            tokenize("\"abc\\x"),
            Err(TokenizeError::EndOfInput { offset: 6 })
        );
        assert_eq!(
            tokenize("1 + 'a\tb"),
            Err(TokenizeError::EndOfInput { offset: 8 })
        );
        // closed strings still report the offending byte
        assert_eq!(
            tokenize("\"abc\\x\""),
            Err(TokenizeError::InvalidSymbol {
                offset: 5,
                byte: Some(b'x')
            })
        );
    }
}
