//! # RPN Builder
//!
//! Compiles an infix expression into Reverse Polish Notation with the
//! shunting-yard algorithm. Values (numbers, strings, path tokens and
//! constants) go straight to the output; operators and function names wait
//! on a stack until precedence or a closing parenthesis releases them.
use log::{debug, trace};

use crate::error::{Result, TokenizeError};
use crate::formula::operators::{
    is_operator, is_operator_byte, is_postfix, is_right_associative, is_sign,
    priority,
};
use crate::formula::vocabulary::{StandardVocabulary, Vocabulary};
use crate::tokenizer::Tokens;
use crate::tokenizer::buffer::Scanner;

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    /// A binary or postfix operator. Single-byte spellings that are not in
    /// the operator table (such as `=`) are kept so the formula can be
    /// rejected once they are released.
    Operator(String),
    /// A function name awaiting its argument.
    Function(String),
    /// An open parenthesis and its offset.
    LeftParen(usize),
}

impl Pending {
    /// Converts a released entry into an output token.
    fn release(self) -> Result<String> {
        match self {
            Self::Function(name) => Ok(name),
            Self::Operator(op) if is_operator(&op) => Ok(op),
            Self::Operator(op) => {
                Err(TokenizeError::MalformedFormula { entry: op })
            }
            Self::LeftParen(offset) => {
                Err(TokenizeError::UnbalancedParens { offset })
            }
        }
    }

    /// Whether this entry must be output before pushing operator `op`.
    fn yields_to(&self, op: &str) -> bool {
        match self {
            Self::Function(_) => true,
            Self::Operator(top) => match (priority(top), priority(op)) {
                (Some(top_tier), Some(tier)) => {
                    top_tier > tier
                        || (top_tier == tier && !is_right_associative(top))
                }
                (Some(_), None) => true,
                (None, _) => false,
            },
            Self::LeftParen(_) => false,
        }
    }
}

/// Shunting-yard state for one expression.
struct RpnBuilder<'a, V: ?Sized> {
    /// Cursor over the input bytes
    scanner: Scanner<'a>,
    /// Registry deciding which bare words are functions or constants
    vocabulary: &'a V,
    /// Operators, functions and parentheses not yet released
    stack: Vec<Pending>,
    /// Postfix output
    output: Tokens,
    /// Whether the previous unit was a value
    after_operand: bool,
}

impl<'a, V: Vocabulary + ?Sized> RpnBuilder<'a, V> {
    const fn new(input: &'a [u8], vocabulary: &'a V) -> Self {
        Self {
            scanner: Scanner::new(input),
            vocabulary,
            stack: Vec::new(),
            output: Tokens::new(),
            after_operand: false,
        }
    }

    fn emit(&mut self, token: String) {
        trace!("output {token:?}");
        self.output.push(token);
    }

    /// Consumes the whole input.
    fn run(mut self) -> Result<Tokens> {
        while let Some(byte) = self.scanner.skip_whitespace() {
            self.step(byte)?;
        }

        while let Some(entry) = self.stack.pop() {
            let token = entry.release()?;
            self.emit(token);
        }

        if self.output.is_empty() {
            return Err(self.scanner.error_eof());
        }
        Ok(self.output)
    }

    /// Handles the lexical unit starting with `byte` at the cursor.
    fn step(&mut self, byte: u8) -> Result<()> {
        let start = self.scanner.position();

        match byte {
            b if is_operator_byte(b) && self.after_operand => {
                let op = self.scanner.read_operator();
                self.after_operand = is_postfix(&op);
                self.push_operator(op)?;
            }
            b if is_operator_byte(b) && !is_sign(b) => {
                return Err(self.scanner.error_symbol());
            }
            b'-' | b'+' | b'0'..=b'9' | b'.' => {
                self.after_operand = true;
                self.scanner.scan_number(None)?;
                let number = self.scanner.slice_from(start);
                self.emit(number);
            }
            b'"' | b'\'' => {
                self.after_operand = true;
                self.scanner.scan_string(byte, None)?;
                let string = self.scanner.slice_from(start);
                self.emit(string);
            }
            b'$' | b'@' => {
                self.after_operand = true;
                self.scanner.scan_path_token()?;
                let path = self.scanner.slice_from(start);
                self.emit(path);
            }
            b'(' => {
                self.after_operand = false;
                self.scanner.bump(1);
                self.stack.push(Pending::LeftParen(start));
            }
            b')' => {
                self.after_operand = true;
                self.scanner.bump(1);
                self.close_paren(start)?;
            }
            _ => {
                self.after_operand = true;
                self.push_word()?;
            }
        }
        Ok(())
    }

    /// Releases entries that bind at least as tightly as `op`, then pushes it.
    fn push_operator(&mut self, op: String) -> Result<()> {
        while self.stack.last().is_some_and(|top| top.yields_to(&op)) {
            if let Some(entry) = self.stack.pop() {
                let token = entry.release()?;
                self.emit(token);
            }
        }
        trace!("push operator {op:?}");
        self.stack.push(Pending::Operator(op));
        Ok(())
    }

    /// Releases entries up to the matching `(`, which is discarded.
    fn close_paren(&mut self, offset: usize) -> Result<()> {
        while let Some(entry) = self.stack.pop() {
            if matches!(entry, Pending::LeftParen(_)) {
                return Ok(());
            }
            let token = entry.release()?;
            self.emit(token);
        }
        debug!("formula has no left parenthesis for offset {offset}");
        Err(TokenizeError::UnbalancedParens { offset })
    }

    /// Reads a bare word and routes it as a function or a constant.
    fn push_word(&mut self) -> Result<()> {
        let word = self.scanner.read_word();
        if word.text.is_empty() {
            return Err(self.scanner.error_symbol());
        }

        if word.call {
            if !self.vocabulary.is_function(&word.text) {
                return Err(TokenizeError::UnknownFunction {
                    name: word.text,
                    offset: word.offset,
                });
            }
            self.after_operand = false;
            trace!("push function {:?}", word.text);
            self.stack.push(Pending::Function(word.text));
        } else {
            if !self.vocabulary.is_constant(&word.text) {
                return Err(TokenizeError::UnknownConstant {
                    name: word.text,
                    offset: word.offset,
                });
            }
            self.emit(word.text);
        }
        Ok(())
    }
}

/// Compile an expression into Reverse Polish Notation using the
/// [`StandardVocabulary`].
///
/// ```
/// use jpexpr::formula::build_rpn;
/// let rpn = build_rpn("1 + 2 * 3").unwrap();
/// assert_eq!(rpn.into_inner(), vec!["1", "2", "3", "*", "+"]);
/// ```
///
/// # Errors
///
/// See [`build_rpn_with`].
pub fn build_rpn(input: &str) -> Result<Tokens> {
    build_rpn_with(input, &StandardVocabulary)
}

/// Compile an expression into Reverse Polish Notation, resolving bare words
/// against `vocabulary`.
///
/// # Errors
///
/// - [`TokenizeError::InvalidSymbol`] for malformed literals or an operator
///   with no left operand.
/// - [`TokenizeError::EndOfInput`] for unterminated strings or nesting, and
///   for input with no tokens at all.
/// - [`TokenizeError::UnbalancedParens`] for a `)` without `(` or a `(`
///   never closed.
/// - [`TokenizeError::UnknownFunction`] / [`TokenizeError::UnknownConstant`]
///   for bare words missing from `vocabulary`.
/// - [`TokenizeError::MalformedFormula`] for a stacked entry that is not an
///   operator, e.g. a lone `=`.
pub fn build_rpn_with<V: Vocabulary + ?Sized>(
    input: &str,
    vocabulary: &V,
) -> Result<Tokens> {
    let rpn = RpnBuilder::new(input.as_bytes(), vocabulary).run()?;
    debug!("compiled {input:?} into {} postfix tokens", rpn.len());
    Ok(rpn)
}
