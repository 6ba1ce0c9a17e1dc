//! # Tokens
//!
//! The token list produced by the tokenizer drivers, plus helpers for
//! working with quoted tokens.
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Display;
use std::ops::Deref;

use crate::error::{Result, TokenizeError};

/// An ordered list of tokens copied out of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Creates an empty token list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, token: String) {
        self.0.push(token);
    }

    /// Whether `find` occurs as a whole token.
    #[must_use]
    pub fn exists(&self, find: &str) -> bool {
        self.0.iter().any(|t| t == find)
    }

    /// Number of tokens equal to `find`.
    #[must_use]
    pub fn count(&self, find: &str) -> usize {
        self.0.iter().filter(|t| *t == find).count()
    }

    /// Splits the list on every `separator` token and concatenates the tokens
    /// of each segment. There is always one more segment than separators.
    ///
    /// ```
    /// use jpexpr::tokenizer::tokenize;
    /// let tokens = tokenize("a, b , c").unwrap();
    /// assert_eq!(tokens.slice(","), vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn slice(&self, separator: &str) -> Vec<String> {
        self.0
            .split(|t| t == separator)
            .map(<[String]>::concat)
            .collect()
    }

    /// Consumes the list, returning the underlying tokens.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Tokens {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for Tokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Tokens {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Strips one matching pair of enclosing `"` or `'` from `key` and unescapes
/// the interior. A key that is not enclosed in quotes is returned unchanged.
///
/// ```
/// use jpexpr::tokenizer::plain_string;
/// assert_eq!(plain_string(r#""foo""#).unwrap(), "foo");
/// assert_eq!(plain_string("'it\\'s'").unwrap(), "it's");
/// assert_eq!(plain_string("foo").unwrap(), "foo");
/// ```
///
/// # Errors
///
/// Returns [`TokenizeError::InvalidSymbol`] if the quoted interior contains
/// a bad escape, an unescaped quote or a control character.
pub fn plain_string(key: &str) -> Result<Cow<'_, str>> {
    let bytes = key.as_bytes();
    if let [first @ (b'"' | b'\''), .., last] = bytes {
        if first == last {
            return unquote(key, *first).map(Cow::Owned);
        }
    }
    Ok(Cow::Borrowed(key))
}

/// Removes the `border` quotes around `text` and resolves JSON-style escape
/// sequences (`\'` is accepted as well). Lone UTF-16 surrogates decode to
/// U+FFFD.
///
/// # Errors
///
/// Returns [`TokenizeError::InvalidSymbol`] pointing at the offending byte
/// of `text` when it is not a well-formed quoted string.
pub fn unquote(text: &str, border: u8) -> Result<String> {
    let bytes = text.as_bytes();
    let error = |offset: usize| TokenizeError::InvalidSymbol {
        offset,
        byte: bytes.get(offset).copied(),
    };

    if bytes.len() < 2
        || bytes[0] != border
        || bytes[bytes.len() - 1] != border
    {
        return Err(error(0));
    }
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();

    while let Some((i, c)) = chars.next() {
        // offsets are reported relative to `text`
        let at = i + 1;
        match c {
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    return Err(error(at));
                };
                match escaped {
                    '"' | '\\' | '/' | '\'' => out.push(escaped),
                    'b' => out.push('\u{8}'),
                    'f' => out.push('\u{c}'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'u' => {
                        let hex = i + 2;
                        let unit =
                            read_hex4(inner, hex).ok_or_else(|| error(at))?;
                        for _ in 0..4 {
                            chars.next();
                        }
                        out.push(decode_unit(unit, inner, hex + 4, &mut chars));
                    }
                    _ => return Err(error(at + 1)),
                }
            }
            c if c as u32 == u32::from(border) || c < ' ' => {
                return Err(error(at));
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Parses four hex digits starting at `offset` of `inner`.
fn read_hex4(inner: &str, offset: usize) -> Option<u16> {
    let digits = inner.get(offset..offset + 4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

/// Turns a `\u` code unit into a char, consuming a following low surrogate
/// escape from `chars` when `unit` is a high surrogate.
fn decode_unit(
    unit: u16,
    inner: &str,
    next: usize,
    chars: &mut std::str::CharIndices<'_>,
) -> char {
    if !(0xD800..0xDC00).contains(&unit) {
        return char::from_u32(u32::from(unit))
            .unwrap_or(char::REPLACEMENT_CHARACTER);
    }
    let low = inner
        .get(next..next + 2)
        .filter(|prefix| *prefix == "\\u")
        .and_then(|_| read_hex4(inner, next + 2))
        .filter(|low| (0xDC00..0xE000).contains(low));
    match low {
        Some(low) => {
            for _ in 0..6 {
                chars.next();
            }
            char::decode_utf16([unit, low])
                .next()
                .and_then(std::result::Result::ok)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        }
        None => char::REPLACEMENT_CHARACTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Tokens {
        items.iter().copied().collect()
    }

    #[test]
    fn test_exists_and_count() {
        let list = tokens(&["a", ",", "b", ",", "c"]);
        assert!(list.exists(","));
        assert!(!list.exists(";"));
        assert_eq!(list.count(","), 2);
        assert_eq!(list.count("z"), 0);
    }

    #[test]
    fn test_slice() {
        let list = tokens(&["a", ",", "b", ",", "c"]);
        assert_eq!(list.slice(","), vec!["a", "b", "c"]);

        let list = tokens(&["@.a", "+", "1", ":", "2"]);
        assert_eq!(list.slice(":"), vec!["@.a+1", "2"]);

        let list = tokens(&[":", "x", ":"]);
        assert_eq!(list.slice(":"), vec!["", "x", ""]);

        assert_eq!(Tokens::new().slice(","), vec![""]);
    }

    #[test]
    fn test_display_and_serialize() {
        let list = tokens(&["1", "2", "+"]);
        assert_eq!(list.to_string(), "1 2 +");
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"["1","2","+"]"#
        );
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(plain_string(r#""foo""#).unwrap(), "foo");
        assert_eq!(plain_string("'foo'").unwrap(), "foo");
        assert_eq!(plain_string("foo").unwrap(), "foo");
        assert!(matches!(plain_string("foo").unwrap(), Cow::Borrowed(_)));
        // only one pair is stripped
        assert_eq!(plain_string(r#"'"foo"'"#).unwrap(), r#""foo""#);
        // unmatched quotes are left alone
        assert_eq!(plain_string(r#""foo'"#).unwrap(), r#""foo'"#);
        assert_eq!(plain_string("\"").unwrap(), "\"");
        assert_eq!(plain_string("''").unwrap(), "");
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote(r#""a\"b""#, b'"').unwrap(), "a\"b");
        assert_eq!(unquote(r#""tab\tnl\n""#, b'"').unwrap(), "tab\tnl\n");
        assert_eq!(unquote(r#""Aé""#, b'"').unwrap(), "Aé");
        assert_eq!(unquote(r#""\ud83d\ude00""#, b'"').unwrap(), "😀");
        assert_eq!(unquote(r#""\u0041\u00e9""#, b'"').unwrap(), "Aé");
        assert_eq!(unquote(r#""\ud83dx""#, b'"').unwrap(), "\u{fffd}x");
        assert_eq!(unquote(r"'it\'s'", b'\'').unwrap(), "it's");
        assert_eq!(unquote("'héllo'", b'\'').unwrap(), "héllo");
    }

    #[test]
    fn test_unquote_rejects() {
        assert!(matches!(
            unquote(r#""a"b""#, b'"'),
            Err(TokenizeError::InvalidSymbol { offset: 2, .. })
        ));
        assert!(matches!(
            unquote(r#""\x""#, b'"'),
            Err(TokenizeError::InvalidSymbol { offset: 2, .. })
        ));
        assert!(unquote(r#""\u12""#, b'"').is_err());
        assert!(unquote("\"a\nb\"", b'"').is_err());
        assert!(unquote("abc", b'"').is_err());
    }
}
