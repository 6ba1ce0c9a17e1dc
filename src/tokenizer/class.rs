//! # Character Classes
//!
//! Maps raw input bytes to the semantic classes consumed by the literal state
//! machine. Two lookup tables exist because the meaning of the quote bytes
//! depends on which delimiter opened the string being scanned.

/// Semantic category of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// ` `
    Space,
    /// Tab, line feed, carriage return
    White,
    /// `,`, `]` and `}`: bytes that may follow a complete number
    Delimiter,
    /// The active string delimiter
    Quote,
    /// `\`
    Backslash,
    /// `/`
    Slash,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `.`
    Point,
    /// `0`
    Zero,
    /// `1`-`9`
    Digit,
    /// `e`
    LowerE,
    /// `E`
    UpperE,
    /// Hexadecimal letters with no other role: `a c d A B C D F`
    HexLetter,
    /// `b`
    LowerB,
    /// `f`
    LowerF,
    /// `n`
    LowerN,
    /// `r`
    LowerR,
    /// `t`
    LowerT,
    /// `u`
    LowerU,
    /// Everything else, including every byte `>= 128`
    Other,
}

/// Scanning context selecting the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Numeric literals.
    Numeric,
    /// A string opened by the given delimiter byte.
    Quoted(u8),
}

impl Context {
    const fn table(self) -> &'static [Option<Class>; 128] {
        match self {
            Self::Quoted(b'\'') => &SINGLE_QUOTE_CLASSES,
            Self::Numeric | Self::Quoted(_) => &ASCII_CLASSES,
        }
    }
}

/// Classification of ASCII bytes for numbers and double-quoted strings.
const ASCII_CLASSES: [Option<Class>; 128] = build_table(b'"');

/// Classification of ASCII bytes inside single-quoted strings.
const SINGLE_QUOTE_CLASSES: [Option<Class>; 128] = build_table(b'\'');

const fn build_table(quote: u8) -> [Option<Class>; 128] {
    let mut table = [None; 128];
    let mut i = 0;

    while i < 128 {
        let c = i as u8;
        table[i] = match c {
            b' ' => Some(Class::Space),
            b'\t' | b'\n' | b'\r' => Some(Class::White),
            // remaining control bytes may never appear
            0..=0x1f => None,
            b',' | b']' | b'}' => Some(Class::Delimiter),
            b'\\' => Some(Class::Backslash),
            b'/' => Some(Class::Slash),
            b'+' => Some(Class::Plus),
            b'-' => Some(Class::Minus),
            b'.' => Some(Class::Point),
            b'0' => Some(Class::Zero),
            b'1'..=b'9' => Some(Class::Digit),
            b'e' => Some(Class::LowerE),
            b'E' => Some(Class::UpperE),
            b'a' | b'c' | b'd' | b'A' | b'B' | b'C' | b'D' | b'F' => {
                Some(Class::HexLetter)
            }
            b'b' => Some(Class::LowerB),
            b'f' => Some(Class::LowerF),
            b'n' => Some(Class::LowerN),
            b'r' => Some(Class::LowerR),
            b't' => Some(Class::LowerT),
            b'u' => Some(Class::LowerU),
            _ if c == quote => Some(Class::Quote),
            _ => Some(Class::Other),
        };
        i += 1;
    }

    table
}

/// Classify `byte` within `context`.
///
/// Returns `None` when the byte can never appear in that context (control
/// characters). This is distinct from a byte that is merely not allowed at
/// the current position, which the transition table reports.
#[must_use]
pub const fn classify(byte: u8, context: Context) -> Option<Class> {
    if byte >= 128 {
        return Some(Class::Other);
    }
    context.table()[byte as usize]
}
