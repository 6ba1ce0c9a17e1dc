//! # Literal State Machine
//!
//! Transition table for numeric and quoted-string literals. The table is an
//! exhaustive `match` over `(State, Class)`, so adding a state or a class
//! without deciding every transition fails to compile.
use crate::tokenizer::class::Class;

/// Progress through a numeric or string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Nothing consumed yet
    Start,
    /// Leading `-`
    Minus,
    /// A lone leading `0`
    Zero,
    /// Integer digits
    Integer,
    /// `.` seen, fraction digits expected
    Dot,
    /// Fraction digits
    Fraction,
    /// `e`/`E` seen
    Exponent,
    /// Sign after the exponent marker
    ExponentSign,
    /// Exponent digits
    ExponentDigits,
    /// Inside a quoted string
    String,
    /// After a backslash inside a string
    Escape,
    /// `\u` followed by 0..=3 hex digits
    Unicode1,
    Unicode2,
    Unicode3,
    Unicode4,
}

/// Outcome of feeding one classified byte to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The byte belongs to the literal.
    Next(State),
    /// The literal ended before this byte; the byte is not consumed.
    Done,
    /// The byte is not allowed here.
    Invalid,
}

impl State {
    /// Whether a numeric scan may legally end in this state.
    #[must_use]
    pub const fn is_terminal_number(self) -> bool {
        matches!(
            self,
            Self::Zero | Self::Integer | Self::Fraction | Self::ExponentDigits
        )
    }

    /// Whether this state is part of the numeric grammar.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Start
                | Self::Minus
                | Self::Zero
                | Self::Integer
                | Self::Dot
                | Self::Fraction
                | Self::Exponent
                | Self::ExponentSign
                | Self::ExponentDigits
        )
    }
}

/// Look up the transition for `class` out of `state`.
#[must_use]
pub const fn transition(state: State, class: Class) -> Transition {
    use Class as C;
    use State as S;
    use Transition::{Done, Invalid, Next};

    match (state, class) {
        // numbers
        (S::Start, C::Minus) => Next(S::Minus),
        (S::Start | S::Minus, C::Zero) => Next(S::Zero),
        (S::Start | S::Minus, C::Digit) => Next(S::Integer),
        (S::Start, C::Quote) => Next(S::String),

        (
            S::Zero | S::Integer | S::Fraction | S::ExponentDigits,
            C::Space | C::White | C::Delimiter,
        ) => Done,
        (S::Zero | S::Integer, C::Point) => Next(S::Dot),
        (S::Zero | S::Integer, C::Zero | C::Digit) => Next(S::Integer),
        (S::Dot | S::Fraction, C::Zero | C::Digit) => Next(S::Fraction),
        (S::Zero | S::Integer | S::Fraction, C::LowerE | C::UpperE) => {
            Next(S::Exponent)
        }
        (S::Exponent, C::Plus | C::Minus) => Next(S::ExponentSign),
        (
            S::Exponent | S::ExponentSign | S::ExponentDigits,
            C::Zero | C::Digit,
        ) => Next(S::ExponentDigits),

        // strings
        (S::String, C::Quote) => Done,
        (S::String, C::Backslash) => Next(S::Escape),
        (S::String, C::White) => Invalid,
        (S::String, _) => Next(S::String),
        (
            S::Escape,
            C::Quote
            | C::Backslash
            | C::Slash
            | C::LowerB
            | C::LowerF
            | C::LowerN
            | C::LowerR
            | C::LowerT,
        ) => Next(S::String),
        (S::Escape, C::LowerU) => Next(S::Unicode1),
        (
            S::Unicode1 | S::Unicode2 | S::Unicode3 | S::Unicode4,
            C::Zero
            | C::Digit
            | C::HexLetter
            | C::LowerB
            | C::LowerE
            | C::UpperE
            | C::LowerF,
        ) => match state {
            S::Unicode1 => Next(S::Unicode2),
            S::Unicode2 => Next(S::Unicode3),
            S::Unicode3 => Next(S::Unicode4),
            _ => Next(S::String),
        },

        (
            S::Start
            | S::Minus
            | S::Zero
            | S::Integer
            | S::Dot
            | S::Fraction
            | S::Exponent
            | S::ExponentSign
            | S::ExponentDigits
            | S::Escape
            | S::Unicode1
            | S::Unicode2
            | S::Unicode3
            | S::Unicode4,
            _,
        ) => Invalid,
    }
}
