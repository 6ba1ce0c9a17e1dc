//! # Operator Table
//!
//! Precedence tiers and associativity of the binary (and postfix `!`)
//! operators understood by the RPN builder. Higher tiers bind tighter.

/// Every operator spelling together with its precedence tier.
pub const OPERATORS: [(&str, u8); 22] = [
    ("!", 7),
    ("**", 6),
    ("*", 5),
    ("/", 5),
    ("%", 5),
    ("<<", 5),
    (">>", 5),
    ("&", 5),
    ("&^", 5),
    ("+", 4),
    ("-", 4),
    ("|", 4),
    ("^", 4),
    ("==", 3),
    ("!=", 3),
    ("<", 3),
    ("<=", 3),
    (">", 3),
    (">=", 3),
    ("=~", 3),
    ("&&", 2),
    ("||", 1),
];

/// Precedence tier of `op`, or `None` if `op` is not an operator.
#[must_use]
pub fn priority(op: &str) -> Option<u8> {
    OPERATORS
        .iter()
        .find_map(|&(name, tier)| (name == op).then_some(tier))
}

/// Whether `op` is a known operator.
#[must_use]
pub fn is_operator(op: &str) -> bool {
    priority(op).is_some()
}

/// Whether `op` groups right-to-left.
#[must_use]
pub fn is_right_associative(op: &str) -> bool {
    op == "**"
}

/// Whether `op` applies to the value before it (`3!`), leaving an operand
/// behind rather than expecting one.
#[must_use]
pub fn is_postfix(op: &str) -> bool {
    op == "!"
}

/// Bytes that start an operator token.
#[must_use]
pub const fn is_operator_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'*' | b'/' | b'%' | b'<' | b'>' | b'&' | b'|' | b'^' | b'+'
            | b'-' | b'='
    )
}

/// `+` or `-`, which may also start a numeric literal.
#[must_use]
pub const fn is_sign(byte: u8) -> bool {
    matches!(byte, b'+' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities() {
        assert_eq!(priority("**"), Some(6));
        assert_eq!(priority("*"), Some(5));
        assert_eq!(priority("+"), Some(4));
        assert_eq!(priority("=="), Some(3));
        assert_eq!(priority("||"), Some(1));
        assert_eq!(priority("="), None);
        assert_eq!(priority("+-"), None);
        assert!(priority("*") > priority("+"));
        assert!(priority("&&") > priority("||"));
    }

    #[test]
    fn test_associativity() {
        assert!(is_right_associative("**"));
        assert!(!is_right_associative("-"));
        assert!(is_postfix("!"));
        assert!(!is_postfix("!="));
    }

    #[test]
    fn test_every_operator_starts_with_an_operator_byte() {
        for (name, _) in OPERATORS {
            assert!(is_operator_byte(name.as_bytes()[0]), "{name}");
        }
    }
}
