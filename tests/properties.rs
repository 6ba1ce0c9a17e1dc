//! Property tests for the tokenizer and RPN builder.
use proptest::prelude::*;
use regex::Regex;

use jpexpr::tokenizer::{Scanner, State};
use jpexpr::{TokenizeError, build_rpn, tokenize};

/// Well-formed numeric literals, leading zeros included.
const NUMBER: &str = r"-?[0-9]{1,9}(\.[0-9]{1,6})?([eE][+-]?[0-9]{1,3})?";

/// String bodies without a closing quote, including illegal bytes and
/// escapes.
const OPEN_BODY: &str = r"([a-z0-9 \t\\]|\\x){0,16}";

proptest! {
    #[test]
    fn numbers_are_consumed_maximally(
        number in NUMBER,
        tail in prop_oneof![
            Just(""),
            Just(" "),
            Just("]"),
            Just(","),
            Just("+1"),
            Just(")"),
        ],
    ) {
        let input = format!("{number}{tail}");
        let mut scanner = Scanner::new(input.as_bytes());
        let state = scanner.scan_number(None);

        prop_assert!(state.is_ok(), "{input:?}: {state:?}");
        prop_assert!(matches!(
            state,
            Ok(State::Zero
                | State::Integer
                | State::Fraction
                | State::ExponentDigits)
        ));
        prop_assert_eq!(scanner.position(), number.len());

        let oracle = Regex::new(&format!("^{NUMBER}$")).unwrap();
        prop_assert!(oracle.is_match(&input[..scanner.position()]));
    }

    #[test]
    fn unterminated_strings_never_succeed(
        body in OPEN_BODY,
        quote in prop_oneof![Just('"'), Just('\'')],
    ) {
        let input = format!("{quote}{body}");
        let result = tokenize(&input);
        prop_assert!(
            matches!(result, Err(TokenizeError::EndOfInput { .. })),
            "{input:?}: {result:?}"
        );
    }

    #[test]
    fn leading_zeros_stay_in_one_literal(
        zeros in "0{1,4}",
        digits in "[0-9]{0,4}",
    ) {
        let input = format!("{zeros}{digits} + 1");
        let tokens = tokenize(&input).unwrap().into_inner();
        let literal = format!("{zeros}{digits}");
        prop_assert_eq!(
            tokens,
            vec![literal, "+".to_string(), "1".to_string()]
        );
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,32}") {
        let _ = tokenize(&input);
        let _ = build_rpn(&input);
    }

    #[test]
    fn sums_compile_left_to_right(
        values in prop::collection::vec(0u32..1000, 1..8),
    ) {
        let input = values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        let rpn = build_rpn(&input).unwrap().into_inner();

        let mut expected = vec![values[0].to_string()];
        for value in &values[1..] {
            expected.push(value.to_string());
            expected.push("+".to_string());
        }
        prop_assert_eq!(rpn, expected);
    }
}
