//! Property-based tests for input parsing
//!
//! Parsing has to cope with anything a user can type without panicking, and
//! must agree with the standard formatting of the values it accepts.

#[cfg(test)]
mod tests {
    use crate::core::input::*;
    use crate::error::KataError;
    use proptest::prelude::*;

    // Strategy for whitespace a terminal might leave around a value
    prop_compose! {
        fn padding()(s in "[ \t]{0,3}") -> String {
            s
        }
    }

    proptest! {
        #[test]
        fn prop_parse_integer_never_panics(s in ".*") {
            let _ = parse_integer(&s);
        }

        #[test]
        fn prop_parse_radius_never_panics(s in ".*") {
            let _ = parse_radius(&s);
        }

        #[test]
        fn prop_integers_survive_padding(n in any::<i128>(), left in padding(), right in padding()) {
            let line = format!("{left}{n}{right}\n");
            prop_assert_eq!(parse_integer(&line).unwrap(), n);
        }

        #[test]
        fn prop_non_negative_radius_accepted(r in 0.0f64..1.0e12) {
            prop_assert_eq!(parse_radius(&r.to_string()).unwrap(), r);
        }

        #[test]
        fn prop_negative_radius_rejected(r in -1.0e12f64..-1.0e-9) {
            let is_negative_radius = matches!(
                parse_radius(&r.to_string()),
                Err(KataError::NegativeRadius { .. })
            );
            prop_assert!(is_negative_radius);
        }

        #[test]
        fn prop_alphabetic_input_is_not_an_integer(s in "[a-zA-Z]{1,12}") {
            let is_not_integer = matches!(parse_integer(&s), Err(KataError::NotInteger { .. }));
            prop_assert!(is_not_integer);
        }
    }
}
