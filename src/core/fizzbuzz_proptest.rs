//! Property-based tests for FizzBuzz classification

#[cfg(test)]
mod tests {
    use crate::core::fizzbuzz::{classify, Classification};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_classify_is_idempotent(n in any::<i128>()) {
            prop_assert_eq!(classify(n), classify(n));
            prop_assert_eq!(classify(n).to_string(), classify(n).to_string());
        }

        #[test]
        fn prop_multiples_of_fifteen_are_fizzbuzz(k in -(i128::MAX / 15)..=(i128::MAX / 15)) {
            prop_assert_eq!(classify(k * 15), Classification::FizzBuzz);
        }

        #[test]
        fn prop_classification_matches_divisibility(n in any::<i128>()) {
            let expected = match (n % 3 == 0, n % 5 == 0) {
                (true, true) => "FizzBuzz".to_string(),
                (true, false) => "Fizz".to_string(),
                (false, true) => "Buzz".to_string(),
                (false, false) => n.to_string(),
            };
            prop_assert_eq!(classify(n).to_string(), expected);
        }

        #[test]
        fn prop_numbers_are_echoed_verbatim(n in any::<i128>()) {
            if let Classification::Number(echoed) = classify(n) {
                prop_assert_eq!(echoed, n);
                prop_assert!(n % 3 != 0 && n % 5 != 0);
            }
        }
    }
}
