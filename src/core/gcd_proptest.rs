//! Property-based tests for the Euclidean GCD

#[cfg(test)]
mod tests {
    use crate::core::gcd::gcd;
    use proptest::prelude::*;

    const BOUND: i128 = 1_000_000_000;

    proptest! {
        #[test]
        fn prop_gcd_divides_both(a in -BOUND..BOUND, b in -BOUND..BOUND) {
            prop_assume!(a != 0 || b != 0);
            let g = gcd(a, b);
            prop_assert_ne!(g, 0);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn prop_gcd_is_greatest(a in -BOUND..BOUND, b in -BOUND..BOUND) {
            prop_assume!(a != 0 || b != 0);
            let g = gcd(a, b);
            // After dividing out the gcd nothing is left in common
            prop_assert_eq!(gcd(a / g, b / g).abs(), 1);
        }

        #[test]
        fn prop_gcd_symmetric_in_magnitude(a in -BOUND..BOUND, b in -BOUND..BOUND) {
            prop_assert_eq!(gcd(a, b).abs(), gcd(b, a).abs());
            prop_assert_eq!(gcd(a, b).abs(), gcd(a.abs(), b.abs()));
        }

        #[test]
        fn prop_gcd_with_zero_is_identity(a in any::<i128>()) {
            prop_assert_eq!(gcd(a, 0), a);
        }

        #[test]
        fn prop_gcd_positive_for_positive_divisor(a in -BOUND..BOUND, b in 1..BOUND) {
            prop_assert!(gcd(a, b) > 0);
        }

        #[test]
        fn prop_gcd_non_negative_for_non_negative_inputs(a in 0..BOUND, b in 0..BOUND) {
            prop_assert!(gcd(a, b) >= 0);
        }
    }
}
