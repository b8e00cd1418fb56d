/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Remainders are floored, so each one takes the sign of its divisor. With
/// a positive second argument the result is always positive
/// (`gcd(-6, 4) == 2`). `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let remainder = floored_rem(a, b);
        a = b;
        b = remainder;
    }
    a
}

/// `a mod b` rounded towards negative infinity. Never overflows, and
/// `i128::MIN mod -1` is 0.
fn floored_rem(a: i128, b: i128) -> i128 {
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder + b
    } else {
        remainder
    }
}
