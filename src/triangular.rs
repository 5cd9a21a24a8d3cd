//! Triangular-number sums, `0 + 1 + ... + n`, computed three ways.
//!
//! The closed form is O(1) and exact for every `n` whose sum fits in a `u64`.
//! The iterative form is O(n), and the recursive form also uses O(n) stack,
//! so compare them only on small inputs.

/// Closed form `n * (n + 1) / 2`.
pub fn sum_to_n_closed_form(n: u64) -> u64 {
    // One of n, n + 1 is even, so halve it before multiplying.
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * ((n + 1) / 2)
    }
}

pub fn sum_to_n_iterative(n: u64) -> u64 {
    (0..=n).sum()
}

/// Recursion depth is `n`; keep inputs small.
pub fn sum_to_n_recursive(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        n + sum_to_n_recursive(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(sum_to_n_closed_form(100), 5050);
        assert_eq!(sum_to_n_iterative(100), 5050);
        assert_eq!(sum_to_n_recursive(100), 5050);
        assert_eq!(sum_to_n_closed_form(1000), 500500);
        assert_eq!(sum_to_n_iterative(1000), 500500);
        assert_eq!(sum_to_n_recursive(1000), 500500);
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(sum_to_n_closed_form(0), 0);
        assert_eq!(sum_to_n_recursive(0), 0);
        assert_eq!(sum_to_n_iterative(1), 1);
    }

    #[test]
    fn variants_agree() {
        for n in 0..=2000 {
            let expected = sum_to_n_closed_form(n);
            assert_eq!(sum_to_n_iterative(n), expected, "iterative n={n}");
            assert_eq!(sum_to_n_recursive(n), expected, "recursive n={n}");
        }
    }

    #[test]
    fn closed_form_does_not_overflow_early() {
        // n * (n + 1) alone would overflow here.
        let n = 4_294_967_296;
        assert_eq!(sum_to_n_closed_form(n), 9_223_372_039_002_259_456);
    }
}
