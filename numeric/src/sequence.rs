/// n-th Fibonacci number with `fibonacci(0) == 0` and `fibonacci(1) == 1`.
///
/// Runs the two-accumulator recurrence in O(n). Any `n <= 1`, negative
/// values included, is returned unchanged. Terms past `fibonacci(92)` wrap.
pub fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

/// `n!` accumulated into a wrapping 64-bit integer.
///
/// `n <= 1` (negative included) yields 1. Results past `20!` silently wrap;
/// callers that need the exact value must not rely on this.
pub fn factorial(n: i64) -> i64 {
    if n <= 1 {
        return 1;
    }
    (2..=n).fold(1i64, |acc, k| acc.wrapping_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_small_terms() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(20), 6765);
    }

    #[test]
    fn test_fibonacci_negative_is_identity() {
        assert_eq!(fibonacci(-1), -1);
        assert_eq!(fibonacci(-42), -42);
    }

    #[test]
    fn test_fibonacci_largest_exact_term() {
        assert_eq!(fibonacci(92), 7_540_113_804_746_346_429);
    }

    #[test]
    fn test_fibonacci_wraps_past_i64() {
        let expected = fibonacci(91).wrapping_add(fibonacci(92));
        assert_eq!(fibonacci(93), expected);
        assert!(fibonacci(93) < 0);
    }

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(-7), 1);
    }

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_wraps_past_twenty() {
        assert_eq!(factorial(21), factorial(20).wrapping_mul(21));
    }
}
