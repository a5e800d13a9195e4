use tracing::warn;

use crate::limits;

/// In-band sentinel returned when the recursion depth ceiling is reached.
///
/// The sentinel shares the value space of real results: when a ceiling is hit
/// deep in the call tree, ancestors sum it into their own totals, producing an
/// arithmetically wrong but non-crashing output. That conflation is kept on
/// purpose: the guard trades correctness for a hard bound on recursion.
pub const DEPTH_SENTINEL: i64 = -1;

/// Computes Fibonacci(n) via naive recursion under the process-wide depth
/// ceiling ([`limits::MAX_DEPTH`]).
///
/// Callers start at `depth = 0`; the depth is threaded through the recursion
/// and checked before anything else, so even a base-case call above the
/// ceiling returns [`DEPTH_SENTINEL`].
///
/// # Example
/// ```
/// use fibonacci_bounded::guarded;
///
/// assert_eq!(guarded::evaluate(10, 0), 55);
/// ```
pub fn evaluate(n: u64, depth: u32) -> i64 {
    evaluate_with_ceiling(n, depth, limits::MAX_DEPTH)
}

/// Same recursion with an explicit ceiling.
pub fn evaluate_with_ceiling(n: u64, depth: u32, ceiling: u32) -> i64 {
    // Hard stop, not a retry: the ceiling check precedes the base case.
    if depth > ceiling {
        warn!(n, depth, ceiling, "recursion depth ceiling reached");
        return DEPTH_SENTINEL;
    }

    if n <= 1 {
        return n as i64;
    }

    evaluate_with_ceiling(n - 1, depth + 1, ceiling)
        + evaluate_with_ceiling(n - 2, depth + 1, ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib_unguarded(n: u64) -> i64 {
        if n <= 1 {
            return n as i64;
        }
        fib_unguarded(n - 1) + fib_unguarded(n - 2)
    }

    #[test]
    fn evaluate_is_exact_within_the_ceiling() {
        // The deepest path for fib(n) reaches depth n - 1, so every n up to
        // MAX_DEPTH + 1 stays inside the ceiling.
        for n in 0..=10u64 {
            assert_eq!(evaluate(n, 0), fib_unguarded(n), "fib({n})");
        }
    }

    #[test]
    fn raising_the_ceiling_never_changes_an_exact_result() {
        for ceiling in 9..=20 {
            assert_eq!(evaluate_with_ceiling(10, 0, ceiling), 55);
        }
    }

    #[test]
    fn ceiling_hit_is_summed_in_band() {
        // fib(12) needs depth 11; the sentinel bleeds into the total.
        let guarded = evaluate(12, 0);
        let exact = fib_unguarded(12);
        assert!(guarded < exact, "expected a truncated result, got {guarded}");
    }

    #[test]
    fn ceiling_check_precedes_the_base_case() {
        assert_eq!(evaluate_with_ceiling(1, 5, 4), DEPTH_SENTINEL);
        assert_eq!(evaluate_with_ceiling(0, 5, 4), DEPTH_SENTINEL);
    }

    #[test]
    fn truncated_results_never_exceed_the_exact_value() {
        for n in 11..=15u64 {
            assert!(evaluate(n, 0) <= fib_unguarded(n));
        }
    }
}
