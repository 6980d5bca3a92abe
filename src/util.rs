/// The height a tree holding `size` items has to stay under to count as balanced:
/// `2 * log2(size + 1) - 1`.
///
/// This is a heuristic carried over from the search-cost tooling. It is looser than the AVL rule
/// (children heights differing by at most one) and doesn't guarantee anything structural.
pub(crate) fn balance_limit(size: usize) -> f64 {
    2.0 * ((size + 1) as f64).log2() - 1.0
}

/// The tallest a tree of `size` distinct items can be right after a median rebuild:
/// `ceil(log2(size + 1))`. Empty trees report `-1`.
#[cfg(test)]
pub(crate) fn rebalanced_height_bound(size: usize) -> i64 {
    if size == 0 {
        return -1;
    }
    // Number of bits needed for `size`, i.e. ceil(log2(size + 1)).
    (usize::BITS - size.leading_zeros()) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_limit_grows_with_size() {
        for (size, limit) in [(0, -1.0), (1, 1.0), (3, 3.0), (7, 5.0)] {
            assert!((balance_limit(size) - limit).abs() < 1e-9);
        }
    }

    #[test]
    fn rebalanced_height_bound_is_ceil_log2() {
        assert_eq!(rebalanced_height_bound(0), -1);
        assert_eq!(rebalanced_height_bound(1), 1);
        assert_eq!(rebalanced_height_bound(2), 2);
        assert_eq!(rebalanced_height_bound(3), 2);
        assert_eq!(rebalanced_height_bound(4), 3);
        assert_eq!(rebalanced_height_bound(7), 3);
        assert_eq!(rebalanced_height_bound(8), 4);
    }
}
