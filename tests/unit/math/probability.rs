//! Tests for cumulative weight tables and weighted lookup

#[cfg(test)]
mod tests {
    use edgeweave::math::probability::{cumulative_weights, locate_weighted, weight_at};

    // Tests running totals accumulate in order
    // Verified by resetting the running total on each entry
    #[test]
    fn test_cumulative_weights() {
        assert_eq!(cumulative_weights([3, 1, 2]), vec![3, 4, 6]);
        assert!(cumulative_weights(Vec::new()).is_empty());
    }

    // Tests each unit maps to the entry whose interval contains it
    // Verified by using < instead of <= in the partition predicate
    #[test]
    fn test_locate_weighted_intervals() {
        let cumulative = cumulative_weights([3, 1, 2]);

        let located: Vec<_> = (0..6)
            .map(|unit| locate_weighted(&cumulative, unit))
            .collect();
        assert_eq!(
            located,
            vec![Some(0), Some(0), Some(0), Some(1), Some(2), Some(2)]
        );
        assert_eq!(locate_weighted(&cumulative, 6), None);
    }

    // Tests zero-weight entries own no units
    // Verified by treating the interval end as inclusive
    #[test]
    fn test_zero_weight_never_located() {
        let cumulative = cumulative_weights([2, 0, 1]);

        assert!((0..3).all(|unit| locate_weighted(&cumulative, unit) != Some(1)));
        assert_eq!(weight_at(&cumulative, 1), 0);
    }

    // Tests weights are recovered from the cumulative table
    // Verified by returning the cumulative entry itself
    #[test]
    fn test_weight_at() {
        let cumulative = cumulative_weights([3, 1, 2]);

        assert_eq!(weight_at(&cumulative, 0), 3);
        assert_eq!(weight_at(&cumulative, 1), 1);
        assert_eq!(weight_at(&cumulative, 2), 2);
        assert_eq!(weight_at(&cumulative, 3), 0);
    }
}
