//! Property-based tests for distribution reduction.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::DistributionService;
use super::types::DistributionSlice;

/// Strategy to generate non-negative slice sets (the true subset-sum domain).
fn non_negative_slices() -> impl Strategy<Value = Vec<DistributionSlice>> {
    prop::collection::vec(
        ((0i64..1_000_000_000i64), "[A-Z][a-z]{0,6}"),
        0..40,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(cents, name)| DistributionSlice::new(name, Decimal::new(cents, 2)))
            .collect()
    })
}

/// Strategy to generate keep counts, including zero and over-length values.
fn keep_count() -> impl Strategy<Value = usize> {
    0usize..60
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* non-negative slices and any `n >= 0`, the reduced output
    /// SHALL sum to exactly the input total.
    #[test]
    fn prop_reduction_conserves_total(slices in non_negative_slices(), n in keep_count()) {
        let input_total: Decimal = slices.iter().map(|s| s.value).sum();
        let reduced = DistributionService::top_n_plus_other(slices, n);
        let output_total: Decimal = reduced.iter().map(|s| s.value).sum();

        prop_assert_eq!(
            output_total, input_total,
            "Reduction must conserve the total exactly"
        );
    }

    /// *For any* slices, the output SHALL contain at most `n + 1` slices and
    /// never more than the input had.
    #[test]
    fn prop_reduction_bounds_length(slices in non_negative_slices(), n in keep_count()) {
        let input_len = slices.len();
        let reduced = DistributionService::top_n_plus_other(slices, n);

        prop_assert!(reduced.len() <= n + 1);
        prop_assert!(reduced.len() <= input_len.max(n));
    }

    /// *For any* slices, the kept slices SHALL be the `n` largest values in
    /// descending order.
    #[test]
    fn prop_reduction_keeps_the_largest(slices in non_negative_slices(), n in keep_count()) {
        let mut expected: Vec<Decimal> = slices.iter().map(|s| s.value).collect();
        expected.sort_by(|a, b| b.cmp(a));
        expected.truncate(n);

        let reduced = DistributionService::top_n_plus_other(slices, n);
        let kept: Vec<Decimal> = reduced
            .iter()
            .take(expected.len())
            .map(|s| s.value)
            .collect();

        prop_assert_eq!(kept, expected, "Kept slices must be the n largest, descending");
    }

    /// *For any* slices and `n`, reducing twice SHALL produce identical
    /// output.
    #[test]
    fn prop_reduction_deterministic(slices in non_negative_slices(), n in keep_count()) {
        prop_assert_eq!(
            DistributionService::top_n_plus_other(slices.clone(), n),
            DistributionService::top_n_plus_other(slices, n)
        );
    }

    /// *For any* value, the share of a non-positive total SHALL be zero, and
    /// the share of the value in itself SHALL be 100.
    #[test]
    fn prop_share_zero_guard(cents in -1_000_000_000i64..1_000_000_000i64) {
        let value = Decimal::new(cents, 2);
        prop_assert_eq!(DistributionService::share_pct(value, Decimal::ZERO), Decimal::ZERO);
        prop_assert_eq!(DistributionService::share_pct(value, Decimal::NEGATIVE_ONE), Decimal::ZERO);

        if value > Decimal::ZERO {
            prop_assert_eq!(
                DistributionService::share_pct(value, value),
                Decimal::ONE_HUNDRED.round_dp(2)
            );
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::distribution::types::{OTHER_LABEL, PercentCap};

    fn slices(values: &[i64]) -> Vec<DistributionSlice> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DistributionSlice::new(format!("Dept {i}"), Decimal::from(*v)))
            .collect()
    }

    #[test]
    fn test_twelve_departments_reduced_to_seven_plus_other() {
        let input = slices(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5, 1]);
        let total: Decimal = input.iter().map(|s| s.value).sum();

        let reduced = DistributionService::top_n_plus_other(input, 7);

        assert_eq!(reduced.len(), 8);
        let kept: Vec<Decimal> = reduced[..7].iter().map(|s| s.value).collect();
        assert_eq!(
            kept,
            vec![
                dec!(100),
                dec!(90),
                dec!(80),
                dec!(70),
                dec!(60),
                dec!(50),
                dec!(40)
            ]
        );
        assert_eq!(reduced[7].name, OTHER_LABEL);
        assert_eq!(reduced[7].value, dec!(66));
        assert_eq!(reduced.iter().map(|s| s.value).sum::<Decimal>(), total);
    }

    #[test]
    fn test_short_input_passes_through_sorted() {
        let reduced = DistributionService::top_n_plus_other(slices(&[10, 30, 20]), 7);
        let values: Vec<Decimal> = reduced.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![dec!(30), dec!(20), dec!(10)]);
        assert!(reduced.iter().all(|s| s.name != OTHER_LABEL));
    }

    #[test]
    fn test_zero_keep_count_folds_everything() {
        let reduced = DistributionService::top_n_plus_other(slices(&[10, 20]), 0);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].name, OTHER_LABEL);
        assert_eq!(reduced[0].value, dec!(30));
    }

    #[test]
    fn test_zero_remainder_omits_other() {
        let reduced = DistributionService::top_n_plus_other(slices(&[10, 0, 0]), 1);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].value, dec!(10));
    }

    #[test]
    fn test_negative_remainder_omits_other_and_diverges_from_total() {
        // A refund-only tail is dropped from display; the output total
        // intentionally exceeds the input total here.
        let input = vec![
            DistributionSlice::new("Roads", dec!(10)),
            DistributionSlice::new("Refunds", dec!(-5)),
        ];
        let reduced = DistributionService::top_n_plus_other(input, 1);

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].name, "Roads");
        assert_eq!(reduced.iter().map(|s| s.value).sum::<Decimal>(), dec!(10));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            DistributionSlice::new("First", dec!(50)),
            DistributionSlice::new("Second", dec!(50)),
            DistributionSlice::new("Third", dec!(50)),
        ];
        let reduced = DistributionService::top_n_plus_other(input, 2);

        assert_eq!(reduced[0].name, "First");
        assert_eq!(reduced[1].name, "Second");
        assert_eq!(reduced[2].name, OTHER_LABEL);
        assert_eq!(reduced[2].value, dec!(50));
    }

    #[test]
    fn test_share_pct_rounds_to_two_places() {
        assert_eq!(DistributionService::share_pct(dec!(1), dec!(3)), dec!(33.33));
    }

    #[test]
    fn test_share_pct_uncapped_above_total() {
        assert_eq!(DistributionService::share_pct(dec!(150), dec!(100)), dec!(150.00));
    }

    #[test]
    fn test_percent_cap_variants() {
        assert_eq!(PercentCap::Uncapped.apply(dec!(1250)), dec!(1250));
        assert_eq!(PercentCap::Hundred.apply(dec!(120)), dec!(100));
        assert_eq!(PercentCap::Hundred.apply(dec!(80)), dec!(80));
        assert_eq!(PercentCap::Custom(dec!(999)).apply(dec!(1250)), dec!(999));
        assert_eq!(PercentCap::Custom(dec!(999)).apply(dec!(120)), dec!(120));
    }
}
