use crate::constants::TOTAL_SUPPLY;
use crate::engine::{
    compute_airdrop_pool, compute_group_results, parse_percentage, total_allocated_percentage,
};
use crate::state::{AllocationModel, Group};

/// Relative tolerance for floating-point comparisons
const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= EPSILON * scale,
        "expected {expected}, got {actual}"
    );
}

/// Reference model with a 10% airdrop and a spread of group shares
fn sample_model() -> AllocationModel {
    let mut model = AllocationModel::reference();
    model.set_airdrop_percentage("10");
    model.set_group_percentage("stage1", "25");
    model.set_group_percentage("stage2", "10");
    model.set_group_percentage("github", "5");
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airdrop_pool_formula() {
        // Exact up to floating-point tolerance for a spread of inputs
        for (supply, percentage) in [
            (TOTAL_SUPPLY, 10.0),
            (TOTAL_SUPPLY, 0.0),
            (TOTAL_SUPPLY, 100.0),
            (500_000.0, 2.5),
            (1.0, 33.33),
        ] {
            assert_close(
                compute_airdrop_pool(supply, percentage),
                percentage / 100.0 * supply,
            );
        }
    }

    #[test]
    fn test_reference_scenario() {
        // 10% of 1B reserved; Stage 1 takes 25% across 25,000 users
        let outcome = sample_model().recompute();
        assert_close(outcome.airdrop_tokens, 100_000_000.0);

        let stage1 = &outcome.results[0];
        assert_eq!(stage1.group_name, "Stage 1");
        assert_close(stage1.total_tokens, 25_000_000.0);
        assert_eq!(stage1.user_count, Some(25_000));
        assert_close(stage1.average_per_user.unwrap(), 1_000.0);
    }

    #[test]
    fn test_group_without_headcount_has_no_average() {
        let outcome = sample_model().recompute();

        let github = outcome
            .results
            .iter()
            .find(|r| r.group_name == "GitHub/Developers")
            .unwrap();
        assert_close(github.total_tokens, 0.05 * outcome.airdrop_tokens);
        assert_eq!(github.user_count, None);
        // Absent, not zero: no headcount means the average is not applicable
        assert_eq!(github.average_per_user, None);
    }

    #[test]
    fn test_malformed_airdrop_input_degrades_to_zero() {
        let mut model = sample_model();
        for input in ["", "   ", "abc", "NaN", "%", "..", "e5"] {
            model.set_airdrop_percentage(input);
            let outcome = model.recompute();
            assert_eq!(outcome.airdrop_percentage, 0.0, "input {input:?}");
            assert_eq!(outcome.airdrop_tokens, 0.0);
            // Group shares are still entered, but the pool is empty
            for result in &outcome.results {
                assert_eq!(result.total_tokens, 0.0);
            }
        }
    }

    #[test]
    fn test_parse_percentage_prefix_rules() {
        assert_eq!(parse_percentage("12.5"), 12.5);
        assert_eq!(parse_percentage(" 7 "), 7.0);
        assert_eq!(parse_percentage("3abc"), 3.0);
        assert_eq!(parse_percentage("2e"), 2.0);
        assert_eq!(parse_percentage("1e2"), 100.0);
        assert_eq!(parse_percentage("1e+1"), 10.0);
        assert_eq!(parse_percentage("-5"), -5.0);
        assert_eq!(parse_percentage("+4.25"), 4.25);
        assert_eq!(parse_percentage(".5"), 0.5);
        assert_eq!(parse_percentage("-"), 0.0);
        assert_eq!(parse_percentage("."), 0.0);
    }

    #[test]
    fn test_zero_share_groups() {
        let groups = vec![
            Group::with_user_count("a", "A", 100),
            Group::without_user_count("b", "B"),
        ];
        let results = compute_group_results(&groups, 1_000_000.0);

        // Zero share yields zero tokens for both groups
        assert_eq!(results[0].total_tokens, 0.0);
        assert_eq!(results[1].total_tokens, 0.0);
        // Average is present (and zero) only where a positive headcount exists
        assert_eq!(results[0].average_per_user, Some(0.0));
        assert_eq!(results[1].average_per_user, None);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let model = sample_model();
        let first = model.recompute();
        let second = model.recompute();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_share_increase_is_isolated() {
        let mut model = sample_model();
        let before = model.recompute();

        model.set_group_percentage("stage2", "15");
        let after = model.recompute();

        // The edited group strictly gains; every other group is untouched
        assert!(after.results[1].total_tokens > before.results[1].total_tokens);
        for (i, (b, a)) in before.results.iter().zip(after.results.iter()).enumerate() {
            if i != 1 {
                assert_eq!(b.total_tokens, a.total_tokens);
            }
        }
    }

    #[test]
    fn test_over_allocation_flag_boundary() {
        let mut groups = vec![
            Group::with_user_count("a", "A", 10),
            Group::with_user_count("b", "B", 10),
        ];

        groups[0].percentage = 60.0;
        groups[1].percentage = 40.0;
        let mut model = AllocationModel::new(TOTAL_SUPPLY, groups.clone());
        model.set_airdrop_percentage("10");
        // Exactly 100 is a full allocation, not an over-allocation
        assert!(!model.recompute().over_allocated);

        groups[1].percentage = 40.01;
        let mut model = AllocationModel::new(TOTAL_SUPPLY, groups);
        model.set_airdrop_percentage("10");
        assert!(model.recompute().over_allocated);
    }

    #[test]
    fn test_over_allocation_does_not_clamp() {
        // Shares of 60 and 50 sum to 110; amounts are still computed normally
        let mut model = AllocationModel::new(
            TOTAL_SUPPLY,
            vec![
                Group::with_user_count("a", "A", 100),
                Group::with_user_count("b", "B", 100),
            ],
        );
        model.set_airdrop_percentage("10");
        model.set_group_percentage("a", "60");
        model.set_group_percentage("b", "50");

        let outcome = model.recompute();
        assert_close(outcome.total_allocated_percentage, 110.0);
        assert!(outcome.over_allocated);
        assert_close(outcome.results[0].total_tokens, 60_000_000.0);
        assert_close(outcome.results[1].total_tokens, 50_000_000.0);
        // The remainder goes negative rather than being clipped
        assert!(outcome.remaining_tokens < 0.0);
    }

    #[test]
    fn test_out_of_range_percentages_propagate() {
        // The engine performs no clamping in either direction
        assert_close(compute_airdrop_pool(TOTAL_SUPPLY, 150.0), 1_500_000_000.0);
        assert_close(compute_airdrop_pool(TOTAL_SUPPLY, -10.0), -100_000_000.0);
    }

    #[test]
    fn test_results_preserve_order_and_cardinality() {
        let model = sample_model();
        let outcome = model.recompute();

        assert_eq!(outcome.results.len(), model.groups.len());
        for (group, result) in model.groups.iter().zip(outcome.results.iter()) {
            assert_eq!(group.name, result.group_name);
            assert_eq!(group.user_count, result.user_count);
        }
    }

    #[test]
    fn test_aggregate_totals() {
        let outcome = sample_model().recompute();
        let summed: f64 = outcome.results.iter().map(|r| r.total_tokens).sum();
        assert_close(outcome.total_allocated_tokens, summed);
        assert_close(
            outcome.remaining_tokens,
            outcome.airdrop_tokens - summed,
        );
    }

    #[test]
    fn test_share_sum_helper() {
        let mut groups = Group::reference_roster();
        groups[0].percentage = 12.5;
        groups[3].percentage = 7.5;
        assert_close(total_allocated_percentage(&groups), 20.0);
    }

    #[test]
    fn test_unknown_group_id_is_rejected() {
        let mut model = sample_model();
        let before = model.clone();
        assert!(!model.set_group_percentage("nope", "50"));
        assert_eq!(model, before);
    }
}
