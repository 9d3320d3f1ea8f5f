use crate::constants::FULL_ALLOCATION_PERCENT;
use crate::state::{AllocationModel, CalculationOutcome, Group, GroupResult};

/**
 * Allocation Engine
 *
 * Pure derivation of the airdrop distribution from the allocation model.
 * Every operation in this module is total: malformed numeric input degrades
 * to zero, no value is clamped, and nothing here can fail or produce a side
 * effect. Rounding belongs to the formatting layer; all arithmetic here is
 * real-valued.
 */

/// Parses a percentage input field with the zero-default rule
///
/// The longest leading numeric prefix of the trimmed input is taken
/// (optional sign, decimal point, exponent), so `"12.5"`, `" 7"`, and
/// `"3abc"` parse as expected while empty or non-numeric text yields 0.
/// Never an error: a text field must not be able to break the calculation.
pub fn parse_percentage(input: &str) -> f64 {
    let s = input.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return 0.0;
    }

    // Exponent is consumed only when it carries at least one digit,
    // so "2e" still parses as 2.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/**
 * Derives the airdrop pool size from the overall percentage
 *
 * @param total_supply - Fixed total token supply
 * @param airdrop_percentage - User-entered percentage of the supply
 *
 * No clamping is performed: values above 100 or below 0 propagate
 * arithmetically. Range restriction, if any, is the input surface's business.
 */
pub fn compute_airdrop_pool(total_supply: f64, airdrop_percentage: f64) -> f64 {
    (airdrop_percentage / 100.0) * total_supply
}

/**
 * Derives the per-group results from the airdrop pool
 *
 * @param groups - Configured groups, in display order
 * @param airdrop_tokens - Pool size from `compute_airdrop_pool`
 *
 * Produces one result per group, same order and cardinality, no filtering.
 * The average per user is present only when the group's headcount is known
 * and strictly positive; otherwise the field is absent, signaling "not
 * applicable".
 */
pub fn compute_group_results(groups: &[Group], airdrop_tokens: f64) -> Vec<GroupResult> {
    groups
        .iter()
        .map(|group| {
            let total_tokens = (group.percentage / 100.0) * airdrop_tokens;
            let average_per_user = match group.user_count {
                Some(count) if count > 0 => Some(total_tokens / count as f64),
                _ => None,
            };
            GroupResult {
                group_name: group.name.clone(),
                percentage: group.percentage,
                total_tokens,
                user_count: group.user_count,
                average_per_user,
            }
        })
        .collect()
}

/// Sum of all group shares, in percent
pub fn total_allocated_percentage(groups: &[Group]) -> f64 {
    groups.iter().map(|g| g.percentage).sum()
}

/**
 * Runs one full calculation over the model
 *
 * Composes the pool derivation, the per-group results, and the aggregate
 * totals into a single outcome. The outcome is a pure function of the model
 * at this moment; later model edits require an explicit recalculation.
 */
pub fn run_calculation(model: &AllocationModel) -> CalculationOutcome {
    let airdrop_percentage = parse_percentage(&model.airdrop_percentage_input);
    let airdrop_tokens = compute_airdrop_pool(model.total_supply, airdrop_percentage);
    let results = compute_group_results(&model.groups, airdrop_tokens);

    let total_allocated_percentage = total_allocated_percentage(&model.groups);
    let total_allocated_tokens: f64 = results.iter().map(|r| r.total_tokens).sum();

    CalculationOutcome {
        airdrop_percentage,
        airdrop_tokens,
        results,
        total_allocated_percentage,
        over_allocated: total_allocated_percentage > FULL_ALLOCATION_PERCENT,
        total_allocated_tokens,
        remaining_tokens: airdrop_tokens - total_allocated_tokens,
    }
}
