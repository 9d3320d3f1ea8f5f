use serde::{Deserialize, Serialize};

/**
 * Derived calculation results
 *
 * These types are a pure function of the allocation model at the moment the
 * calculation is invoked. They never update reactively as the model changes
 * afterwards: each calculation replaces the previous outcome wholesale, and
 * nothing is persisted across sessions.
 */

/// Per-group slice of the airdrop pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResult {
    /// Display label of the group
    pub group_name: String,

    /// The group's share, in percent, as entered at calculation time
    pub percentage: f64,

    /// Absolute token amount allocated to the group
    pub total_tokens: f64,

    /// Fixed headcount of the group, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,

    /// Average tokens per user
    /// - Present only when the headcount is known and strictly positive;
    ///   absent otherwise (not zero, not null), signaling "not applicable"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_per_user: Option<f64>,
}

/// Complete outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutcome {
    /// Overall airdrop percentage used for this calculation
    pub airdrop_percentage: f64,

    /// Tokens reserved for the airdrop pool
    /// - `(airdrop_percentage / 100) * total_supply`
    pub airdrop_tokens: f64,

    /// One entry per configured group, in configuration order
    pub results: Vec<GroupResult>,

    /// Sum of all group percentages at calculation time
    pub total_allocated_percentage: f64,

    /// True when the group percentages sum strictly above 100
    /// - Advisory only; the per-group amounts above are still computed
    ///   normally with no clamping
    pub over_allocated: bool,

    /// Sum of all per-group token amounts
    pub total_allocated_tokens: f64,

    /// Pool remainder: `airdrop_tokens - total_allocated_tokens`
    /// - Negative when over-allocated
    pub remaining_tokens: f64,
}
