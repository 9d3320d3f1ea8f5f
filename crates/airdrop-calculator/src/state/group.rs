use serde::{Deserialize, Serialize};

/**
 * Recipient group configuration
 *
 * A group is a named recipient bucket with an optional fixed headcount and a
 * user-assigned share of the airdrop pool. The set of groups, their ids,
 * names, and headcounts are fixed configuration for the lifetime of a run;
 * only `percentage` changes, via user input.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Stable identifier, unique across the group set
    pub id: String,

    /// Display label
    pub name: String,

    /// Fixed headcount of the group
    /// - `None` means the headcount is unknown or not applicable
    ///   (e.g. a group sized by category rather than by user count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,

    /// Share of the airdrop pool, in percent (0-100 by convention)
    /// - Mutable through user input, defaults to 0
    /// - Not constrained to sum to 100 across groups; an excess sum is
    ///   flagged, never blocked
    pub percentage: f64,
}

impl Group {
    /// Group with a known headcount
    pub fn with_user_count(id: &str, name: &str, user_count: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            user_count: Some(user_count),
            percentage: 0.0,
        }
    }

    /// Group without a headcount (sized by category)
    pub fn without_user_count(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            user_count: None,
            percentage: 0.0,
        }
    }

    /// The reference deployment's group roster
    pub fn reference_roster() -> Vec<Group> {
        vec![
            Group::with_user_count("stage1", "Stage 1", 25_000),
            Group::with_user_count("stage2", "Stage 2", 3_700),
            Group::with_user_count("stage25", "Stage 2.5", 25_000),
            Group::with_user_count("provers", "Provers", 75),
            Group::with_user_count("discord", "Discord Roles", 500),
            Group::without_user_count("github", "GitHub/Developers"),
        ]
    }
}
