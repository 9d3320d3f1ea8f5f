use serde::{Deserialize, Serialize};

use crate::constants::{FULL_ALLOCATION_PERCENT, TOTAL_SUPPLY};
use crate::engine;
use crate::state::{CalculationOutcome, Group};

/**
 * Allocation model
 *
 * The only stateful data in the calculator. It holds the fixed total supply,
 * the raw airdrop-percentage input, and the configured recipient groups.
 *
 * Lifecycle:
 * 1. Created once per session with a fixed group roster
 * 2. Mutated by the two input transitions (airdrop percentage, group share)
 * 3. Read by the explicit `recompute` transition, which derives a fresh
 *    `CalculationOutcome`
 * 4. Discarded when the session ends; nothing is persisted
 *
 * Input transitions never trigger a recalculation on their own; results only
 * change when `recompute` is invoked.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationModel {
    /// Fixed total token supply, immutable for the run
    pub total_supply: f64,

    /// Raw text of the overall airdrop-percentage field
    /// - Kept as entered; parsed with the zero-default rule at calculation
    ///   and display time, so malformed input never errors
    pub airdrop_percentage_input: String,

    /// Configured recipient groups, in display order
    /// - The set, ids, names, and headcounts are fixed; only each group's
    ///   `percentage` is mutable, through `set_group_percentage`
    pub groups: Vec<Group>,
}

impl AllocationModel {
    /// Model over the reference deployment: 1B supply, reference roster
    pub fn reference() -> Self {
        Self::new(TOTAL_SUPPLY, Group::reference_roster())
    }

    pub fn new(total_supply: f64, groups: Vec<Group>) -> Self {
        Self {
            total_supply,
            airdrop_percentage_input: String::new(),
            groups,
        }
    }

    /// Input transition: overwrite the raw airdrop-percentage text
    pub fn set_airdrop_percentage(&mut self, input: &str) {
        self.airdrop_percentage_input = input.to_string();
    }

    /// Input transition: set one group's share from raw text
    ///
    /// The text is parsed immediately with the zero-default rule, matching
    /// the per-keystroke behavior of the input field. Returns false when no
    /// group has the given id; the model is left unchanged in that case.
    pub fn set_group_percentage(&mut self, id: &str, input: &str) -> bool {
        let value = engine::parse_percentage(input);
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => {
                group.percentage = value;
                true
            }
            None => false,
        }
    }

    /// The airdrop percentage as currently entered, zero-defaulted
    pub fn airdrop_percentage(&self) -> f64 {
        engine::parse_percentage(&self.airdrop_percentage_input)
    }

    /// Sum of all group shares as currently entered
    pub fn total_allocated_percentage(&self) -> f64 {
        engine::total_allocated_percentage(&self.groups)
    }

    /// True when the group shares currently sum strictly above 100
    pub fn is_over_allocated(&self) -> bool {
        self.total_allocated_percentage() > FULL_ALLOCATION_PERCENT
    }

    /// The single calculation transition
    ///
    /// Derives a fresh outcome from the model as it stands right now. The
    /// returned outcome does not track later model edits; the caller must
    /// recompute explicitly.
    pub fn recompute(&self) -> CalculationOutcome {
        engine::run_calculation(self)
    }
}
