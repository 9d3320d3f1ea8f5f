pub mod constants;
pub mod engine;
pub mod error;
pub mod share;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use error::ExportError;
pub use share::{CapturedImage, ImageExporter, RenderRow, RenderView, SharePayload};
pub use state::{AllocationModel, CalculationOutcome, Group, GroupResult};

/**
 * Airdrop Allocation Calculator
 *
 * A headless engine for modeling a hypothetical token-airdrop distribution:
 * the user reserves a percentage of a fixed total supply for the airdrop,
 * splits the reserved pool across a fixed roster of named recipient groups by
 * percentage, and the engine derives per-group token amounts and per-user
 * averages, plus a shareable summary of the result.
 *
 * Key properties:
 * - Every engine operation is total: malformed numeric input degrades to
 *   zero, nothing is clamped, and no calculation can fail
 * - Results are derived only on an explicit calculation, never reactively,
 *   and each calculation replaces the previous outcome wholesale
 * - Over-allocation (group shares summing above 100%) is flagged, never
 *   blocked; the arithmetic proceeds unclamped
 * - Image capture for sharing is an injected port; any capture failure
 *   degrades silently to a text-only share
 *
 * Architecture:
 * - `state`: the allocation model (the only stateful data) and the derived
 *   result types
 * - `engine`: pure derivation of the distribution from the model
 * - `share`: share text, intent URL, capture port, link-preview document
 * - `utils`: display formatting (rounding lives here, not in the engine)
 *
 * Workflow:
 * 1. Host creates an `AllocationModel` (fixed supply, fixed group roster)
 * 2. User edits the airdrop percentage and per-group shares (raw text,
 *    zero-default parsing)
 * 3. User triggers a calculation; the model derives a `CalculationOutcome`
 * 4. Host optionally packages the outcome for sharing, with or without an
 *    image-capture backend
 */

/// Runs one calculation over the model
///
/// Equivalent to `model.recompute()`; exposed as a free function so the
/// engine can be driven without going through the model type.
pub fn calculate(model: &AllocationModel) -> CalculationOutcome {
    engine::run_calculation(model)
}

/// Packages the most recent outcome into a shareable payload
///
/// Pass `None` when the runtime has no capture capability; the payload then
/// carries the text and intent URL only.
pub fn package_share(
    outcome: &CalculationOutcome,
    exporter: Option<&dyn ImageExporter>,
) -> SharePayload {
    share::share(outcome, exporter)
}
