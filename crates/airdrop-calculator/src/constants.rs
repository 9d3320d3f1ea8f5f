/**
 * Calculator Constants
 *
 * This module defines all the constant values used throughout the airdrop
 * calculator. These constants describe the reference deployment: the fixed
 * token supply, display conventions, and the share/export surface.
 */

/// ===== SUPPLY CONSTANTS =====

/// Fixed total token supply (1 billion units)
/// - Immutable for the lifetime of a run
/// - The airdrop pool is derived as a percentage of this value
pub const TOTAL_SUPPLY: f64 = 1_000_000_000.0;

/// Display symbol of the distributed token
pub const TOKEN_SYMBOL: &str = "$PROVE";

/// Display name of the project running the airdrop
pub const PROJECT_NAME: &str = "Succinct";

/// ===== ALLOCATION CONSTANTS =====

/// Upper bound of a full allocation, in percent
/// - Group shares summing strictly above this raise the over-allocation flag
/// - Advisory only: the flag never blocks or alters the arithmetic
pub const FULL_ALLOCATION_PERCENT: f64 = 100.0;

/// ===== SHARE / EXPORT CONSTANTS =====

/// Base URL of the share-intent compose flow
/// - The share text is appended as a percent-encoded `text` query parameter
pub const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Hashtag footer appended to every share text
pub const SHARE_HASHTAGS: &str = "#Succinct #Airdrop #PROVE";

/// Fixed width, in pixels, of the off-screen results card used for capture
/// - The capture always renders a fully laid-out copy at this width,
///   never the on-screen (possibly scrolled or cropped) copy
pub const CAPTURE_WIDTH: u32 = 600;

/// Pixel-density multiplier applied during capture
pub const CAPTURE_SCALE: u32 = 2;

/// Background color of the captured results card
pub const CAPTURE_BACKGROUND: &str = "#faf5ff";
