/// Degrees in one full turn of the wheel.
pub const FULL_TURN: f64 = 360.0;

/// Tolerance used when comparing accumulated angles.
pub const ANGLE_EPSILON: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Preference scale
// ─────────────────────────────────────────────────────────────────────────────

/// Lowest preference a dish may carry.
pub const MIN_PREFERENCE: u8 = 1;

/// Highest preference a dish may carry.
pub const MAX_PREFERENCE: u8 = 10;

/// Preference pre-selected when adding a custom dish.
pub const DEFAULT_PREFERENCE: u8 = 5;

/// Upper bound (inclusive) of each preference tier and its label.
pub const PREFERENCE_TIERS: [(u8, &str); 4] = [
    (3, "disliked"),
    (5, "okay"),
    (7, "liked"),
    (MAX_PREFERENCE, "favorite"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Spin presentation defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Wall-clock length of the spin animation.
pub const DEFAULT_SPIN_MS: u64 = 4000;

/// Wall-clock length of the winner highlight pulse.
pub const DEFAULT_PULSE_MS: u64 = 5000;

/// Delay between animation frames (~60 fps).
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Full turns added to every spin, chosen uniformly in this range.
pub const DEFAULT_MIN_TURNS: u32 = 5;
pub const DEFAULT_MAX_TURNS: u32 = 8;

/// Highlight intensity oscillates around this base value...
pub const HIGHLIGHT_ALPHA_BASE: f64 = 0.3;

/// ...with this amplitude.
pub const HIGHLIGHT_ALPHA_AMPLITUDE: f64 = 0.3;

/// Label for a preference value.
pub fn preference_tier(preference: u8) -> &'static str {
    PREFERENCE_TIERS
        .iter()
        .find(|(upper, _)| preference <= *upper)
        .map(|(_, name)| *name)
        .unwrap_or("favorite")
}
