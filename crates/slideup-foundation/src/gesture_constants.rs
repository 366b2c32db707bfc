//! Shared gesture constants.

/// Fraction of the element's extent a release must have dragged past for the
/// slider to commit to hiding instead of springing back.
pub const HIDE_THRESHOLD_FRACTION: f32 = 0.2;

/// Percent reported when the element sits at rest.
pub const SHOWN_PERCENT: f32 = 0.0;

/// Percent reported when the element is fully off-screen.
pub const HIDDEN_PERCENT: f32 = 100.0;
