//! Rep progress from elbow angle
//!
//! Linear map of the elbow angle between the bottom and lockout thresholds.
//! Neither value is clamped: past-the-threshold frames read below 0% or
//! above 100%, and the phase checks treat them the same as the boundary.

use super::thresholds::FormThresholds;

/// Top of the progress bar track in canvas pixels, the bar value at 0%
pub const BAR_TOP: f32 = 50.0;

/// Bottom of the progress bar track in canvas pixels, the bar value at 100%
pub const BAR_BOTTOM: f32 = 380.0;

/// Fraction of the way from bottom to lockout, 0.0 at bottom, 1.0 at lockout
fn elbow_fraction(elbow: f32, thresholds: &FormThresholds) -> f32 {
    (elbow - thresholds.elbow_bottom) / (thresholds.elbow_lockout - thresholds.elbow_bottom)
}

/// Rep progress in percent (0% = bottom, 100% = top)
pub fn progress_percent(elbow: f32, thresholds: &FormThresholds) -> f32 {
    elbow_fraction(elbow, thresholds) * 100.0
}

/// Fill start of the progress bar: the renderer fills from here down to BAR_BOTTOM
pub fn progress_bar(elbow: f32, thresholds: &FormThresholds) -> f32 {
    elbow_fraction(elbow, thresholds) * (BAR_BOTTOM - BAR_TOP) + BAR_TOP
}
