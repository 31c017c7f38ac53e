//! Form thresholds and reset policy

use crate::error::ConfigError;
use crate::physics::FrameAngles;

/// Elbow angle above which the arms count as locked out (top of the rep)
pub const ELBOW_LOCKOUT: f32 = 160.0;

/// Shoulder angle the top position must exceed
pub const SHOULDER_MIN: f32 = 40.0;

/// Hip angle both phases must exceed (straight body, no sagging or piking)
pub const HIP_MIN: f32 = 160.0;

/// Elbow angle at or below which the bottom of the rep is reached
pub const ELBOW_BOTTOM: f32 = 90.0;

/// Angle thresholds (degrees) that define good push-up form
///
/// Comparisons are fixed: lockout, shoulder and hip use strict `>`, the
/// bottom elbow check uses `<=`. Only the numbers are tunable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormThresholds {
    pub elbow_lockout: f32,
    pub shoulder_min: f32,
    pub hip_min: f32,
    pub elbow_bottom: f32,
}

impl FormThresholds {
    pub fn new(elbow_lockout: f32, shoulder_min: f32, hip_min: f32, elbow_bottom: f32) -> Self {
        Self {
            elbow_lockout,
            shoulder_min,
            hip_min,
            elbow_bottom,
        }
    }

    /// Check every threshold is a usable angle and the elbow range is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("elbow_lockout", self.elbow_lockout),
            ("shoulder_min", self.shoulder_min),
            ("hip_min", self.hip_min),
            ("elbow_bottom", self.elbow_bottom),
        ];

        for (name, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name });
            }
            if !(0.0..=180.0).contains(&value) {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }

        if self.elbow_bottom >= self.elbow_lockout {
            return Err(ConfigError::EmptyRange {
                bottom: self.elbow_bottom,
                lockout: self.elbow_lockout,
            });
        }

        Ok(())
    }

    /// Top position: arms straight, shoulders open, body straight
    pub fn is_locked_out(&self, angles: &FrameAngles) -> bool {
        angles.elbow > self.elbow_lockout
            && angles.shoulder > self.shoulder_min
            && angles.hip > self.hip_min
    }

    /// Bottom position: elbows bent far enough with the body still straight
    pub fn is_bottom(&self, angles: &FrameAngles) -> bool {
        angles.elbow <= self.elbow_bottom && angles.hip > self.hip_min
    }
}

impl Default for FormThresholds {
    fn default() -> Self {
        Self::new(ELBOW_LOCKOUT, SHOULDER_MIN, HIP_MIN, ELBOW_BOTTOM)
    }
}

/// What an external reset clears besides the rep count
///
/// The default clears only the count; direction and the form latch survive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetPolicy {
    /// Return direction to Down
    pub direction: bool,
    /// Drop the form latch so lockout must be shown again
    pub form: bool,
}
