//! Push-up session - state machine plus the configuration it runs under
//!
//! Owns the `SessionState` between frames and remembers the last evaluated
//! frame for display. Frames that never reach `process` (no pose, bad data)
//! leave everything here untouched.

use super::machine::{evaluate, FrameOutcome};
use super::progress::progress_bar;
use super::state::SessionState;
use super::thresholds::{FormThresholds, ResetPolicy};
use crate::error::ConfigError;
use crate::physics::FrameAngles;

/// Rep counting session
#[derive(Clone, Debug, Default)]
pub struct PushupSession {
    state: SessionState,
    thresholds: FormThresholds,
    reset_policy: ResetPolicy,
    /// Angles of the last evaluated frame
    last_angles: Option<FrameAngles>,
    /// Progress of the last evaluated frame
    last_percent: f32,
}

impl PushupSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with custom thresholds
    pub fn with_thresholds(thresholds: FormThresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            ..Self::default()
        })
    }

    /// Evaluate one frame and store the new state
    pub fn process(&mut self, angles: &FrameAngles) -> FrameOutcome {
        let outcome = evaluate(self.state, angles, &self.thresholds);
        self.state = outcome.state;
        self.last_angles = Some(*angles);
        self.last_percent = outcome.percent;
        outcome
    }

    /// External reset (UI button). Clears the count and whatever the policy names.
    pub fn reset(&mut self) {
        self.state.reset(self.reset_policy);
    }

    /// Replace thresholds, effective from the next frame
    pub fn set_thresholds(&mut self, thresholds: FormThresholds) -> Result<(), ConfigError> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(())
    }

    pub fn set_reset_policy(&mut self, policy: ResetPolicy) {
        self.reset_policy = policy;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn thresholds(&self) -> &FormThresholds {
        &self.thresholds
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    pub fn last_angles(&self) -> Option<FrameAngles> {
        self.last_angles
    }

    /// Unclamped progress of the last evaluated frame (0.0 before any frame)
    pub fn percent(&self) -> f32 {
        self.last_percent
    }

    /// Progress rounded for display
    pub fn display_percent(&self) -> i32 {
        self.last_percent.round() as i32
    }

    /// Progress bar fill start for the last evaluated frame
    pub fn bar(&self) -> f32 {
        match self.last_angles {
            Some(angles) => progress_bar(angles.elbow, &self.thresholds),
            None => progress_bar(self.thresholds.elbow_bottom, &self.thresholds),
        }
    }

    /// Multi-line status for a debug overlay
    pub fn overlay_text(&self) -> String {
        let joints = match self.last_angles {
            Some(a) => format!(
                "Elbow: {:.0}° | Shoulder: {:.0}° | Hip: {:.0}°",
                a.elbow, a.shoulder, a.hip
            ),
            None => "Elbow: -- | Shoulder: -- | Hip: --".to_string(),
        };

        format!(
            "Push-ups: {} | {} | {}%\n{}\nForm: {}",
            self.state.display_count(),
            self.state.feedback.label(),
            self.display_percent(),
            joints,
            if self.state.form_valid { "✓" } else { "✗" },
        )
    }
}
