//! Session state - everything the rep counter carries between frames

use super::feedback::Feedback;
use super::thresholds::ResetPolicy;

/// Last completed phase of the rep cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// At or coming from the top; the next count fires at the bottom
    #[default]
    Down,
    /// At or coming from the bottom; the next count fires at the top
    Up,
}

/// Per-session counter state
///
/// The count is held as whole half-reps so every transition adds exactly 0.5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Latched once a locked-out top position has been seen
    pub form_valid: bool,
    pub direction: Direction,
    /// Completed half-cycles (bottom reached, top reached)
    pub half_reps: u32,
    /// Last emitted feedback, kept while no phase check fires
    pub feedback: Feedback,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rep count in 0.5 steps
    pub fn rep_count(&self) -> f32 {
        self.half_reps as f32 * 0.5
    }

    /// Completed full reps, for display
    pub fn display_count(&self) -> u32 {
        self.half_reps / 2
    }

    /// External reset: count to zero, plus whatever the policy asks for
    pub fn reset(&mut self, policy: ResetPolicy) {
        self.half_reps = 0;
        if policy.direction {
            self.direction = Direction::Down;
        }
        if policy.form {
            self.form_valid = false;
        }
    }
}
