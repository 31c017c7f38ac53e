//! Counter module - push-up rep state machine and form feedback
//!
//! Re-exports only. All logic in submodules.

mod feedback;
mod machine;
mod progress;
mod session;
mod state;
mod thresholds;

pub use feedback::Feedback;
pub use machine::{evaluate, FrameOutcome};
pub use progress::{progress_bar, progress_percent, BAR_BOTTOM, BAR_TOP};
pub use session::PushupSession;
pub use state::{Direction, SessionState};
pub use thresholds::{
    FormThresholds, ResetPolicy, ELBOW_BOTTOM, ELBOW_LOCKOUT, HIP_MIN, SHOULDER_MIN,
};
