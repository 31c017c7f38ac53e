//! Pushup Web - push-up rep counter and form coach
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! MediaPipe Pose runs in JavaScript; each result is handed to
//! `update_landmarks` and the UI reads the count and feedback back.

#[macro_use]
mod logging;

mod bridge;
mod counter;
mod error;
mod physics;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    get_display_count, get_feedback, get_overlay_text, get_progress_bar, get_progress_percent,
    get_rep_count, reset_count, set_form_thresholds, set_reset_policy, update_landmarks,
};

// Native API
pub use bridge::{
    process_landmark_buffer, Landmark, PoseFrame, LANDMARK_COUNT, LANDMARK_STRIDE, LEFT_ANKLE,
    LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, PUSHUP_SKELETON, RIGHT_ANKLE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
pub use counter::{
    evaluate, progress_bar, progress_percent, Direction, Feedback, FormThresholds, FrameOutcome,
    PushupSession, ResetPolicy, SessionState, BAR_BOTTOM, BAR_TOP, ELBOW_BOTTOM, ELBOW_LOCKOUT,
    HIP_MIN, SHOULDER_MIN,
};
pub use error::{ConfigError, FrameError};
pub use physics::{calculate_angle, FrameAngles};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Push-up counter ready");
}
