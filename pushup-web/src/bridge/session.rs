//! Session storage and JS bridge
//!
//! Holds the one push-up session for the page and exposes per-frame
//! ingestion, readouts for the UI and the reset/config controls.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::PoseFrame;
use crate::counter::{Direction, FormThresholds, FrameOutcome, PushupSession, ResetPolicy};
use crate::error::FrameError;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<PushupSession> = RefCell::new(PushupSession::new());
}

/// Parse one landmark buffer and run it through the session
///
/// On any `FrameError` the session is not touched.
pub fn process_landmark_buffer(
    session: &mut PushupSession,
    data: &[f32],
) -> Result<FrameOutcome, FrameError> {
    let angles = PoseFrame::from_flat(data)?.pushup_angles()?;
    Ok(session.process(&angles))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per pose result with a flat Float32Array of
/// 99 values (33 landmarks × x, y, z), or an empty array when no pose was
/// detected. Returns true if the frame was evaluated.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> bool {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();

        match process_landmark_buffer(&mut session, data) {
            Ok(outcome) => {
                if let Some(direction) = outcome.transition {
                    let phase = match direction {
                        Direction::Up => "bottom",
                        Direction::Down => "top",
                    };
                    console_log!("💪 Rep {:.1} ({})", outcome.state.rep_count(), phase);
                }
                true
            }
            Err(err @ FrameError::InvalidLength { .. }) => {
                console_warn!("{}", err);
                false
            }
            // No pose or a joint out of view: expected, skip quietly
            Err(_) => false,
        }
    })
}

/// Rep count in 0.5 steps
#[wasm_bindgen]
pub fn get_rep_count() -> f32 {
    SESSION.with(|cell| cell.borrow().state().rep_count())
}

/// Completed reps for display (floored)
#[wasm_bindgen]
pub fn get_display_count() -> u32 {
    SESSION.with(|cell| cell.borrow().state().display_count())
}

/// Current feedback label: "Fix Form", "Up" or "Down"
#[wasm_bindgen]
pub fn get_feedback() -> String {
    SESSION.with(|cell| cell.borrow().state().feedback.label().to_string())
}

/// Unclamped progress of the last evaluated frame
#[wasm_bindgen]
pub fn get_progress_percent() -> f32 {
    SESSION.with(|cell| cell.borrow().percent())
}

/// Progress bar fill start in canvas pixels
#[wasm_bindgen]
pub fn get_progress_bar() -> f32 {
    SESSION.with(|cell| cell.borrow().bar())
}

/// Formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_overlay_text() -> String {
    SESSION.with(|cell| cell.borrow().overlay_text())
}

/// Reset button: count back to zero
#[wasm_bindgen]
pub fn reset_count() {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        session.reset();
        let policy = session.reset_policy();
        console_log!(
            "🔄 Count reset (direction: {}, form: {})",
            policy.direction,
            policy.form
        );
    });
}

/// Choose what `reset_count` clears besides the count
#[wasm_bindgen]
pub fn set_reset_policy(reset_direction: bool, reset_form: bool) {
    SESSION.with(|cell| {
        cell.borrow_mut().set_reset_policy(ResetPolicy {
            direction: reset_direction,
            form: reset_form,
        });
    });
}

/// Tune form thresholds (degrees). Throws in JS if the set is invalid.
#[wasm_bindgen]
pub fn set_form_thresholds(
    elbow_lockout: f32,
    shoulder_min: f32,
    hip_min: f32,
    elbow_bottom: f32,
) -> Result<(), JsValue> {
    let thresholds = FormThresholds::new(elbow_lockout, shoulder_min, hip_min, elbow_bottom);

    SESSION.with(|cell| cell.borrow_mut().set_thresholds(thresholds))?;

    console_log!(
        "⚙️ Thresholds: lockout>{}° shoulder>{}° hip>{}° bottom<={}°",
        elbow_lockout,
        shoulder_min,
        hip_min,
        elbow_bottom
    );
    Ok(())
}
