//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{
    Landmark,
    PoseFrame,
    // Constants
    LANDMARK_COUNT, LANDMARK_STRIDE,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    PUSHUP_SKELETON,
};

pub use session::{
    // WASM entry points
    update_landmarks,
    get_rep_count,
    get_display_count,
    get_feedback,
    get_progress_percent,
    get_progress_bar,
    get_overlay_text,
    reset_count,
    set_reset_policy,
    set_form_thresholds,
    // Internal API
    process_landmark_buffer,
};
