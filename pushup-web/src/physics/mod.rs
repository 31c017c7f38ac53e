//! Physics module - joint geometry
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{calculate_angle, FrameAngles};
