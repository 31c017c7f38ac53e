//! Error types for landmark ingestion and counter configuration

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a landmark frame is skipped
///
/// None of these are fatal: the frame is dropped and the session state is
/// left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("No pose detected in frame")]
    NoPose,

    #[error("Invalid landmark data length: {actual} (expected {expected})")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Landmark {0} missing or not finite")]
    MissingLandmark(usize),
}

/// Rejected threshold configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Threshold {name} is not a finite number")]
    NotFinite { name: &'static str },

    #[error("Threshold {name} = {value} is outside 0-180°")]
    OutOfRange { name: &'static str, value: f32 },

    #[error("Bottom elbow angle {bottom}° must be below lockout angle {lockout}°")]
    EmptyRange { bottom: f32, lockout: f32 },
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
