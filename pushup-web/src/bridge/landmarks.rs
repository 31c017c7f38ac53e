//! Landmark frame parsing
//!
//! Receives MediaPipe Pose landmarks from JavaScript as a flat Float32Array
//! and pulls out the joints the push-up counter reads.

use nalgebra::Point2;

use crate::error::FrameError;
use crate::physics::FrameAngles;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in the flat buffer (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Skeleton connections drawn by the JS renderer (arms and legs)
pub const PUSHUP_SKELETON: [(usize, usize); 8] = [
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
];

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth, unused by the counter
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Image-plane position
    pub fn point(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// One frame of pose landmarks
#[derive(Clone, Copy, Debug)]
pub struct PoseFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl PoseFrame {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Parse a flat buffer of 33 × (x, y, z)
    ///
    /// An empty buffer means the estimator found no pose.
    pub fn from_flat(data: &[f32]) -> Result<Self, FrameError> {
        if data.is_empty() {
            return Err(FrameError::NoPose);
        }

        let expected = LANDMARK_COUNT * LANDMARK_STRIDE;
        if data.len() != expected {
            return Err(FrameError::InvalidLength {
                expected,
                actual: data.len(),
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, chunk) in landmarks.iter_mut().zip(data.chunks_exact(LANDMARK_STRIDE)) {
            *landmark = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
            };
        }

        Ok(Self { landmarks })
    }

    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied()
    }

    /// Position of a joint the counter depends on. JS fills undetected
    /// joints with NaN, which is treated as missing.
    fn required(&self, index: usize) -> Result<Point2<f32>, FrameError> {
        match self.landmark(index) {
            Some(l) if l.x.is_finite() && l.y.is_finite() => Ok(l.point()),
            _ => Err(FrameError::MissingLandmark(index)),
        }
    }

    /// Elbow, shoulder and hip angles from the left side of the body
    pub fn pushup_angles(&self) -> Result<FrameAngles, FrameError> {
        Ok(FrameAngles::from_joints(
            self.required(LEFT_SHOULDER)?,
            self.required(LEFT_ELBOW)?,
            self.required(LEFT_WRIST)?,
            self.required(LEFT_HIP)?,
            self.required(LEFT_KNEE)?,
        ))
    }
}
