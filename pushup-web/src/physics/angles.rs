//! Joint angle calculation using atan2
//!
//! Calculates the angle at a vertex joint from the two limb segments that
//! meet there. The push-up counter needs three of these per frame: elbow,
//! shoulder and hip.

use nalgebra::Point2;

/// Calculate the angle at `vertex` between segments vertex→a and vertex→c
///
/// Uses the difference of the two segment headings: atan2(c) − atan2(a).
/// Point order does not matter, `calculate_angle(a, v, c)` equals
/// `calculate_angle(c, v, a)`.
///
/// Returns angle in degrees, always within [0, 180]:
/// - 90° = right angle (elbow at the bottom of a push-up)
/// - 180° = segments in a straight line (locked-out joint)
pub fn calculate_angle(a: Point2<f32>, vertex: Point2<f32>, c: Point2<f32>) -> f32 {
    let to_a = a - vertex;
    let to_c = c - vertex;

    let radians = to_c.y.atan2(to_c.x) - to_a.y.atan2(to_a.x);
    let mut angle = radians.to_degrees().abs();

    // Headings differ by up to 360°, fold the reflex side back
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    // f32 rounding near ±π can land a hair outside the range
    angle.clamp(0.0, 180.0)
}

/// The three joint angles the rep counter reads each frame (degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameAngles {
    /// shoulder–elbow–wrist
    pub elbow: f32,
    /// elbow–shoulder–hip
    pub shoulder: f32,
    /// shoulder–hip–knee
    pub hip: f32,
}

impl FrameAngles {
    pub fn new(elbow: f32, shoulder: f32, hip: f32) -> Self {
        Self { elbow, shoulder, hip }
    }

    /// Compute all three angles from one side of the body
    pub fn from_joints(
        shoulder: Point2<f32>,
        elbow: Point2<f32>,
        wrist: Point2<f32>,
        hip: Point2<f32>,
        knee: Point2<f32>,
    ) -> Self {
        Self {
            elbow: calculate_angle(shoulder, elbow, wrist),
            shoulder: calculate_angle(elbow, shoulder, hip),
            hip: calculate_angle(shoulder, hip, knee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn test_straight_arm() {
        let angle = calculate_angle(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0));
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_right_angle() {
        let angle = calculate_angle(p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_reflex_side_is_folded() {
        // Headings of +135° and -135° differ by 270°, the joint angle is 90°
        let angle = calculate_angle(p(-1.0, 1.0), p(0.0, 0.0), p(-1.0, -1.0));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_coincident_points() {
        let angle = calculate_angle(p(0.3, 0.3), p(0.3, 0.3), p(0.3, 0.3));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_frame_angles_plank() {
        // Side view: body horizontal, arm straight down to the floor
        let angles = FrameAngles::from_joints(
            p(0.3, 0.5),
            p(0.3, 0.65),
            p(0.3, 0.8),
            p(0.6, 0.5),
            p(0.8, 0.5),
        );
        assert!(angles.elbow > 179.0);
        assert!((angles.shoulder - 90.0).abs() < 0.5);
        assert!(angles.hip > 179.0);
    }

    proptest! {
        #[test]
        fn angle_stays_in_range(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
            cx in -10.0f32..10.0, cy in -10.0f32..10.0,
        ) {
            let angle = calculate_angle(p(ax, ay), p(bx, by), p(cx, cy));
            prop_assert!((0.0..=180.0).contains(&angle));
        }

        #[test]
        fn angle_is_symmetric(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
            cx in -10.0f32..10.0, cy in -10.0f32..10.0,
        ) {
            let forward = calculate_angle(p(ax, ay), p(bx, by), p(cx, cy));
            let backward = calculate_angle(p(cx, cy), p(bx, by), p(ax, ay));
            prop_assert_eq!(forward, backward);
        }
    }
}
