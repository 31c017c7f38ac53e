//! Rep state machine
//!
//! One evaluation per frame. Takes the previous `SessionState` by value and
//! returns the next one, so the machine itself holds no state.
//!
//! Transitions:
//! - Down → Up at a qualifying bottom position, +0.5 rep
//! - Up → Down at a qualifying top position, +0.5 rep
//!
//! Nothing is evaluated until the form latch has been set by one locked-out
//! frame. Frames between the bottom and top thresholds keep the last feedback.

use super::feedback::Feedback;
use super::progress::progress_percent;
use super::state::{Direction, SessionState};
use super::thresholds::FormThresholds;
use crate::physics::FrameAngles;

/// Result of evaluating one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutcome {
    pub state: SessionState,
    /// Unclamped rep progress for this frame
    pub percent: f32,
    /// Direction entered this frame, if a half-rep was counted
    pub transition: Option<Direction>,
}

/// Evaluate one frame of angles against the previous state
pub fn evaluate(
    state: SessionState,
    angles: &FrameAngles,
    thresholds: &FormThresholds,
) -> FrameOutcome {
    let mut next = state;
    let mut transition = None;

    if thresholds.is_locked_out(angles) {
        next.form_valid = true;
    }

    let percent = progress_percent(angles.elbow, thresholds);

    if next.form_valid {
        if percent <= 0.0 {
            if thresholds.is_bottom(angles) {
                next.feedback = Feedback::Up;
                if next.direction == Direction::Down {
                    next.half_reps += 1;
                    next.direction = Direction::Up;
                    transition = Some(Direction::Up);
                }
            } else {
                next.feedback = Feedback::FixForm;
            }
        }

        if percent >= 100.0 {
            if thresholds.is_locked_out(angles) {
                next.feedback = Feedback::Down;
                if next.direction == Direction::Up {
                    next.half_reps += 1;
                    next.direction = Direction::Down;
                    transition = Some(Direction::Down);
                }
            } else {
                next.feedback = Feedback::FixForm;
            }
        }
    }

    FrameOutcome {
        state: next,
        percent,
        transition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latched(direction: Direction) -> SessionState {
        SessionState {
            form_valid: true,
            direction,
            ..SessionState::default()
        }
    }

    fn run(state: SessionState, elbow: f32, shoulder: f32, hip: f32) -> FrameOutcome {
        evaluate(
            state,
            &FrameAngles::new(elbow, shoulder, hip),
            &FormThresholds::default(),
        )
    }

    #[test]
    fn test_bottom_counts_half_rep() {
        let out = run(latched(Direction::Down), 90.0, 41.0, 161.0);
        assert_eq!(out.state.feedback, Feedback::Up);
        assert_eq!(out.state.rep_count(), 0.5);
        assert_eq!(out.state.direction, Direction::Up);
        assert_eq!(out.transition, Some(Direction::Up));
    }

    #[test]
    fn test_top_counts_half_rep() {
        let out = run(latched(Direction::Up), 161.0, 41.0, 161.0);
        assert_eq!(out.state.feedback, Feedback::Down);
        assert_eq!(out.state.rep_count(), 0.5);
        assert_eq!(out.state.direction, Direction::Down);
        assert_eq!(out.transition, Some(Direction::Down));
    }

    #[test]
    fn test_bottom_with_sagging_hips_is_fix_form() {
        let out = run(latched(Direction::Down), 90.0, 20.0, 150.0);
        assert_eq!(out.state.feedback, Feedback::FixForm);
        assert_eq!(out.state.half_reps, 0);
        assert_eq!(out.state.direction, Direction::Down);
        assert_eq!(out.transition, None);
    }

    #[test]
    fn test_bottom_phase_ignores_shoulder() {
        // Shoulders close up at the bottom of a push-up; only the top checks them
        let out = run(latched(Direction::Down), 90.0, 20.0, 161.0);
        assert_eq!(out.state.feedback, Feedback::Up);
        assert_eq!(out.state.half_reps, 1);
    }

    #[test]
    fn test_top_with_closed_shoulder_is_fix_form() {
        let out = run(latched(Direction::Up), 170.0, 30.0, 170.0);
        assert_eq!(out.state.feedback, Feedback::FixForm);
        assert_eq!(out.state.direction, Direction::Up);
        assert_eq!(out.transition, None);
    }

    #[test]
    fn test_exact_lockout_angle_is_fix_form() {
        // 160° reads 100% but lockout needs strictly more
        let out = run(latched(Direction::Up), 160.0, 41.0, 161.0);
        assert_eq!(out.percent, 100.0);
        assert_eq!(out.state.feedback, Feedback::FixForm);
        assert_eq!(out.state.half_reps, 0);
    }

    #[test]
    fn test_nothing_counts_before_lockout() {
        let out = run(SessionState::new(), 80.0, 41.0, 170.0);
        assert!(!out.state.form_valid);
        assert_eq!(out.state, SessionState::new());
    }

    #[test]
    fn test_lockout_latches_form() {
        let out = run(SessionState::new(), 170.0, 50.0, 170.0);
        assert!(out.state.form_valid);
        assert_eq!(out.state.feedback, Feedback::Down);
        // Starting direction is Down, so the first top doesn't count
        assert_eq!(out.state.half_reps, 0);

        // A bad frame later doesn't clear the latch
        let out = run(out.state, 120.0, 10.0, 100.0);
        assert!(out.state.form_valid);
    }

    #[test]
    fn test_mid_range_keeps_feedback() {
        let state = SessionState {
            feedback: Feedback::Up,
            ..latched(Direction::Up)
        };
        let out = run(state, 125.0, 41.0, 161.0);
        assert_eq!(out.state, state);
        assert_eq!(out.transition, None);
    }

    #[test]
    fn test_repeat_bottom_frames_count_once() {
        let first = run(latched(Direction::Down), 85.0, 41.0, 170.0);
        let second = run(first.state, 80.0, 41.0, 170.0);
        assert_eq!(second.state.half_reps, 1);
        assert_eq!(second.state.feedback, Feedback::Up);
        assert_eq!(second.transition, None);
    }

    #[test]
    fn test_full_cycle_adds_one_rep() {
        let start = run(SessionState::new(), 170.0, 50.0, 170.0).state;
        let frames = [
            (150.0, 50.0, 170.0),
            (120.0, 45.0, 170.0),
            (88.0, 30.0, 170.0),
            (120.0, 45.0, 170.0),
            (150.0, 50.0, 170.0),
            (172.0, 55.0, 172.0),
        ];

        let end = frames
            .iter()
            .fold(start, |state, &(e, s, h)| run(state, e, s, h).state);

        assert_eq!(end.rep_count() - start.rep_count(), 1.0);
        assert_eq!(end.direction, start.direction);
        assert_eq!(end.display_count(), 1);
    }

    #[test]
    fn test_count_never_decreases() {
        let angles = [
            (170.0, 50.0, 170.0),
            (85.0, 20.0, 150.0),
            (85.0, 20.0, 170.0),
            (165.0, 30.0, 170.0),
            (165.0, 45.0, 170.0),
            (60.0, 10.0, 175.0),
            (100.0, 10.0, 90.0),
            (179.0, 60.0, 179.0),
        ];

        let mut state = SessionState::new();
        for (e, s, h) in angles.iter().cycle().take(64) {
            let next = run(state, *e, *s, *h).state;
            assert!(next.half_reps >= state.half_reps);
            assert!(next.half_reps - state.half_reps <= 1);
            state = next;
        }
    }
}
