//! Coaching feedback labels shown to the user

/// Feedback for the current phase of the rep
///
/// `Up` is emitted at the bottom (the next move is up), `Down` at the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    FixForm,
    Up,
    Down,
}

impl Feedback {
    pub fn label(&self) -> &'static str {
        match self {
            Feedback::FixForm => "Fix Form",
            Feedback::Up => "Up",
            Feedback::Down => "Down",
        }
    }
}
