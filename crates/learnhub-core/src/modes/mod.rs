//! Per-mode interactive state machines.
//!
//! Each machine is a small state struct with a pure `apply(&self, content,
//! event) -> Self` transition, wrapped in a session that owns the immutable
//! content and reports whether an event changed anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ContentKind;

pub mod choice;
pub mod fill_blank;
pub mod flashcard;
pub mod match_pairs;
pub mod notes;
pub mod practice;
pub mod timer;

pub use choice::{ChoiceEvent, ChoiceSession, ChoiceState, Gradable, MultipleChoice, TrueFalse};
pub use fill_blank::{FillBlank, FillBlankEvent, FillBlankState};
pub use flashcard::{FlashcardDeck, FlashcardEvent, FlashcardState};
pub use match_pairs::{MatchEvent, MatchPairs, MatchState};
pub use notes::{NotesEvent, NotesState, NotesSummary};
pub use practice::{PracticeEvent, PracticeProblems, PracticeState};
pub use timer::{TimerChallengeSession, TimerEvent, TimerState};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Working on the current item.
    InProgress,
    /// The current item has been checked or revealed.
    Revealed,
    /// The session is finished.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::InProgress => write!(f, "in progress"),
            Phase::Revealed => write!(f, "revealed"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// Outcome of handing an event to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event changed the session state.
    Applied,
    /// The event was not allowed in the current state and changed nothing.
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Final or running score of a scored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub total: u32,
}

impl ScoreSummary {
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    /// `round(score / total * 100)`, or 0 for an empty session.
    pub fn percentage(&self) -> u32 {
        percent(self.score as usize, self.total as usize)
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} out of {} ({}%)",
            self.score,
            self.total,
            self.percentage()
        )
    }
}

/// Rounded percentage of `part / whole`, defined as 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Behaviour shared by every mode session.
pub trait Session {
    type Event: fmt::Debug;

    /// The content kind this session plays.
    fn kind(&self) -> ContentKind;

    /// Current lifecycle phase.
    fn phase(&self) -> Phase;

    /// Apply one interaction event.
    fn handle(&mut self, event: Self::Event) -> Transition;

    /// Return to the freshly-initialized state.
    fn reset(&mut self);

    fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }
}

/// Replace `state` with `next` and report whether anything changed.
pub(crate) fn commit<S: PartialEq>(
    kind: ContentKind,
    event: &dyn fmt::Debug,
    state: &mut S,
    next: S,
) -> Transition {
    if *state == next {
        tracing::debug!(%kind, ?event, "event ignored");
        Transition::Ignored
    } else {
        *state = next;
        Transition::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_summary_display() {
        assert_eq!(ScoreSummary::new(1, 2).to_string(), "1 out of 2 (50%)");
        assert_eq!(ScoreSummary::new(2, 3).to_string(), "2 out of 3 (67%)");
        assert_eq!(ScoreSummary::new(0, 0).percentage(), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(5, 5), 100);
    }
}
