//! Fill-in-the-blank mode.

use crate::model::{ContentKind, FillBlankQuestion};
use crate::modes::{commit, Phase, ScoreSummary, Session, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillBlankEvent {
    /// Replace the typed answer.
    Input(String),
    ToggleHint,
    Check,
    Next,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillBlankState {
    pub index: usize,
    pub input: String,
    pub hint_visible: bool,
    pub checked: bool,
    pub score: u32,
    pub finished: bool,
}

/// Trimmed, case-insensitive comparison against the canonical answer.
pub fn answers_match(input: &str, answer: &str) -> bool {
    input.trim().to_lowercase() == answer.trim().to_lowercase()
}

impl FillBlankState {
    /// `hints_enabled` gates [`FillBlankEvent::ToggleHint`].
    pub fn apply(
        &self,
        questions: &[FillBlankQuestion],
        hints_enabled: bool,
        event: FillBlankEvent,
    ) -> Self {
        let mut next = self.clone();
        let Some(question) = questions.get(self.index) else {
            return next;
        };
        if self.finished {
            return next;
        }

        match event {
            FillBlankEvent::Input(text) => {
                if !self.checked {
                    next.input = text;
                }
            }
            FillBlankEvent::ToggleHint => {
                if hints_enabled && !self.checked {
                    next.hint_visible = !self.hint_visible;
                }
            }
            FillBlankEvent::Check => {
                if !self.checked && !self.input.trim().is_empty() {
                    next.checked = true;
                    if answers_match(&self.input, &question.answer) {
                        next.score += 1;
                    }
                }
            }
            FillBlankEvent::Next => {
                if self.checked {
                    if self.index + 1 < questions.len() {
                        next.index += 1;
                        next.input.clear();
                        next.checked = false;
                        next.hint_visible = false;
                    } else {
                        next.finished = true;
                    }
                }
            }
        }
        next
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Complete
        } else if self.checked {
            Phase::Revealed
        } else {
            Phase::InProgress
        }
    }
}

#[derive(Debug, Clone)]
pub struct FillBlank {
    questions: Vec<FillBlankQuestion>,
    hints_enabled: bool,
    state: FillBlankState,
}

impl FillBlank {
    pub fn new(questions: Vec<FillBlankQuestion>) -> Self {
        Self {
            questions,
            hints_enabled: true,
            state: FillBlankState::default(),
        }
    }

    pub fn with_hints(mut self, enabled: bool) -> Self {
        self.hints_enabled = enabled;
        self
    }

    pub fn questions(&self) -> &[FillBlankQuestion] {
        &self.questions
    }

    pub fn state(&self) -> &FillBlankState {
        &self.state
    }

    pub fn current(&self) -> Option<&FillBlankQuestion> {
        self.questions.get(self.state.index)
    }

    /// The hint for the current question, when it is toggled visible.
    pub fn visible_hint(&self) -> Option<&str> {
        self.current()
            .filter(|_| self.state.hint_visible)
            .map(|q| q.hint.as_str())
    }

    pub fn last_result(&self) -> Option<bool> {
        if !self.state.checked {
            return None;
        }
        self.current()
            .map(|q| answers_match(&self.state.input, &q.answer))
    }

    pub fn is_last(&self) -> bool {
        self.state.index + 1 >= self.questions.len()
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.state.score, self.questions.len() as u32)
    }
}

impl Session for FillBlank {
    type Event = FillBlankEvent;

    fn kind(&self) -> ContentKind {
        ContentKind::FillBlanks
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn handle(&mut self, event: FillBlankEvent) -> Transition {
        let next = self
            .state
            .apply(&self.questions, self.hints_enabled, event.clone());
        commit(ContentKind::FillBlanks, &event, &mut self.state, next)
    }

    fn reset(&mut self) {
        self.state = FillBlankState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> FillBlankQuestion {
        FillBlankQuestion {
            text: "The capital of France is _____.".into(),
            answer: answer.into(),
            hint: "City of light".into(),
        }
    }

    #[test]
    fn comparison_ignores_case_and_whitespace() {
        assert!(answers_match(" paris ", "Paris"));
        assert!(answers_match("NEW DELHI", "New Delhi"));
        assert!(!answers_match("Lyon", "Paris"));
    }

    #[test]
    fn mixed_case_answer_is_scored() {
        let mut session = FillBlank::new(vec![question("Paris")]);
        session.handle(FillBlankEvent::Input(" paris ".into()));
        session.handle(FillBlankEvent::Check);
        assert_eq!(session.last_result(), Some(true));
        assert_eq!(session.state().score, 1);
    }

    #[test]
    fn blank_answer_cannot_be_checked() {
        let mut session = FillBlank::new(vec![question("Paris")]);
        session.handle(FillBlankEvent::Input("   ".into()));
        assert_eq!(session.handle(FillBlankEvent::Check), Transition::Ignored);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn hint_toggles_before_check_and_resets_on_next() {
        let mut session = FillBlank::new(vec![question("Paris"), question("Rome")]);
        session.handle(FillBlankEvent::ToggleHint);
        assert_eq!(session.visible_hint(), Some("City of light"));

        session.handle(FillBlankEvent::Input("Paris".into()));
        session.handle(FillBlankEvent::Check);
        assert_eq!(
            session.handle(FillBlankEvent::ToggleHint),
            Transition::Ignored
        );
        assert_eq!(
            session.handle(FillBlankEvent::Input("changed".into())),
            Transition::Ignored
        );

        session.handle(FillBlankEvent::Next);
        assert!(!session.state().hint_visible);
        assert!(session.state().input.is_empty());
        assert_eq!(session.state().index, 1);
    }

    #[test]
    fn disabled_hints_are_ignored() {
        let mut session = FillBlank::new(vec![question("Paris")]).with_hints(false);
        assert_eq!(
            session.handle(FillBlankEvent::ToggleHint),
            Transition::Ignored
        );
        assert_eq!(session.visible_hint(), None);
    }

    #[test]
    fn finish_and_reset() {
        let mut session = FillBlank::new(vec![question("Paris"), question("Rome")]);
        for input in ["paris", "Milan"] {
            session.handle(FillBlankEvent::Input(input.into()));
            session.handle(FillBlankEvent::Check);
            session.handle(FillBlankEvent::Next);
        }
        assert!(session.is_complete());
        assert_eq!(session.summary().to_string(), "1 out of 2 (50%)");

        session.reset();
        assert_eq!(session.state(), &FillBlankState::default());
    }
}
