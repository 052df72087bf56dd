//! Practice problems and essays: scratch work plus a solution reveal.
//! Nothing is validated or scored.

use crate::model::{ContentKind, PracticeProblem};
use crate::modes::{commit, Phase, Session, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeEvent {
    /// Replace the scratch text.
    Scratch(String),
    ToggleSolution,
    Next,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeState {
    pub index: usize,
    pub scratch: String,
    pub solution_visible: bool,
    pub finished: bool,
}

impl PracticeState {
    pub fn apply(&self, problems: &[PracticeProblem], event: PracticeEvent) -> Self {
        let mut next = self.clone();
        if problems.is_empty() || self.finished {
            return next;
        }

        match event {
            PracticeEvent::Scratch(text) => next.scratch = text,
            PracticeEvent::ToggleSolution => next.solution_visible = !self.solution_visible,
            PracticeEvent::Next => {
                if self.index + 1 < problems.len() {
                    next.index += 1;
                    next.scratch.clear();
                    next.solution_visible = false;
                } else {
                    next.finished = true;
                }
            }
        }
        next
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Complete
        } else if self.solution_visible {
            Phase::Revealed
        } else {
            Phase::InProgress
        }
    }
}

#[derive(Debug, Clone)]
pub struct PracticeProblems {
    problems: Vec<PracticeProblem>,
    state: PracticeState,
}

impl PracticeProblems {
    pub fn new(problems: Vec<PracticeProblem>) -> Self {
        Self {
            problems,
            state: PracticeState::default(),
        }
    }

    pub fn problems(&self) -> &[PracticeProblem] {
        &self.problems
    }

    pub fn state(&self) -> &PracticeState {
        &self.state
    }

    pub fn current(&self) -> Option<&PracticeProblem> {
        self.problems.get(self.state.index)
    }

    pub fn visible_solution(&self) -> Option<&str> {
        self.current()
            .filter(|_| self.state.solution_visible)
            .map(|p| p.solution.as_str())
    }
}

impl Session for PracticeProblems {
    type Event = PracticeEvent;

    fn kind(&self) -> ContentKind {
        ContentKind::PracticeProblems
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn handle(&mut self, event: PracticeEvent) -> Transition {
        let next = self.state.apply(&self.problems, event.clone());
        commit(ContentKind::PracticeProblems, &event, &mut self.state, next)
    }

    fn reset(&mut self) {
        self.state = PracticeState::default();
    }
}
