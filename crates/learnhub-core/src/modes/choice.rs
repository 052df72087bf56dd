//! Single-answer scored modes: multiple choice and true/false.
//!
//! Select one answer, check it to lock the selection and score it, then move
//! on. The last item's "next" is "finish" and completes the session.

use std::fmt;

use crate::model::{ContentKind, McqQuestion, TrueFalseStatement};
use crate::modes::{commit, Phase, ScoreSummary, Session, Transition};

/// An item with exactly one correct answer.
pub trait Gradable {
    type Answer: Copy + PartialEq + fmt::Debug;

    const KIND: ContentKind;

    /// Whether `answer` is a selectable answer for this item.
    fn accepts(&self, answer: Self::Answer) -> bool;

    /// Whether `answer` is the designated correct answer.
    fn is_correct(&self, answer: Self::Answer) -> bool;
}

impl Gradable for McqQuestion {
    type Answer = usize;

    const KIND: ContentKind = ContentKind::Mcq;

    fn accepts(&self, answer: usize) -> bool {
        answer < self.options.len()
    }

    fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_index
    }
}

impl Gradable for TrueFalseStatement {
    type Answer = bool;

    const KIND: ContentKind = ContentKind::TrueFalse;

    fn accepts(&self, _: bool) -> bool {
        true
    }

    fn is_correct(&self, answer: bool) -> bool {
        answer == self.answer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceEvent<A> {
    Select(A),
    Check,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceState<A> {
    pub index: usize,
    pub selected: Option<A>,
    pub checked: bool,
    pub score: u32,
    pub finished: bool,
}

impl<A> Default for ChoiceState<A> {
    fn default() -> Self {
        Self {
            index: 0,
            selected: None,
            checked: false,
            score: 0,
            finished: false,
        }
    }
}

impl<A: Copy + PartialEq> ChoiceState<A> {
    pub fn apply<Q>(&self, items: &[Q], event: ChoiceEvent<A>) -> Self
    where
        Q: Gradable<Answer = A>,
    {
        let mut next = self.clone();
        let Some(item) = items.get(self.index) else {
            return next;
        };
        if self.finished {
            return next;
        }

        match event {
            ChoiceEvent::Select(answer) => {
                if !self.checked && item.accepts(answer) {
                    next.selected = Some(answer);
                }
            }
            ChoiceEvent::Check => {
                if let (false, Some(answer)) = (self.checked, self.selected) {
                    next.checked = true;
                    if item.is_correct(answer) {
                        next.score += 1;
                    }
                }
            }
            ChoiceEvent::Next => {
                if self.checked {
                    if self.index + 1 < items.len() {
                        next.index += 1;
                        next.selected = None;
                        next.checked = false;
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

/// A running multiple-choice or true/false session.
#[derive(Debug, Clone)]
pub struct ChoiceSession<Q: Gradable> {
    items: Vec<Q>,
    state: ChoiceState<Q::Answer>,
}

pub type MultipleChoice = ChoiceSession<McqQuestion>;
pub type TrueFalse = ChoiceSession<TrueFalseStatement>;

impl<Q: Gradable> ChoiceSession<Q> {
    pub fn new(items: Vec<Q>) -> Self {
        Self {
            items,
            state: ChoiceState::default(),
        }
    }

    pub fn items(&self) -> &[Q] {
        &self.items
    }

    pub fn state(&self) -> &ChoiceState<Q::Answer> {
        &self.state
    }

    /// The item being answered, or `None` for an empty session.
    pub fn current(&self) -> Option<&Q> {
        self.items.get(self.state.index)
    }

    pub fn is_last(&self) -> bool {
        self.state.index + 1 >= self.items.len()
    }

    /// Label for the advance action once the current item is checked.
    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            "Finish"
        } else {
            "Next Question"
        }
    }

    /// Correctness of the current item once it has been checked.
    pub fn last_result(&self) -> Option<bool> {
        if !self.state.checked {
            return None;
        }
        let item = self.current()?;
        self.state.selected.map(|answer| item.is_correct(answer))
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.state.score, self.items.len() as u32)
    }
}

impl<Q: Gradable> Session for ChoiceSession<Q> {
    type Event = ChoiceEvent<Q::Answer>;

    fn kind(&self) -> ContentKind {
        Q::KIND
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn handle(&mut self, event: Self::Event) -> Transition {
        let next = self.state.apply(&self.items, event);
        commit(Q::KIND, &event, &mut self.state, next)
    }

    fn reset(&mut self) {
        self.state = ChoiceState::default();
    }
}
