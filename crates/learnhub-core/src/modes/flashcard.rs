//! Flashcards: flip a card, browse freely in both directions. Not scored.

use crate::model::{ContentKind, Flashcard};
use crate::modes::{commit, Phase, Session, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardEvent {
    Flip,
    Next,
    Previous,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardState {
    pub index: usize,
    pub flipped: bool,
    pub finished: bool,
}

impl FlashcardState {
    pub fn apply(&self, cards: &[Flashcard], event: FlashcardEvent) -> Self {
        let mut next = self.clone();
        if cards.is_empty() {
            return next;
        }

        match event {
            FlashcardEvent::Flip => {
                if !self.finished {
                    next.flipped = !self.flipped;
                }
            }
            FlashcardEvent::Next => {
                if self.finished {
                    return next;
                }
                if self.index + 1 < cards.len() {
                    next.index += 1;
                } else {
                    next.finished = true;
                }
                next.flipped = false;
            }
            FlashcardEvent::Previous => {
                if self.finished {
                    next.finished = false;
                } else if self.index > 0 {
                    next.index -= 1;
                    next.flipped = false;
                }
            }
        }
        next
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Complete
        } else if self.flipped {
            Phase::Revealed
        } else {
            Phase::InProgress
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    state: FlashcardState,
}

impl FlashcardDeck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            state: FlashcardState::default(),
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn state(&self) -> &FlashcardState {
        &self.state
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.state.index)
    }

    /// The side of the current card facing the learner.
    pub fn visible_side(&self) -> Option<&str> {
        self.current().map(|card| {
            if self.state.flipped {
                card.back.as_str()
            } else {
                card.front.as_str()
            }
        })
    }
}

impl Session for FlashcardDeck {
    type Event = FlashcardEvent;

    fn kind(&self) -> ContentKind {
        ContentKind::Flashcard
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn handle(&mut self, event: FlashcardEvent) -> Transition {
        let next = self.state.apply(&self.cards, event);
        commit(ContentKind::Flashcard, &event, &mut self.state, next)
    }

    fn reset(&mut self) {
        self.state = FlashcardState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> FlashcardDeck {
        FlashcardDeck::new(
            (0..n)
                .map(|i| Flashcard {
                    front: format!("front {i}"),
                    back: format!("back {i}"),
                })
                .collect(),
        )
    }

    #[test]
    fn flip_shows_back() {
        let mut deck = deck(2);
        assert_eq!(deck.visible_side(), Some("front 0"));
        deck.handle(FlashcardEvent::Flip);
        assert_eq!(deck.visible_side(), Some("back 0"));
        assert_eq!(deck.phase(), Phase::Revealed);
        deck.handle(FlashcardEvent::Flip);
        assert_eq!(deck.visible_side(), Some("front 0"));
    }

    #[test]
    fn browse_both_directions() {
        let mut deck = deck(3);
        deck.handle(FlashcardEvent::Flip);
        deck.handle(FlashcardEvent::Next);
        assert_eq!(deck.state().index, 1);
        assert!(!deck.state().flipped);
        deck.handle(FlashcardEvent::Previous);
        assert_eq!(deck.state().index, 0);
        assert_eq!(
            deck.handle(FlashcardEvent::Previous),
            Transition::Ignored
        );
    }

    #[test]
    fn next_past_last_card_completes() {
        let mut deck = deck(2);
        deck.handle(FlashcardEvent::Next);
        deck.handle(FlashcardEvent::Next);
        assert!(deck.is_complete());
        assert_eq!(deck.state().index, 1);

        deck.handle(FlashcardEvent::Previous);
        assert_eq!(deck.phase(), Phase::InProgress);
        assert_eq!(deck.state().index, 1);
    }

    #[test]
    fn empty_deck_never_indexes() {
        let mut deck = deck(0);
        assert_eq!(deck.visible_side(), None);
        assert_eq!(deck.handle(FlashcardEvent::Next), Transition::Ignored);
    }
}
