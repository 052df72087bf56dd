//! Match-the-following mode.
//!
//! The right column is shown in a shuffled order fixed for the session. Pairs
//! are correct by index identity: left `i` belongs with right `i`.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::{ContentKind, MatchPair};
use crate::modes::{commit, Phase, Session, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// Pick a left item by its pair index.
    SelectLeft(usize),
    /// Pick a right item by its pair index (not its display position).
    SelectRight(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    /// Display order of the right column, as pair indices.
    pub right_order: Vec<usize>,
    pub selected_left: Option<usize>,
    /// Recorded matches, left index → right index.
    pub matches: BTreeMap<usize, usize>,
}

impl MatchState {
    pub fn new(right_order: Vec<usize>) -> Self {
        Self {
            right_order,
            selected_left: None,
            matches: BTreeMap::new(),
        }
    }

    fn right_is_matched(&self, right: usize) -> bool {
        self.matches.values().any(|&r| r == right)
    }

    pub fn apply(&self, pair_count: usize, event: MatchEvent) -> Self {
        let mut next = self.clone();
        match event {
            MatchEvent::SelectLeft(left) => {
                if left < pair_count && !self.matches.contains_key(&left) {
                    next.selected_left = Some(left);
                }
            }
            MatchEvent::SelectRight(right) => {
                if let Some(left) = self.selected_left {
                    if right < pair_count && !self.right_is_matched(right) {
                        next.matches.insert(left, right);
                        next.selected_left = None;
                    }
                }
            }
        }
        next
    }

    pub fn correct_matches(&self) -> usize {
        self.matches.iter().filter(|(l, r)| l == r).count()
    }

    pub fn is_complete(&self, pair_count: usize) -> bool {
        pair_count > 0 && self.matches.len() == pair_count
    }
}

#[derive(Debug, Clone)]
pub struct MatchPairs {
    pairs: Vec<MatchPair>,
    rng: StdRng,
    state: MatchState,
}

impl MatchPairs {
    /// Start a session. The same seed always produces the same shuffles.
    pub fn new(pairs: Vec<MatchPair>, seed: u64) -> Self {
        Self::with_rng(pairs, StdRng::seed_from_u64(seed))
    }

    /// Start a session seeded from OS entropy.
    pub fn from_entropy(pairs: Vec<MatchPair>) -> Self {
        Self::with_rng(pairs, StdRng::from_os_rng())
    }

    fn with_rng(pairs: Vec<MatchPair>, mut rng: StdRng) -> Self {
        let order = shuffled_indices(pairs.len(), &mut rng);
        Self {
            pairs,
            rng,
            state: MatchState::new(order),
        }
    }

    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Right-column entries in display order, with their pair index.
    pub fn right_column(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.state
            .right_order
            .iter()
            .filter_map(|&i| self.pairs.get(i).map(|p| (i, p.right.as_str())))
    }

    /// Pair index shown at a display position of the right column.
    pub fn right_at(&self, position: usize) -> Option<usize> {
        self.state.right_order.get(position).copied()
    }

    pub fn matched_count(&self) -> usize {
        self.state.matches.len()
    }

    pub fn correct_matches(&self) -> usize {
        self.state.correct_matches()
    }
}

fn shuffled_indices(len: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

impl Session for MatchPairs {
    type Event = MatchEvent;

    fn kind(&self) -> ContentKind {
        ContentKind::Match
    }

    fn phase(&self) -> Phase {
        if self.state.is_complete(self.pairs.len()) {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    fn handle(&mut self, event: MatchEvent) -> Transition {
        let next = self.state.apply(self.pairs.len(), event);
        commit(ContentKind::Match, &event, &mut self.state, next)
    }

    /// Clear every match and re-shuffle the right column.
    fn reset(&mut self) {
        let order = shuffled_indices(self.pairs.len(), &mut self.rng);
        self.state = MatchState::new(order);
    }
}
