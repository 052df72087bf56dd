//! Notes and summaries: a checklist of points across sections.

use std::collections::BTreeSet;

use crate::model::{ContentKind, NotesSection};
use crate::modes::{commit, percent, Phase, Session, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesEvent {
    Toggle { section: usize, point: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesState {
    /// Checked points as (section index, point index).
    pub checked: BTreeSet<(usize, usize)>,
}

impl NotesState {
    pub fn apply(&self, sections: &[NotesSection], event: NotesEvent) -> Self {
        let mut next = self.clone();
        match event {
            NotesEvent::Toggle { section, point } => {
                let exists = sections
                    .get(section)
                    .is_some_and(|s| point < s.points.len());
                if exists && !next.checked.remove(&(section, point)) {
                    next.checked.insert((section, point));
                }
            }
        }
        next
    }
}

pub fn total_points(sections: &[NotesSection]) -> usize {
    sections.iter().map(|s| s.points.len()).sum()
}

#[derive(Debug, Clone)]
pub struct NotesSummary {
    sections: Vec<NotesSection>,
    state: NotesState,
}

impl NotesSummary {
    pub fn new(sections: Vec<NotesSection>) -> Self {
        Self {
            sections,
            state: NotesState::default(),
        }
    }

    pub fn sections(&self) -> &[NotesSection] {
        &self.sections
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    pub fn is_checked(&self, section: usize, point: usize) -> bool {
        self.state.checked.contains(&(section, point))
    }

    pub fn checked_count(&self) -> usize {
        self.state.checked.len()
    }

    pub fn total_points(&self) -> usize {
        total_points(&self.sections)
    }

    /// Rounded percentage of points reviewed; 0 when there are no points.
    pub fn progress(&self) -> u32 {
        percent(self.checked_count(), self.total_points())
    }
}

impl Session for NotesSummary {
    type Event = NotesEvent;

    fn kind(&self) -> ContentKind {
        ContentKind::NotesSummary
    }

    fn phase(&self) -> Phase {
        let total = self.total_points();
        if total > 0 && self.checked_count() == total {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    fn handle(&mut self, event: NotesEvent) -> Transition {
        let next = self.state.apply(&self.sections, event);
        commit(ContentKind::NotesSummary, &event, &mut self.state, next)
    }

    fn reset(&mut self) {
        self.state = NotesState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<NotesSection> {
        vec![
            NotesSection {
                title: "Key Concepts".into(),
                content: String::new(),
                points: vec!["one".into(), "two".into(), "three".into()],
            },
            NotesSection {
                title: "Additional Notes".into(),
                content: String::new(),
                points: vec!["four".into()],
            },
        ]
    }

    #[test]
    fn toggling_tracks_progress() {
        let mut notes = NotesSummary::new(sections());
        notes.handle(NotesEvent::Toggle { section: 0, point: 1 });
        assert!(notes.is_checked(0, 1));
        assert_eq!(notes.progress(), 25);

        notes.handle(NotesEvent::Toggle { section: 0, point: 1 });
        assert!(!notes.is_checked(0, 1));
        assert_eq!(notes.progress(), 0);
    }

    #[test]
    fn all_points_checked_completes() {
        let mut notes = NotesSummary::new(sections());
        for (section, point) in [(0, 0), (0, 1), (0, 2), (1, 0)] {
            notes.handle(NotesEvent::Toggle { section, point });
        }
        assert_eq!(notes.progress(), 100);
        assert!(notes.is_complete());
    }

    #[test]
    fn unknown_points_are_ignored() {
        let mut notes = NotesSummary::new(sections());
        assert_eq!(
            notes.handle(NotesEvent::Toggle { section: 1, point: 1 }),
            Transition::Ignored
        );
        assert_eq!(
            notes.handle(NotesEvent::Toggle { section: 5, point: 0 }),
            Transition::Ignored
        );
    }

    #[test]
    fn sections_without_points_report_zero_progress() {
        let notes = NotesSummary::new(vec![NotesSection {
            title: "Empty".into(),
            content: "Nothing to tick".into(),
            points: vec![],
        }]);
        assert_eq!(notes.total_points(), 0);
        assert_eq!(notes.progress(), 0);
        assert_eq!(notes.phase(), Phase::InProgress);
    }
}
