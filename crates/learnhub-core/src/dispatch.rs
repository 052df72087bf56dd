//! Activity dispatcher.
//!
//! Resolves a mode id through the registry, generates its payload, and binds
//! the payload to the state machine for its content kind.

use serde::{Deserialize, Serialize};

use crate::error::ActivityError;
use crate::event::ActivityEvent;
use crate::model::{ChapterContext, ContentKind, ContentPayload};
use crate::modes::{
    ChoiceEvent, FillBlank, FillBlankEvent, FlashcardDeck, FlashcardEvent, MatchEvent, MatchPairs,
    MultipleChoice, NotesEvent, NotesSummary, Phase, PracticeEvent, PracticeProblems,
    ScoreSummary, Session, TimerChallengeSession, TimerEvent, Transition, TrueFalse,
};
use crate::registry::{self, Registry};

/// Learner preferences that shape a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// When false, fill-in-the-blank hints stay hidden.
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Seed for match-mode shuffling. `None` draws from OS entropy.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
    /// When false, timed challenges never spawn a countdown and only
    /// advance on explicit `tick` events (scripted replays).
    #[serde(default = "default_true")]
    pub live_countdown: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_hints: true,
            shuffle_seed: None,
            live_countdown: true,
        }
    }
}

/// The state machine bound to a running activity.
#[derive(Debug)]
pub enum ActivityMachine {
    Flashcards(FlashcardDeck),
    MultipleChoice(MultipleChoice),
    FillBlank(FillBlank),
    Match(MatchPairs),
    TrueFalse(TrueFalse),
    TimerChallenge(TimerChallengeSession),
    Notes(NotesSummary),
    Practice(PracticeProblems),
}

impl ActivityMachine {
    pub fn kind(&self) -> ContentKind {
        match self {
            ActivityMachine::Flashcards(s) => s.kind(),
            ActivityMachine::MultipleChoice(s) => s.kind(),
            ActivityMachine::FillBlank(s) => s.kind(),
            ActivityMachine::Match(s) => s.kind(),
            ActivityMachine::TrueFalse(s) => s.kind(),
            ActivityMachine::TimerChallenge(s) => s.kind(),
            ActivityMachine::Notes(s) => s.kind(),
            ActivityMachine::Practice(s) => s.kind(),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ActivityMachine::Flashcards(s) => s.phase(),
            ActivityMachine::MultipleChoice(s) => s.phase(),
            ActivityMachine::FillBlank(s) => s.phase(),
            ActivityMachine::Match(s) => s.phase(),
            ActivityMachine::TrueFalse(s) => s.phase(),
            ActivityMachine::TimerChallenge(s) => s.phase(),
            ActivityMachine::Notes(s) => s.phase(),
            ActivityMachine::Practice(s) => s.phase(),
        }
    }

    fn reset(&mut self) {
        match self {
            ActivityMachine::Flashcards(s) => s.reset(),
            ActivityMachine::MultipleChoice(s) => s.reset(),
            ActivityMachine::FillBlank(s) => s.reset(),
            ActivityMachine::Match(s) => s.reset(),
            ActivityMachine::TrueFalse(s) => s.reset(),
            ActivityMachine::TimerChallenge(s) => s.reset(),
            ActivityMachine::Notes(s) => s.reset(),
            ActivityMachine::Practice(s) => s.reset(),
        }
    }
}

/// A dispatched activity: the mode it came from plus its live session.
#[derive(Debug)]
pub struct Activity {
    mode_id: String,
    machine: ActivityMachine,
}

/// Dispatch a mode from the standard registry.
pub fn dispatch(
    mode_id: &str,
    ctx: Option<&ChapterContext>,
    options: &SessionOptions,
) -> Result<Activity, ActivityError> {
    dispatch_with(registry::standard(), mode_id, ctx, options)
}

/// Dispatch a mode from a specific registry.
pub fn dispatch_with(
    registry: &Registry,
    mode_id: &str,
    ctx: Option<&ChapterContext>,
    options: &SessionOptions,
) -> Result<Activity, ActivityError> {
    let config = registry
        .lookup(mode_id)
        .ok_or_else(|| ActivityError::ConfigNotFound {
            mode_id: mode_id.to_string(),
        })?;

    let payload = (config.generate)(ctx);
    let unsupported = || ActivityError::UnsupportedType {
        mode_id: Some(mode_id.to_string()),
        kind: config.kind.to_string(),
    };
    if payload.kind() != config.kind {
        tracing::warn!(
            mode_id,
            declared = %config.kind,
            produced = %payload.kind(),
            "generator produced content of the wrong kind"
        );
        return Err(unsupported());
    }
    payload.validate(mode_id)?;

    let items = payload.item_count();
    let machine = match (config.kind, payload) {
        (ContentKind::Flashcard, ContentPayload::Flashcard(cards)) => {
            ActivityMachine::Flashcards(FlashcardDeck::new(cards))
        }
        (ContentKind::Mcq, ContentPayload::Mcq(questions)) => {
            ActivityMachine::MultipleChoice(MultipleChoice::new(questions))
        }
        (ContentKind::FillBlanks, ContentPayload::FillBlanks(questions)) => {
            ActivityMachine::FillBlank(FillBlank::new(questions).with_hints(options.show_hints))
        }
        (ContentKind::Match, ContentPayload::Match(pairs)) => {
            ActivityMachine::Match(match options.shuffle_seed {
                Some(seed) => MatchPairs::new(pairs, seed),
                None => MatchPairs::from_entropy(pairs),
            })
        }
        (ContentKind::TrueFalse, ContentPayload::TrueFalse(statements)) => {
            ActivityMachine::TrueFalse(TrueFalse::new(statements))
        }
        (ContentKind::TimerChallenge, ContentPayload::TimerChallenge(challenge)) => {
            ActivityMachine::TimerChallenge(
                TimerChallengeSession::new(challenge).with_live_countdown(options.live_countdown),
            )
        }
        (ContentKind::NotesSummary, ContentPayload::NotesSummary(sections)) => {
            ActivityMachine::Notes(NotesSummary::new(sections))
        }
        (ContentKind::PracticeProblems, ContentPayload::PracticeProblems(problems)) => {
            ActivityMachine::Practice(PracticeProblems::new(problems))
        }
        _ => return Err(unsupported()),
    };

    tracing::info!(mode_id, kind = %config.kind, items, "activity dispatched");

    Ok(Activity {
        mode_id: mode_id.to_string(),
        machine,
    })
}

impl Activity {
    pub fn mode_id(&self) -> &str {
        &self.mode_id
    }

    pub fn kind(&self) -> ContentKind {
        self.machine.kind()
    }

    pub fn machine(&self) -> &ActivityMachine {
        &self.machine
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    /// Route an event to the running machine.
    ///
    /// Events that exist but do not apply in the current state are
    /// [`Transition::Ignored`]; events that make no sense for this kind of
    /// activity are an error.
    pub fn handle(&mut self, event: ActivityEvent) -> Result<Transition, ActivityError> {
        use ActivityEvent as E;
        use ActivityMachine as M;

        let transition = match (&mut self.machine, event) {
            (machine, E::Reset) => {
                machine.reset();
                Transition::Applied
            }

            (M::Flashcards(s), E::Flip) => s.handle(FlashcardEvent::Flip),
            (M::Flashcards(s), E::Next) => s.handle(FlashcardEvent::Next),
            (M::Flashcards(s), E::Previous) => s.handle(FlashcardEvent::Previous),

            (M::MultipleChoice(s), E::Select(i)) => s.handle(ChoiceEvent::Select(i)),
            (M::MultipleChoice(s), E::Check) => s.handle(ChoiceEvent::Check),
            (M::MultipleChoice(s), E::Next) => s.handle(ChoiceEvent::Next),

            (M::TrueFalse(s), E::Answer(b)) => s.handle(ChoiceEvent::Select(b)),
            (M::TrueFalse(s), E::Check) => s.handle(ChoiceEvent::Check),
            (M::TrueFalse(s), E::Next) => s.handle(ChoiceEvent::Next),

            (M::FillBlank(s), E::Input(text)) => s.handle(FillBlankEvent::Input(text)),
            (M::FillBlank(s), E::Hint) => s.handle(FillBlankEvent::ToggleHint),
            (M::FillBlank(s), E::Check) => s.handle(FillBlankEvent::Check),
            (M::FillBlank(s), E::Next) => s.handle(FillBlankEvent::Next),

            (M::Match(s), E::Left(i)) => s.handle(MatchEvent::SelectLeft(i)),
            (M::Match(s), E::Right(position)) => match s.right_at(position) {
                Some(pair) => s.handle(MatchEvent::SelectRight(pair)),
                None => Transition::Ignored,
            },

            (M::TimerChallenge(s), E::Start) => s.handle(TimerEvent::Start),
            (M::TimerChallenge(s), E::Pause) => s.handle(TimerEvent::Pause),
            (M::TimerChallenge(s), E::Tick) => s.handle(TimerEvent::Tick),
            (M::TimerChallenge(s), E::Answered | E::Next) => s.handle(TimerEvent::MarkAnswered),

            (M::Notes(s), E::Toggle { section, point }) => {
                s.handle(NotesEvent::Toggle { section, point })
            }

            (M::Practice(s), E::Scratch(text)) => s.handle(PracticeEvent::Scratch(text)),
            (M::Practice(s), E::Solution) => s.handle(PracticeEvent::ToggleSolution),
            (M::Practice(s), E::Next) => s.handle(PracticeEvent::Next),

            (machine, event) => {
                return Err(ActivityError::UnsupportedEvent {
                    kind: machine.kind(),
                    event: event.to_string(),
                })
            }
        };
        Ok(transition)
    }

    /// Return the session to its freshly-dispatched state.
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Whether the activity has a live countdown delivering ticks.
    pub fn is_counting_down(&self) -> bool {
        matches!(&self.machine, ActivityMachine::TimerChallenge(s) if s.is_counting_down())
    }

    /// Wait for and apply the next countdown tick.
    ///
    /// Returns `None` immediately for activities without a running countdown.
    pub async fn next_tick(&mut self) -> Option<Transition> {
        match &mut self.machine {
            ActivityMachine::TimerChallenge(s) => s.next_tick().await,
            _ => None,
        }
    }

    /// Running score for scored kinds.
    pub fn score(&self) -> Option<ScoreSummary> {
        match &self.machine {
            ActivityMachine::MultipleChoice(s) => Some(s.summary()),
            ActivityMachine::TrueFalse(s) => Some(s.summary()),
            ActivityMachine::FillBlank(s) => Some(s.summary()),
            _ => None,
        }
    }

    /// One-line progress report for the learner.
    pub fn status(&self) -> String {
        let complete = self.is_complete();
        match &self.machine {
            ActivityMachine::Flashcards(s) if complete => {
                format!("All {} cards reviewed.", s.cards().len())
            }
            ActivityMachine::Flashcards(s) => {
                format!("Card {} of {}", s.state().index + 1, s.cards().len())
            }
            ActivityMachine::MultipleChoice(s) if complete => {
                format!("Quiz Complete! Your final score: {}", s.summary())
            }
            ActivityMachine::TrueFalse(s) if complete => {
                format!("Exercise Complete! Your final score: {}", s.summary())
            }
            ActivityMachine::FillBlank(s) if complete => {
                format!("Exercise Complete! Your final score: {}", s.summary())
            }
            ActivityMachine::MultipleChoice(s) => {
                question_line(s.state().index, s.items().len(), s.state().score)
            }
            ActivityMachine::TrueFalse(s) => {
                question_line(s.state().index, s.items().len(), s.state().score)
            }
            ActivityMachine::FillBlank(s) => {
                question_line(s.state().index, s.questions().len(), s.state().score)
            }
            ActivityMachine::Match(s) if complete => {
                let mut line = format!(
                    "Complete! You matched {} out of {} correctly.",
                    s.correct_matches(),
                    s.pairs().len()
                );
                if s.correct_matches() == s.pairs().len() {
                    line.push_str(" Perfect score!");
                }
                line
            }
            ActivityMachine::Match(s) => {
                format!("Matched: {} of {}", s.matched_count(), s.pairs().len())
            }
            ActivityMachine::TimerChallenge(s) if complete => format!(
                "Time's Up! You answered {} out of {} questions.",
                s.state().answered,
                s.challenge().questions.len()
            ),
            ActivityMachine::TimerChallenge(s) => format!(
                "{} remaining | Answered: {} of {}",
                s.clock(),
                s.state().answered,
                s.challenge().questions.len()
            ),
            ActivityMachine::Notes(_) if complete => "All Points Reviewed!".to_string(),
            ActivityMachine::Notes(s) => format!(
                "Progress: {}/{} points reviewed ({}%)",
                s.checked_count(),
                s.total_points(),
                s.progress()
            ),
            ActivityMachine::Practice(s) if complete => {
                format!("All {} problems reviewed.", s.problems().len())
            }
            ActivityMachine::Practice(s) => {
                format!("Problem {} of {}", s.state().index + 1, s.problems().len())
            }
        }
    }
}

fn question_line(index: usize, total: usize, score: u32) -> String {
    format!("Question {} of {} | Score: {}", index + 1, total, score)
}
