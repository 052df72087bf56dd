//! Timed challenge mode.
//!
//! The countdown only runs in the `running` sub-state. Reaching zero forces
//! the session to complete no matter how many questions were answered.

use crate::countdown::{Countdown, TICK_PERIOD};
use crate::model::{ContentKind, TimedQuestion, TimerChallenge};
use crate::modes::{commit, percent, Phase, Session, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Start,
    Pause,
    /// One second of running time has elapsed.
    Tick,
    MarkAnswered,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub remaining: u32,
    pub running: bool,
    pub index: usize,
    pub answered: u32,
}

impl TimerState {
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: duration,
            running: false,
            index: 0,
            answered: 0,
        }
    }

    pub fn apply(&self, challenge: &TimerChallenge, event: TimerEvent) -> Self {
        let mut next = self.clone();
        let question_count = challenge.questions.len();

        match event {
            TimerEvent::Start => {
                if self.remaining > 0 && question_count > 0 {
                    next.running = true;
                }
            }
            TimerEvent::Pause => next.running = false,
            TimerEvent::Tick => {
                if self.running && self.remaining > 0 {
                    next.remaining -= 1;
                    if next.remaining == 0 {
                        next.running = false;
                    }
                }
            }
            TimerEvent::MarkAnswered => {
                if self.running && (self.answered as usize) < question_count {
                    next.answered += 1;
                    if self.index + 1 < question_count {
                        next.index += 1;
                    }
                }
            }
            TimerEvent::Reset => next = TimerState::new(challenge.duration),
        }
        next
    }

    pub fn phase(&self) -> Phase {
        if self.remaining == 0 {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// A running timed challenge. Owns the countdown schedule while running.
///
/// While the schedule is live it is the only source of ticks: a
/// [`TimerEvent::Tick`] passed to [`Session::handle`] is ignored.
#[derive(Debug)]
pub struct TimerChallengeSession {
    challenge: TimerChallenge,
    state: TimerState,
    countdown: Option<Countdown>,
    live: bool,
}

impl TimerChallengeSession {
    pub fn new(challenge: TimerChallenge) -> Self {
        let state = TimerState::new(challenge.duration);
        Self {
            challenge,
            state,
            countdown: None,
            live: true,
        }
    }

    /// With `false`, starting never spawns a countdown and time only moves
    /// on explicit ticks.
    pub fn with_live_countdown(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn challenge(&self) -> &TimerChallenge {
        &self.challenge
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn current(&self) -> Option<&TimedQuestion> {
        self.challenge.questions.get(self.state.index)
    }

    /// Whether the countdown has begun (running, or paused part-way).
    pub fn is_started(&self) -> bool {
        self.state.running || self.state.remaining < self.challenge.duration
    }

    /// Whether a live schedule is delivering ticks.
    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_some()
    }

    /// Percentage of the duration already used.
    pub fn elapsed_percent(&self) -> u32 {
        let duration = self.challenge.duration as usize;
        percent(duration - self.state.remaining as usize, duration)
    }

    pub fn clock(&self) -> String {
        format_clock(self.state.remaining)
    }

    /// Wait for the next scheduled tick and apply it.
    ///
    /// Returns `None` when no countdown is running.
    pub async fn next_tick(&mut self) -> Option<Transition> {
        let countdown = self.countdown.as_mut()?;
        countdown.next_tick().await?;
        Some(self.step(TimerEvent::Tick))
    }

    fn step(&mut self, event: TimerEvent) -> Transition {
        let next = self.state.apply(&self.challenge, event);
        let transition = commit(ContentKind::TimerChallenge, &event, &mut self.state, next);
        self.sync_countdown();
        if transition.is_applied() && self.state.remaining == 0 && event == TimerEvent::Tick {
            tracing::info!(answered = self.state.answered, "time is up");
        }
        transition
    }

    /// Start or stop the schedule to follow the `running` sub-state.
    fn sync_countdown(&mut self) {
        match (self.state.running, self.countdown.is_some()) {
            (true, false) if self.live => self.countdown = Countdown::start(TICK_PERIOD),
            (false, true) => self.countdown = None,
            _ => {}
        }
    }
}

impl Session for TimerChallengeSession {
    type Event = TimerEvent;

    fn kind(&self) -> ContentKind {
        ContentKind::TimerChallenge
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn handle(&mut self, event: TimerEvent) -> Transition {
        if event == TimerEvent::Tick && self.is_counting_down() {
            tracing::debug!("manual tick ignored while the countdown is live");
            return Transition::Ignored;
        }
        self.step(event)
    }

    fn reset(&mut self) {
        self.handle(TimerEvent::Reset);
    }
}
