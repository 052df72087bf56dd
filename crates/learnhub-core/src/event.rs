//! Textual interaction events.
//!
//! One command per line, e.g. `select 2`, `input New Delhi`, `toggle 0 1`.
//! [`crate::dispatch::Activity::handle`] routes each event to the machine of
//! the running activity.

use std::fmt;
use std::str::FromStr;

use crate::error::ActivityError;
use crate::model::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    Flip,
    Next,
    Previous,
    /// Multiple-choice option index.
    Select(usize),
    /// True/false answer.
    Answer(bool),
    Input(String),
    Hint,
    Check,
    /// Left column pair index.
    Left(usize),
    /// Right column display position.
    Right(usize),
    Start,
    Pause,
    Answered,
    Tick,
    Toggle { section: usize, point: usize },
    Scratch(String),
    Solution,
    Reset,
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityEvent::Flip => write!(f, "flip"),
            ActivityEvent::Next => write!(f, "next"),
            ActivityEvent::Previous => write!(f, "prev"),
            ActivityEvent::Select(i) => write!(f, "select {i}"),
            ActivityEvent::Answer(b) => write!(f, "{b}"),
            ActivityEvent::Input(text) => write!(f, "input {text}"),
            ActivityEvent::Hint => write!(f, "hint"),
            ActivityEvent::Check => write!(f, "check"),
            ActivityEvent::Left(i) => write!(f, "left {i}"),
            ActivityEvent::Right(i) => write!(f, "right {i}"),
            ActivityEvent::Start => write!(f, "start"),
            ActivityEvent::Pause => write!(f, "pause"),
            ActivityEvent::Answered => write!(f, "answered"),
            ActivityEvent::Tick => write!(f, "tick"),
            ActivityEvent::Toggle { section, point } => write!(f, "toggle {section} {point}"),
            ActivityEvent::Scratch(text) => write!(f, "scratch {text}"),
            ActivityEvent::Solution => write!(f, "solution"),
            ActivityEvent::Reset => write!(f, "reset"),
        }
    }
}

impl ActivityEvent {
    /// Whether activities of `kind` understand this event at all.
    pub fn accepted_by(&self, kind: ContentKind) -> bool {
        use ActivityEvent as E;
        match self {
            E::Reset => true,
            E::Next => kind != ContentKind::NotesSummary && kind != ContentKind::Match,
            E::Check => matches!(
                kind,
                ContentKind::Mcq | ContentKind::TrueFalse | ContentKind::FillBlanks
            ),
            E::Flip | E::Previous => kind == ContentKind::Flashcard,
            E::Select(_) => kind == ContentKind::Mcq,
            E::Answer(_) => kind == ContentKind::TrueFalse,
            E::Input(_) | E::Hint => kind == ContentKind::FillBlanks,
            E::Left(_) | E::Right(_) => kind == ContentKind::Match,
            E::Start | E::Pause | E::Answered | E::Tick => kind == ContentKind::TimerChallenge,
            E::Toggle { .. } => kind == ContentKind::NotesSummary,
            E::Scratch(_) | E::Solution => kind == ContentKind::PracticeProblems,
        }
    }
}

fn index(command: &str, arg: Option<&str>) -> Result<usize, ActivityError> {
    let arg = arg.ok_or_else(|| ActivityError::InvalidEvent(format!("'{command}' needs an index")))?;
    arg.parse().map_err(|_| {
        ActivityError::InvalidEvent(format!("'{command}' expects a number, got '{arg}'"))
    })
}

fn no_args(event: ActivityEvent, command: &str, rest: &str) -> Result<ActivityEvent, ActivityError> {
    if rest.is_empty() {
        Ok(event)
    } else {
        Err(ActivityError::InvalidEvent(format!(
            "'{command}' takes no arguments"
        )))
    }
}

impl FromStr for ActivityEvent {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        match command.to_ascii_lowercase().as_str() {
            "" => Err(ActivityError::InvalidEvent("empty event".into())),
            "flip" => no_args(ActivityEvent::Flip, command, rest),
            "next" | "finish" => no_args(ActivityEvent::Next, command, rest),
            "prev" | "previous" => no_args(ActivityEvent::Previous, command, rest),
            "select" => Ok(ActivityEvent::Select(index(command, args.next())?)),
            "true" => no_args(ActivityEvent::Answer(true), command, rest),
            "false" => no_args(ActivityEvent::Answer(false), command, rest),
            "input" => Ok(ActivityEvent::Input(rest.to_string())),
            "hint" => no_args(ActivityEvent::Hint, command, rest),
            "check" => no_args(ActivityEvent::Check, command, rest),
            "left" => Ok(ActivityEvent::Left(index(command, args.next())?)),
            "right" => Ok(ActivityEvent::Right(index(command, args.next())?)),
            "start" => no_args(ActivityEvent::Start, command, rest),
            "pause" => no_args(ActivityEvent::Pause, command, rest),
            "answered" => no_args(ActivityEvent::Answered, command, rest),
            "tick" => no_args(ActivityEvent::Tick, command, rest),
            "toggle" => {
                let section = index(command, args.next())?;
                let point = index(command, args.next())?;
                Ok(ActivityEvent::Toggle { section, point })
            }
            "scratch" => Ok(ActivityEvent::Scratch(rest.to_string())),
            "solution" => no_args(ActivityEvent::Solution, command, rest),
            "reset" => no_args(ActivityEvent::Reset, command, rest),
            other => Err(ActivityError::InvalidEvent(format!(
                "unknown command '{other}'"
            ))),
        }
    }
}
