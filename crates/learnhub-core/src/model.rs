//! Core data model types for learnhub.
//!
//! Chapter context, the closed set of content kinds, and the payload shapes
//! each learning-mode state machine consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ActivityError;

/// Chapter metadata used to parameterize generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContext {
    /// Display name of the subject (e.g. "Mathematics").
    pub subject_name: String,
    /// 1-based chapter number within the subject.
    pub chapter_number: u32,
    /// Chapter title (e.g. "Real Numbers").
    pub chapter_title: String,
}

impl ChapterContext {
    pub fn new(
        subject_name: impl Into<String>,
        chapter_number: u32,
        chapter_title: impl Into<String>,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            chapter_number: chapter_number.max(1),
            chapter_title: chapter_title.into(),
        }
    }
}

impl fmt::Display for ChapterContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Chapter {}: {}",
            self.subject_name, self.chapter_number, self.chapter_title
        )
    }
}

/// The closed set of content kinds. Each kind has exactly one payload shape
/// and exactly one state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Flashcard,
    Mcq,
    FillBlanks,
    Match,
    TrueFalse,
    TimerChallenge,
    NotesSummary,
    PracticeProblems,
}

impl ContentKind {
    pub const ALL: [ContentKind; 8] = [
        ContentKind::Flashcard,
        ContentKind::Mcq,
        ContentKind::FillBlanks,
        ContentKind::Match,
        ContentKind::TrueFalse,
        ContentKind::TimerChallenge,
        ContentKind::NotesSummary,
        ContentKind::PracticeProblems,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Flashcard => "flashcard",
            ContentKind::Mcq => "mcq",
            ContentKind::FillBlanks => "fill-blanks",
            ContentKind::Match => "match",
            ContentKind::TrueFalse => "true-false",
            ContentKind::TimerChallenge => "timer-challenge",
            ContentKind::NotesSummary => "notes-summary",
            ContentKind::PracticeProblems => "practice-problems",
        }
    }

    /// Whether sessions of this kind keep a score.
    pub fn is_scored(&self) -> bool {
        matches!(
            self,
            ContentKind::Mcq | ContentKind::FillBlanks | ContentKind::TrueFalse
        )
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| ActivityError::UnsupportedType {
                mode_id: None,
                kind: s.trim().to_string(),
            })
    }
}

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

/// A sentence with one blank to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankQuestion {
    pub text: String,
    pub answer: String,
    pub hint: String,
}

/// A left/right pair. Pairs are matched by index identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

/// A statement judged true or false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalseStatement {
    pub statement: String,
    pub answer: bool,
    pub explanation: String,
}

/// A quick question inside a timed challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedQuestion {
    pub question: String,
    pub answer: String,
}

/// Content for a timed challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerChallenge {
    /// Countdown length in seconds.
    pub duration: u32,
    pub title: String,
    pub description: String,
    pub questions: Vec<TimedQuestion>,
}

/// One section of a notes/summary sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesSection {
    pub title: String,
    pub content: String,
    pub points: Vec<String>,
}

/// An open-response problem with a worked solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub problem: String,
    pub solution: String,
}

/// Generated content, one variant per [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum ContentPayload {
    Flashcard(Vec<Flashcard>),
    Mcq(Vec<McqQuestion>),
    FillBlanks(Vec<FillBlankQuestion>),
    Match(Vec<MatchPair>),
    TrueFalse(Vec<TrueFalseStatement>),
    TimerChallenge(TimerChallenge),
    NotesSummary(Vec<NotesSection>),
    PracticeProblems(Vec<PracticeProblem>),
}

impl ContentPayload {
    /// The content kind this payload's shape belongs to.
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentPayload::Flashcard(_) => ContentKind::Flashcard,
            ContentPayload::Mcq(_) => ContentKind::Mcq,
            ContentPayload::FillBlanks(_) => ContentKind::FillBlanks,
            ContentPayload::Match(_) => ContentKind::Match,
            ContentPayload::TrueFalse(_) => ContentKind::TrueFalse,
            ContentPayload::TimerChallenge(_) => ContentKind::TimerChallenge,
            ContentPayload::NotesSummary(_) => ContentKind::NotesSummary,
            ContentPayload::PracticeProblems(_) => ContentKind::PracticeProblems,
        }
    }

    /// Number of top-level items (cards, questions, pairs, sections, ...).
    pub fn item_count(&self) -> usize {
        match self {
            ContentPayload::Flashcard(v) => v.len(),
            ContentPayload::Mcq(v) => v.len(),
            ContentPayload::FillBlanks(v) => v.len(),
            ContentPayload::Match(v) => v.len(),
            ContentPayload::TrueFalse(v) => v.len(),
            ContentPayload::TimerChallenge(t) => t.questions.len(),
            ContentPayload::NotesSummary(v) => v.len(),
            ContentPayload::PracticeProblems(v) => v.len(),
        }
    }

    /// Every human-readable string in the payload, in document order.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        match self {
            ContentPayload::Flashcard(cards) => {
                for c in cards {
                    out.extend([c.front.as_str(), c.back.as_str()]);
                }
            }
            ContentPayload::Mcq(questions) => {
                for q in questions {
                    out.push(&q.question);
                    out.extend(q.options.iter().map(String::as_str));
                    out.push(&q.explanation);
                }
            }
            ContentPayload::FillBlanks(questions) => {
                for q in questions {
                    out.extend([q.text.as_str(), q.answer.as_str(), q.hint.as_str()]);
                }
            }
            ContentPayload::Match(pairs) => {
                for p in pairs {
                    out.extend([p.left.as_str(), p.right.as_str()]);
                }
            }
            ContentPayload::TrueFalse(statements) => {
                for s in statements {
                    out.extend([s.statement.as_str(), s.explanation.as_str()]);
                }
            }
            ContentPayload::TimerChallenge(t) => {
                out.extend([t.title.as_str(), t.description.as_str()]);
                for q in &t.questions {
                    out.extend([q.question.as_str(), q.answer.as_str()]);
                }
            }
            ContentPayload::NotesSummary(sections) => {
                for s in sections {
                    out.extend([s.title.as_str(), s.content.as_str()]);
                    out.extend(s.points.iter().map(String::as_str));
                }
            }
            ContentPayload::PracticeProblems(problems) => {
                for p in problems {
                    out.extend([p.problem.as_str(), p.solution.as_str()]);
                }
            }
        }
        out
    }

    /// Check the structural invariants of the payload.
    ///
    /// Empty item sequences yield [`ActivityError::EmptyPayload`]; other shape
    /// violations yield [`ActivityError::MalformedPayload`].
    pub fn validate(&self, mode_id: &str) -> Result<(), ActivityError> {
        if self.item_count() == 0 {
            return Err(ActivityError::EmptyPayload {
                mode_id: mode_id.to_string(),
            });
        }

        let malformed = |reason: String| ActivityError::MalformedPayload {
            mode_id: mode_id.to_string(),
            reason,
        };

        match self {
            ContentPayload::Mcq(questions) => {
                for (i, q) in questions.iter().enumerate() {
                    if q.options.len() < 2 {
                        return Err(malformed(format!(
                            "question {} has {} option(s), need at least 2",
                            i + 1,
                            q.options.len()
                        )));
                    }
                    if q.correct_index >= q.options.len() {
                        return Err(malformed(format!(
                            "question {} has correct_index {} but only {} options",
                            i + 1,
                            q.correct_index,
                            q.options.len()
                        )));
                    }
                }
            }
            ContentPayload::TimerChallenge(t) if t.duration == 0 => {
                return Err(malformed("timer duration must be positive".into()));
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(options: &[&str], correct_index: usize) -> McqQuestion {
        McqQuestion {
            question: "Q".into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_index,
            explanation: String::new(),
        }
    }

    #[test]
    fn content_kind_display_and_parse() {
        assert_eq!(ContentKind::FillBlanks.to_string(), "fill-blanks");
        assert_eq!(ContentKind::TimerChallenge.to_string(), "timer-challenge");
        for kind in ContentKind::ALL {
            assert_eq!(kind.as_str().parse::<ContentKind>().unwrap(), kind);
        }
        let err = "crossword".parse::<ContentKind>().unwrap_err();
        assert!(matches!(err, ActivityError::UnsupportedType { .. }));
    }

    #[test]
    fn payload_kind_matches_variant() {
        assert_eq!(
            ContentPayload::Match(vec![]).kind(),
            ContentKind::Match
        );
        assert_eq!(
            ContentPayload::PracticeProblems(vec![]).kind(),
            ContentKind::PracticeProblems
        );
    }

    #[test]
    fn validate_rejects_empty_payload() {
        let err = ContentPayload::Flashcard(vec![])
            .validate("flashcards")
            .unwrap_err();
        assert!(matches!(err, ActivityError::EmptyPayload { .. }));

        let timer = ContentPayload::TimerChallenge(TimerChallenge {
            duration: 60,
            title: "t".into(),
            description: "d".into(),
            questions: vec![],
        });
        assert!(matches!(
            timer.validate("speed-test"),
            Err(ActivityError::EmptyPayload { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_mcq() {
        let out_of_range = ContentPayload::Mcq(vec![mcq(&["a", "b"], 2)]);
        assert!(matches!(
            out_of_range.validate("quiz"),
            Err(ActivityError::MalformedPayload { .. })
        ));

        let single_option = ContentPayload::Mcq(vec![mcq(&["a"], 0)]);
        assert!(matches!(
            single_option.validate("quiz"),
            Err(ActivityError::MalformedPayload { .. })
        ));

        assert!(ContentPayload::Mcq(vec![mcq(&["a", "b"], 1)])
            .validate("quiz")
            .is_ok());
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let timer = ContentPayload::TimerChallenge(TimerChallenge {
            duration: 0,
            title: "t".into(),
            description: "d".into(),
            questions: vec![TimedQuestion {
                question: "q".into(),
                answer: "a".into(),
            }],
        });
        assert!(matches!(
            timer.validate("speed-test"),
            Err(ActivityError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn payload_serializes_with_type_tag() {
        let payload = ContentPayload::TrueFalse(vec![TrueFalseStatement {
            statement: "Water is H2O.".into(),
            answer: true,
            explanation: String::new(),
        }]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "true-false");
        assert_eq!(json["content"][0]["answer"], true);
    }

    #[test]
    fn chapter_context_display() {
        let ctx = ChapterContext::new("Mathematics", 1, "Real Numbers");
        assert_eq!(ctx.to_string(), "Mathematics - Chapter 1: Real Numbers");
        assert_eq!(ChapterContext::new("Science", 0, "x").chapter_number, 1);
    }
}
