//! Plain-text rendering of payloads and running activities.

use std::fmt::Write;

use learnhub_core::dispatch::{Activity, ActivityMachine};
use learnhub_core::error::ActivityError;
use learnhub_core::model::{ContentKind, ContentPayload};
use learnhub_core::modes::timer::format_clock;

/// Labelled error state, e.g. "Configuration Error: no configuration found ...".
pub fn error(err: &ActivityError) -> String {
    format!("{}: {err}", err.title())
}

/// Commands understood by activities of `kind`.
pub fn help(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Flashcard => "flip | next | prev | reset | quit",
        ContentKind::Mcq => "select N | check | next | reset | quit",
        ContentKind::TrueFalse => "true | false | check | next | reset | quit",
        ContentKind::FillBlanks => "input TEXT | hint | check | next | reset | quit",
        ContentKind::Match => "left N | right N | reset | quit",
        ContentKind::TimerChallenge => "start | pause | answered | reset | quit",
        ContentKind::NotesSummary => "toggle SECTION POINT | reset | quit",
        ContentKind::PracticeProblems => "scratch TEXT | solution | next | reset | quit",
    }
}

/// Full listing of a generated payload.
pub fn payload(payload: &ContentPayload) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_payload(&mut out, payload);
    out
}

fn write_payload(out: &mut String, payload: &ContentPayload) -> std::fmt::Result {
    match payload {
        ContentPayload::Flashcard(cards) => {
            for (i, card) in cards.iter().enumerate() {
                writeln!(out, "{}. {}\n   -> {}", i + 1, card.front, card.back)?;
            }
        }
        ContentPayload::Mcq(questions) => {
            for (i, q) in questions.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, q.question)?;
                for (j, option) in q.options.iter().enumerate() {
                    let mark = if j == q.correct_index { "*" } else { " " };
                    writeln!(out, "  {mark} {j}) {option}")?;
                }
                writeln!(out, "   {}", q.explanation)?;
            }
        }
        ContentPayload::FillBlanks(questions) => {
            for (i, q) in questions.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, q.text)?;
                writeln!(out, "   Answer: {} (hint: {})", q.answer, q.hint)?;
            }
        }
        ContentPayload::Match(pairs) => {
            for (i, pair) in pairs.iter().enumerate() {
                writeln!(out, "{}. {} = {}", i + 1, pair.left, pair.right)?;
            }
        }
        ContentPayload::TrueFalse(statements) => {
            for (i, s) in statements.iter().enumerate() {
                let answer = if s.answer { "True" } else { "False" };
                writeln!(out, "{}. {} [{answer}]", i + 1, s.statement)?;
                writeln!(out, "   {}", s.explanation)?;
            }
        }
        ContentPayload::TimerChallenge(challenge) => {
            writeln!(out, "{} ({})", challenge.title, format_clock(challenge.duration))?;
            writeln!(out, "{}", challenge.description)?;
            for (i, q) in challenge.questions.iter().enumerate() {
                writeln!(out, "{}. {} -> {}", i + 1, q.question, q.answer)?;
            }
        }
        ContentPayload::NotesSummary(sections) => {
            for section in sections {
                writeln!(out, "## {}", section.title)?;
                writeln!(out, "{}", section.content)?;
                for point in &section.points {
                    writeln!(out, "  - {point}")?;
                }
            }
        }
        ContentPayload::PracticeProblems(problems) => {
            for (i, p) in problems.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, p.problem)?;
                writeln!(out, "   Solution: {}", p.solution)?;
            }
        }
    }
    Ok(())
}

/// The current view of a running activity, ending with its status line.
pub fn activity(activity: &Activity) -> String {
    let mut out = String::new();
    let _ = write_activity(&mut out, activity);
    out.push_str(&activity.status());
    out
}

fn write_activity(out: &mut String, activity: &Activity) -> std::fmt::Result {
    if activity.is_complete() {
        return Ok(());
    }

    match activity.machine() {
        ActivityMachine::Flashcards(deck) => {
            if let Some(side) = deck.visible_side() {
                let label = if deck.state().flipped { "Back" } else { "Front" };
                writeln!(out, "[{label}] {side}")?;
            }
        }
        ActivityMachine::MultipleChoice(quiz) => {
            if let Some(q) = quiz.current() {
                writeln!(out, "{}", q.question)?;
                for (i, option) in q.options.iter().enumerate() {
                    let selected = quiz.state().selected == Some(i);
                    let mark = match (quiz.state().checked, selected) {
                        (true, _) if i == q.correct_index => "✓",
                        (true, true) => "✗",
                        (false, true) => ">",
                        _ => " ",
                    };
                    writeln!(out, " {mark} {i}) {option}")?;
                }
                if let Some(correct) = quiz.last_result() {
                    writeln!(out, "{} {}", verdict(correct), q.explanation)?;
                    writeln!(out, "({})", quiz.next_label())?;
                }
            }
        }
        ActivityMachine::TrueFalse(tf) => {
            if let Some(s) = tf.current() {
                writeln!(out, "{}", s.statement)?;
                if let Some(answer) = tf.state().selected {
                    writeln!(out, "Your answer: {}", if answer { "True" } else { "False" })?;
                }
                if let Some(correct) = tf.last_result() {
                    writeln!(out, "{} {}", verdict(correct), s.explanation)?;
                    writeln!(out, "({})", tf.next_label())?;
                }
            }
        }
        ActivityMachine::FillBlank(blanks) => {
            if let Some(q) = blanks.current() {
                writeln!(out, "{}", q.text)?;
                if let Some(hint) = blanks.visible_hint() {
                    writeln!(out, "Hint: {hint}")?;
                }
                if !blanks.state().input.is_empty() {
                    writeln!(out, "Your answer: {}", blanks.state().input)?;
                }
                if let Some(correct) = blanks.last_result() {
                    writeln!(out, "{} The answer is: {}", verdict(correct), q.answer)?;
                }
            }
        }
        ActivityMachine::Match(game) => {
            let matches = &game.state().matches;
            writeln!(out, "Left:")?;
            for (i, pair) in game.pairs().iter().enumerate() {
                let mark = if matches.contains_key(&i) {
                    "="
                } else if game.state().selected_left == Some(i) {
                    ">"
                } else {
                    " "
                };
                writeln!(out, " {mark} {i}) {}", pair.left)?;
            }
            writeln!(out, "Right:")?;
            for (position, (pair, text)) in game.right_column().enumerate() {
                let mark = if matches.values().any(|&r| r == pair) {
                    "="
                } else {
                    " "
                };
                writeln!(out, " {mark} {position}) {text}")?;
            }
        }
        ActivityMachine::TimerChallenge(timer) => {
            let challenge = timer.challenge();
            writeln!(out, "{}: {}", challenge.title, challenge.description)?;
            if timer.is_started() {
                if let Some(q) = timer.current() {
                    writeln!(out, "Q: {}", q.question)?;
                }
            }
            if !timer.is_started() {
                writeln!(
                    out,
                    "Ready to start? {} questions, {} on the clock.",
                    challenge.questions.len(),
                    format_clock(challenge.duration)
                )?;
            } else if !timer.state().running {
                writeln!(out, "(paused, {}% of time used)", timer.elapsed_percent())?;
            }
        }
        ActivityMachine::Notes(notes) => {
            for (s, section) in notes.sections().iter().enumerate() {
                writeln!(out, "## {}", section.title)?;
                writeln!(out, "{}", section.content)?;
                for (p, point) in section.points.iter().enumerate() {
                    let mark = if notes.is_checked(s, p) { "x" } else { " " };
                    writeln!(out, "  [{mark}] {s} {p}: {point}")?;
                }
            }
        }
        ActivityMachine::Practice(practice) => {
            if let Some(p) = practice.current() {
                writeln!(out, "{}", p.problem)?;
                if !practice.state().scratch.is_empty() {
                    writeln!(out, "Your work: {}", practice.state().scratch)?;
                }
                if let Some(solution) = practice.visible_solution() {
                    writeln!(out, "Solution: {solution}")?;
                }
            }
        }
    }
    Ok(())
}

fn verdict(correct: bool) -> &'static str {
    if correct {
        "Correct!"
    } else {
        "Incorrect."
    }
}
