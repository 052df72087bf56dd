//! Content generators for the standard learning modes.
//!
//! Each generator is pure and total: with a chapter context it templates the
//! chapter into its text, without one it returns a fixed generic example of
//! the same shape.

use crate::model::{
    ChapterContext, ContentPayload, FillBlankQuestion, Flashcard, MatchPair, McqQuestion,
    NotesSection, PracticeProblem, TimedQuestion, TimerChallenge, TrueFalseStatement,
};

/// Chapter-templated text, or the generic fallback when there is no context.
fn text<F>(ctx: Option<&ChapterContext>, templated: F, generic: &str) -> String
where
    F: FnOnce(&ChapterContext) -> String,
{
    ctx.map(templated).unwrap_or_else(|| generic.to_string())
}

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn section(
    ctx: Option<&ChapterContext>,
    title: (fn(&ChapterContext) -> String, &str),
    content: (fn(&ChapterContext) -> String, &str),
    points: &[(fn(&ChapterContext) -> String, &str)],
) -> NotesSection {
    NotesSection {
        title: text(ctx, title.0, title.1),
        content: text(ctx, content.0, content.1),
        points: points.iter().map(|(t, g)| text(ctx, t, g)).collect(),
    }
}

pub fn flashcards(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::Flashcard(vec![
        Flashcard {
            front: text(ctx, |c| format!("Key concept from {}", c.chapter_title), "What is a polynomial?"),
            back: text(
                ctx,
                |c| format!("Important definition or formula related to Chapter {}", c.chapter_number),
                "An algebraic expression with variables and coefficients",
            ),
        },
        Flashcard {
            front: text(ctx, |c| format!("Formula from {}", c.chapter_title), "What is the quadratic formula?"),
            back: text(ctx, |_| "Key formula: ax² + bx + c = 0".into(), "x = (-b ± √(b²-4ac)) / 2a"),
        },
        Flashcard {
            front: text(ctx, |c| format!("Important term in {}", c.subject_name), "Define real numbers"),
            back: text(
                ctx,
                |c| format!("Definition related to {}", c.chapter_title),
                "Numbers that can be found on the number line, including rational and irrational numbers",
            ),
        },
    ])
}

pub fn quiz(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::Mcq(vec![
        McqQuestion {
            question: text(ctx, |c| format!("Question about {}", c.chapter_title), "What is the value of π (pi)?"),
            options: options(&["3.14", "2.71", "1.41", "1.73"]),
            correct_index: 0,
            explanation: text(
                ctx,
                |c| format!("This relates to concepts in Chapter {}", c.chapter_number),
                "π (pi) is approximately 3.14159...",
            ),
        },
        McqQuestion {
            question: text(ctx, |c| format!("Another question from {}", c.subject_name), "Which of these is a prime number?"),
            options: options(&["4", "6", "7", "9"]),
            correct_index: 2,
            explanation: text(
                ctx,
                |c| format!("Based on {} principles", c.chapter_title),
                "7 is only divisible by 1 and itself",
            ),
        },
    ])
}

pub fn mcq(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::Mcq(vec![
        McqQuestion {
            question: text(ctx, |c| format!("MCQ from {}", c.chapter_title), "What is the square root of 144?"),
            options: options(&["10", "11", "12", "13"]),
            correct_index: 2,
            explanation: text(
                ctx,
                |c| format!("Covered in {} - Chapter {}", c.subject_name, c.chapter_number),
                "12 × 12 = 144",
            ),
        },
        McqQuestion {
            question: text(
                ctx,
                |c| format!("Practice question for {}", c.chapter_title),
                "Which element has atomic number 1?",
            ),
            options: options(&["Helium", "Hydrogen", "Oxygen", "Carbon"]),
            correct_index: 1,
            explanation: text(
                ctx,
                |c| format!("From your {} syllabus", c.subject_name),
                "Hydrogen is the first element in the periodic table",
            ),
        },
    ])
}

pub fn fill_blanks(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::FillBlanks(vec![
        FillBlankQuestion {
            text: text(
                ctx,
                |c| format!("The main concept of {} is _____.", c.chapter_title),
                "The capital of India is _____.",
            ),
            answer: text(ctx, |_| "understanding".into(), "New Delhi"),
            hint: text(ctx, |c| format!("Think about Chapter {}", c.chapter_number), "It starts with N"),
        },
        FillBlankQuestion {
            text: text(
                ctx,
                |c| format!("In {}, we learn that _____ is important.", c.subject_name),
                "Water boils at _____ degrees Celsius.",
            ),
            answer: text(ctx, |_| "practice".into(), "100"),
            hint: text(ctx, |_| "Key takeaway from this chapter".into(), "A round number"),
        },
    ])
}

pub fn match_following(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::Match(vec![
        MatchPair {
            left: text(ctx, |c| format!("Term from {}", c.chapter_title), "Photosynthesis"),
            right: text(
                ctx,
                |c| format!("Definition (Chapter {})", c.chapter_number),
                "Process by which plants make food",
            ),
        },
        MatchPair {
            left: text(ctx, |c| format!("Concept in {}", c.subject_name), "Democracy"),
            right: text(ctx, |_| "Related to your chapter".into(), "Government by the people"),
        },
        MatchPair {
            left: text(ctx, |_| "Key formula".into(), "Pythagorean theorem"),
            right: text(ctx, |c| format!("From {}", c.chapter_title), "a² + b² = c²"),
        },
    ])
}

pub fn true_false(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::TrueFalse(vec![
        TrueFalseStatement {
            statement: text(
                ctx,
                |c| format!("{} covers important concepts.", c.chapter_title),
                "The Earth is flat.",
            ),
            answer: ctx.is_some(),
            explanation: text(
                ctx,
                |c| format!("Yes, Chapter {} is fundamental", c.chapter_number),
                "The Earth is spherical",
            ),
        },
        TrueFalseStatement {
            statement: text(
                ctx,
                |c| format!("{} is not important for exams.", c.subject_name),
                "Water is composed of H2O.",
            ),
            answer: ctx.is_none(),
            explanation: text(
                ctx,
                |c| format!("{} is crucial for your studies", c.subject_name),
                "Water molecules contain 2 hydrogen and 1 oxygen atom",
            ),
        },
    ])
}

pub fn practice(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::PracticeProblems(vec![PracticeProblem {
        problem: text(
            ctx,
            |c| {
                format!(
                    "Solve this problem from {}:\n\nApply the concepts you learned in Chapter {}.",
                    c.chapter_title, c.chapter_number
                )
            },
            "Solve: 2x + 5 = 15",
        ),
        solution: text(
            ctx,
            |c| {
                format!(
                    "Step 1: Review the chapter concepts\nStep 2: Apply the formula\nStep 3: Calculate the result\n\nAnswer: Based on {} principles",
                    c.chapter_title
                )
            },
            "Step 1: Subtract 5 from both sides\n2x = 10\n\nStep 2: Divide by 2\nx = 5",
        ),
    }])
}

pub fn essay(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::PracticeProblems(vec![PracticeProblem {
        problem: text(
            ctx,
            |c| {
                format!(
                    "Essay Question: Discuss the main concepts covered in {} ({} - Chapter {}).\n\nWrite a detailed answer covering all key points.",
                    c.chapter_title, c.subject_name, c.chapter_number
                )
            },
            "Write an essay on the importance of education in modern society.",
        ),
        solution: text(
            ctx,
            |c| {
                format!(
                    "Sample Answer:\n\nIntroduction: {} is a crucial chapter in {}...\n\nBody: The main concepts include...\n\nConclusion: Understanding these concepts is essential for...",
                    c.chapter_title, c.subject_name
                )
            },
            "Sample Answer:\n\nEducation plays a vital role in shaping individuals and society...",
        ),
    }])
}

pub fn summary(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![
        section(
            ctx,
            (|c| format!("Overview of {}", c.chapter_title), "Key Concepts"),
            (
                |c| {
                    format!(
                        "This chapter ({}) in {} covers fundamental topics that are essential for your understanding.",
                        c.chapter_number, c.subject_name
                    )
                },
                "Important points to remember for your exams.",
            ),
            &[
                (|c| format!("Main concept from {}", c.chapter_title), "First key point"),
                (|_| "Important formula or definition".into(), "Second key point"),
                (|_| "Application and examples".into(), "Third key point"),
            ],
        ),
        section(
            ctx,
            (|_| "Important Formulas".into(), "Additional Notes"),
            (
                |c| format!("Key formulas and equations from Chapter {}", c.chapter_number),
                "Extra information to help you succeed.",
            ),
            &[(|_| "Formula 1".into(), "Note 1"), (|_| "Formula 2".into(), "Note 2")],
        ),
    ])
}

pub fn notes(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Notes: {}", c.chapter_title), "Study Notes"),
        (
            |c| format!("Organized notes for {} - Chapter {}", c.subject_name, c.chapter_number),
            "Your comprehensive study guide.",
        ),
        &[
            (|c| format!("Key point from {}", c.chapter_title), "Important concept 1"),
            (|_| "Definitions and terms".into(), "Important concept 2"),
            (|_| "Examples and applications".into(), "Important concept 3"),
        ],
    )])
}

pub fn revision(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Quick Revision: {}", c.chapter_title), "Quick Revision Points"),
        (
            |c| format!("Fast review of Chapter {} in {}", c.chapter_number, c.subject_name),
            "Rapid review of key topics.",
        ),
        &[
            (|c| format!("Must-know from {}", c.chapter_title), "Critical point 1"),
            (|_| "Important formulas".into(), "Critical point 2"),
            (|_| "Common mistakes to avoid".into(), "Critical point 3"),
            (|_| "Exam tips".into(), "Critical point 4"),
        ],
    )])
}

pub fn mindmap(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Mind Map: {}", c.chapter_title), "Concept Mind Map"),
        (
            |c| format!("Visual representation of concepts in Chapter {}", c.chapter_number),
            "Visualize how concepts connect.",
        ),
        &[
            (|c| format!("Central concept: {}", c.chapter_title), "Main topic"),
            (|_| "Branch 1: Key subtopic".into(), "Subtopic 1"),
            (|_| "Branch 2: Related concepts".into(), "Subtopic 2"),
            (|_| "Branch 3: Applications".into(), "Subtopic 3"),
        ],
    )])
}

pub fn video(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Video Lessons: {}", c.chapter_title), "Video Learning"),
        (
            |c| {
                format!(
                    "Watch animated explanations for {} - Chapter {}",
                    c.subject_name, c.chapter_number
                )
            },
            "Video content will be available here.",
        ),
        &[
            (|c| format!("Introduction to {}", c.chapter_title), "Video 1: Introduction"),
            (|_| "Detailed explanation with examples".into(), "Video 2: Core concepts"),
            (|_| "Practice problems walkthrough".into(), "Video 3: Practice"),
        ],
    )])
}

pub fn audio(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Audio Learning: {}", c.chapter_title), "Audio Lessons"),
        (
            |c| format!("Listen to {} - Chapter {} on the go", c.subject_name, c.chapter_number),
            "Audio content for learning anywhere.",
        ),
        &[
            (|c| format!("Audio summary of {}", c.chapter_title), "Audio track 1"),
            (|_| "Key concepts explained".into(), "Audio track 2"),
            (|_| "Important formulas and definitions".into(), "Audio track 3"),
        ],
    )])
}

pub fn diagrams(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Diagrams: {}", c.chapter_title), "Interactive Diagrams"),
        (
            |c| format!("Visual diagrams for {} - Chapter {}", c.subject_name, c.chapter_number),
            "Explore labeled diagrams and visuals.",
        ),
        &[
            (|c| format!("Diagram 1: Main concept from {}", c.chapter_title), "Diagram 1"),
            (|_| "Diagram 2: Process flow".into(), "Diagram 2"),
            (|_| "Diagram 3: Relationships".into(), "Diagram 3"),
        ],
    )])
}

pub fn timeline(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Timeline: {}", c.chapter_title), "Timeline View"),
        (
            |c| {
                format!(
                    "Chronological view of events in {} - Chapter {}",
                    c.subject_name, c.chapter_number
                )
            },
            "Understand events in chronological order.",
        ),
        &[
            (|c| format!("Event 1 from {}", c.chapter_title), "Event 1: Beginning"),
            (|_| "Event 2: Development".into(), "Event 2: Middle"),
            (|_| "Event 3: Conclusion".into(), "Event 3: End"),
        ],
    )])
}

pub fn compare(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::NotesSummary(vec![section(
        ctx,
        (|c| format!("Compare & Contrast: {}", c.chapter_title), "Comparison View"),
        (
            |c| format!("Side-by-side comparison of concepts in Chapter {}", c.chapter_number),
            "Compare similar concepts.",
        ),
        &[
            (|c| format!("Concept A from {}", c.chapter_title), "Concept A"),
            (|c| format!("Concept B from {}", c.chapter_title), "Concept B"),
            (|_| "Key differences and similarities".into(), "Similarities and differences"),
        ],
    )])
}

pub fn speed_test(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::TimerChallenge(TimerChallenge {
        duration: 300,
        title: text(ctx, |c| format!("Speed Test: {}", c.chapter_title), "Speed Test Challenge"),
        description: text(
            ctx,
            |c| format!("Answer questions from Chapter {} as quickly as possible!", c.chapter_number),
            "Answer as many questions as you can in 5 minutes!",
        ),
        questions: vec![
            TimedQuestion {
                question: text(ctx, |c| format!("Quick question from {}", c.chapter_title), "What is 7 × 8?"),
                answer: text(ctx, |_| "answer".into(), "56"),
            },
            TimedQuestion {
                question: text(
                    ctx,
                    |c| format!("Another from {}", c.subject_name),
                    "What is the capital of France?",
                ),
                answer: text(ctx, |_| "answer".into(), "Paris"),
            },
        ],
    })
}

pub fn exam_prep(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::TimerChallenge(TimerChallenge {
        duration: 1800,
        title: text(ctx, |c| format!("Exam Prep: {}", c.chapter_title), "Exam Preparation Mode"),
        description: text(
            ctx,
            |c| {
                format!(
                    "Simulate exam conditions for {} - Chapter {}",
                    c.subject_name, c.chapter_number
                )
            },
            "Practice under real exam conditions.",
        ),
        questions: vec![TimedQuestion {
            question: text(
                ctx,
                |c| format!("Exam-style question from {}", c.chapter_title),
                "Solve the equation: x² - 5x + 6 = 0",
            ),
            answer: text(ctx, |_| "solution".into(), "x = 2 or x = 3"),
        }],
    })
}

pub fn challenge(ctx: Option<&ChapterContext>) -> ContentPayload {
    ContentPayload::TimerChallenge(TimerChallenge {
        duration: 600,
        title: text(ctx, |c| format!("Daily Challenge: {}", c.chapter_title), "Daily Challenge"),
        description: text(
            ctx,
            |c| format!("Today's challenge focuses on {}!", c.subject_name),
            "Complete today's challenge to earn points!",
        ),
        questions: vec![TimedQuestion {
            question: text(
                ctx,
                |c| format!("Challenge question from Chapter {}", c.chapter_number),
                "What is the largest planet in our solar system?",
            ),
            answer: text(ctx, |_| "answer".into(), "Jupiter"),
        }],
    })
}
