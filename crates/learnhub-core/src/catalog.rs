//! Static NCERT Class 10 catalog: subjects, chapters, and learning modes.
//!
//! The catalog is the chapter context resolver. A (subject, chapter) pair
//! either names a known chapter or yields no context at all.

use serde::Serialize;

use crate::model::ChapterContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub chapters: &'static [Chapter],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub id: &'static str,
    pub number: u32,
    pub title: &'static str,
}

/// Display metadata for a learning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningMode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn ch(id: &'static str, number: u32, title: &'static str) -> Chapter {
    Chapter { id, number, title }
}

const MATHEMATICS: &[Chapter] = &[
    ch("real-numbers", 1, "Real Numbers"),
    ch("polynomials", 2, "Polynomials"),
    ch("linear-equations", 3, "Pair of Linear Equations in Two Variables"),
    ch("quadratic-equations", 4, "Quadratic Equations"),
    ch("arithmetic-progressions", 5, "Arithmetic Progressions"),
    ch("triangles", 6, "Triangles"),
    ch("coordinate-geometry", 7, "Coordinate Geometry"),
    ch("trigonometry", 8, "Introduction to Trigonometry"),
    ch("trigonometry-applications", 9, "Some Applications of Trigonometry"),
    ch("circles", 10, "Circles"),
    ch("areas-circles", 11, "Areas Related to Circles"),
    ch("surface-areas-volumes", 12, "Surface Areas and Volumes"),
    ch("statistics", 13, "Statistics"),
    ch("probability", 14, "Probability"),
];

const SCIENCE: &[Chapter] = &[
    ch("chemical-reactions", 1, "Chemical Reactions and Equations"),
    ch("acids-bases-salts", 2, "Acids, Bases and Salts"),
    ch("metals-non-metals", 3, "Metals and Non-metals"),
    ch("carbon-compounds", 4, "Carbon and its Compounds"),
    ch("life-processes", 5, "Life Processes"),
    ch("control-coordination", 6, "Control and Coordination"),
    ch("reproduction", 7, "How do Organisms Reproduce?"),
    ch("heredity", 8, "Heredity"),
    ch("light", 9, "Light - Reflection and Refraction"),
    ch("human-eye", 10, "The Human Eye and the Colourful World"),
    ch("electricity", 11, "Electricity"),
    ch("magnetic-effects", 12, "Magnetic Effects of Electric Current"),
    ch("our-environment", 13, "Our Environment"),
];

const HISTORY: &[Chapter] = &[
    ch("nationalism-europe", 1, "The Rise of Nationalism in Europe"),
    ch("nationalism-india", 2, "Nationalism in India"),
    ch("global-world", 3, "The Making of a Global World"),
    ch("industrialisation", 4, "The Age of Industrialisation"),
    ch("print-culture", 5, "Print Culture and the Modern World"),
];

pub const SUBJECTS: &[Subject] = &[
    Subject {
        id: "mathematics",
        name: "Mathematics",
        icon: "📐",
        chapters: MATHEMATICS,
    },
    Subject {
        id: "science",
        name: "Science",
        icon: "🔬",
        chapters: SCIENCE,
    },
    Subject {
        id: "history",
        name: "History",
        icon: "📜",
        chapters: HISTORY,
    },
];

const fn mode(id: &'static str, name: &'static str, description: &'static str) -> LearningMode {
    LearningMode {
        id,
        name,
        description,
    }
}

pub const LEARNING_MODES: &[LearningMode] = &[
    mode("flashcards", "Flashcards", "Quick review with digital flashcards for key concepts and definitions"),
    mode("quiz", "Quiz Mode", "Test your knowledge with interactive quizzes and instant feedback"),
    mode("practice", "Practice Problems", "Solve practice problems with step-by-step solutions"),
    mode("summary", "Chapter Summary", "Read concise summaries of key points from each chapter"),
    mode("mindmap", "Mind Maps", "Visualize concepts and their relationships with interactive mind maps"),
    mode("notes", "Smart Notes", "Create and review organized notes with highlighting and bookmarks"),
    mode("video", "Video Lessons", "Watch animated explanations and video tutorials"),
    mode("audio", "Audio Learning", "Listen to chapter content and explanations on the go"),
    mode("diagrams", "Interactive Diagrams", "Explore labeled diagrams and visual representations"),
    mode("timeline", "Timeline View", "Understand historical events and processes in chronological order"),
    mode("compare", "Compare & Contrast", "Side-by-side comparison of similar concepts and topics"),
    mode("mcq", "MCQ Practice", "Multiple choice questions with detailed explanations"),
    mode("fill-blanks", "Fill in the Blanks", "Complete sentences and paragraphs to test recall"),
    mode("match", "Match the Following", "Connect related terms, definitions, and concepts"),
    mode("true-false", "True or False", "Quick assessment with true/false statements"),
    mode("essay", "Essay Practice", "Practice writing detailed answers to long-form questions"),
    mode("revision", "Quick Revision", "Fast-paced review of all important topics before exams"),
    mode("exam-prep", "Exam Preparation", "Simulate real exam conditions with timed tests"),
    mode("speed-test", "Speed Test", "Improve accuracy and speed with rapid-fire questions"),
    mode("challenge", "Daily Challenge", "Take on daily challenges to earn points and track progress"),
];

pub fn subject(id: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.id.eq_ignore_ascii_case(id.trim()))
}

pub fn learning_mode(id: &str) -> Option<&'static LearningMode> {
    LEARNING_MODES.iter().find(|m| m.id == id)
}

impl Subject {
    /// Find a chapter by id or by its number.
    pub fn chapter(&self, key: &str) -> Option<&'static Chapter> {
        let key = key.trim();
        match key.parse::<u32>() {
            Ok(number) => self.chapters.iter().find(|c| c.number == number),
            Err(_) => self.chapters.iter().find(|c| c.id == key),
        }
    }
}

/// Resolve a subject and chapter into chapter context.
///
/// Returns `None` unless both are given and both are known.
pub fn resolve(subject_id: Option<&str>, chapter: Option<&str>) -> Option<ChapterContext> {
    let subject = subject(subject_id?)?;
    let chapter = subject.chapter(chapter?)?;
    Some(ChapterContext::new(subject.name, chapter.number, chapter.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn chapter_counts() {
        let counts: Vec<_> = SUBJECTS.iter().map(|s| (s.id, s.chapters.len())).collect();
        assert_eq!(
            counts,
            vec![("mathematics", 14), ("science", 13), ("history", 5)]
        );
    }

    #[test]
    fn chapters_are_numbered_in_order() {
        for subject in SUBJECTS {
            for (i, chapter) in subject.chapters.iter().enumerate() {
                assert_eq!(chapter.number as usize, i + 1, "{}", chapter.id);
            }
        }
    }

    #[test]
    fn resolve_by_id_or_number() {
        let by_id = resolve(Some("science"), Some("electricity")).unwrap();
        let by_number = resolve(Some("Science"), Some("11")).unwrap();
        assert_eq!(by_id, by_number);
        assert_eq!(by_id.to_string(), "Science - Chapter 11: Electricity");
    }

    #[test]
    fn partial_or_unknown_input_has_no_context() {
        assert_eq!(resolve(None, Some("1")), None);
        assert_eq!(resolve(Some("history"), None), None);
        assert_eq!(resolve(Some("history"), Some("9")), None);
        assert_eq!(resolve(Some("geography"), Some("1")), None);
    }

    #[test]
    fn every_registered_mode_has_metadata() {
        let ids: Vec<_> = LEARNING_MODES.iter().map(|m| m.id).collect();
        assert_eq!(ids, registry::standard().mode_ids().collect::<Vec<_>>());
    }
}
