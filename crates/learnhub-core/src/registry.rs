//! Content registry: mode id → activity configuration.
//!
//! The standard registry is built once on first use and is read-only
//! afterwards. Custom registries are assembled with [`RegistryBuilder`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::content;
use crate::error::ActivityError;
use crate::model::{ChapterContext, ContentKind, ContentPayload};

/// Pure content generator. Must be total over its input domain.
pub type ContentGenerator = fn(Option<&ChapterContext>) -> ContentPayload;

/// Registry entry for one learning mode.
#[derive(Clone, Copy)]
pub struct ActivityConfig {
    /// Unique mode identifier (e.g. "fill-blanks").
    pub mode_id: &'static str,
    /// Declared content kind; determines the payload shape.
    pub kind: ContentKind,
    /// Produces the payload for an optional chapter context.
    pub generate: ContentGenerator,
}

impl ActivityConfig {
    pub const fn new(mode_id: &'static str, kind: ContentKind, generate: ContentGenerator) -> Self {
        Self {
            mode_id,
            kind,
            generate,
        }
    }
}

impl std::fmt::Debug for ActivityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityConfig")
            .field("mode_id", &self.mode_id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from mode id to [`ActivityConfig`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    configs: HashMap<&'static str, ActivityConfig>,
    /// Registration order, for stable listings.
    order: Vec<&'static str>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the configuration for a mode.
    pub fn lookup(&self, mode_id: &str) -> Option<&ActivityConfig> {
        self.configs.get(mode_id)
    }

    /// Resolve a mode and run its generator.
    pub fn get_content(
        &self,
        mode_id: &str,
        ctx: Option<&ChapterContext>,
    ) -> Result<ContentPayload, ActivityError> {
        let config = self
            .lookup(mode_id)
            .ok_or_else(|| ActivityError::ConfigNotFound {
                mode_id: mode_id.to_string(),
            })?;
        Ok((config.generate)(ctx))
    }

    /// Mode ids in registration order.
    pub fn mode_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Configurations in registration order.
    pub fn configs(&self) -> impl Iterator<Item = &ActivityConfig> + '_ {
        self.order.iter().filter_map(|id| self.configs.get(id))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Builder for [`Registry`]. Registration is plain key insertion; a later
/// registration for the same mode id replaces the earlier one.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn register(mut self, config: ActivityConfig) -> Self {
        if self
            .registry
            .configs
            .insert(config.mode_id, config)
            .is_some()
        {
            tracing::warn!("mode '{}' registered twice, keeping the latest", config.mode_id);
        } else {
            self.registry.order.push(config.mode_id);
        }
        self
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

/// The twenty standard learning modes.
pub const STANDARD_MODES: [ActivityConfig; 20] = [
    ActivityConfig::new("flashcards", ContentKind::Flashcard, content::flashcards),
    ActivityConfig::new("quiz", ContentKind::Mcq, content::quiz),
    ActivityConfig::new("practice", ContentKind::PracticeProblems, content::practice),
    ActivityConfig::new("summary", ContentKind::NotesSummary, content::summary),
    ActivityConfig::new("mindmap", ContentKind::NotesSummary, content::mindmap),
    ActivityConfig::new("notes", ContentKind::NotesSummary, content::notes),
    ActivityConfig::new("video", ContentKind::NotesSummary, content::video),
    ActivityConfig::new("audio", ContentKind::NotesSummary, content::audio),
    ActivityConfig::new("diagrams", ContentKind::NotesSummary, content::diagrams),
    ActivityConfig::new("timeline", ContentKind::NotesSummary, content::timeline),
    ActivityConfig::new("compare", ContentKind::NotesSummary, content::compare),
    ActivityConfig::new("mcq", ContentKind::Mcq, content::mcq),
    ActivityConfig::new("fill-blanks", ContentKind::FillBlanks, content::fill_blanks),
    ActivityConfig::new("match", ContentKind::Match, content::match_following),
    ActivityConfig::new("true-false", ContentKind::TrueFalse, content::true_false),
    ActivityConfig::new("essay", ContentKind::PracticeProblems, content::essay),
    ActivityConfig::new("revision", ContentKind::NotesSummary, content::revision),
    ActivityConfig::new("exam-prep", ContentKind::TimerChallenge, content::exam_prep),
    ActivityConfig::new("speed-test", ContentKind::TimerChallenge, content::speed_test),
    ActivityConfig::new("challenge", ContentKind::TimerChallenge, content::challenge),
];

static STANDARD: LazyLock<Registry> = LazyLock::new(|| {
    STANDARD_MODES
        .into_iter()
        .fold(Registry::builder(), RegistryBuilder::register)
        .build()
});

/// The process-wide standard registry.
pub fn standard() -> &'static Registry {
    &STANDARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_twenty_modes() {
        let registry = standard();
        assert_eq!(registry.len(), 20);
        let ids: Vec<_> = registry.mode_ids().collect();
        assert_eq!(ids.first(), Some(&"flashcards"));
        assert_eq!(ids.last(), Some(&"challenge"));
    }

    #[test]
    fn lookup_unknown_mode() {
        assert!(standard().lookup("not-a-real-mode").is_none());
        let err = standard().get_content("not-a-real-mode", None).unwrap_err();
        assert_eq!(
            err,
            ActivityError::ConfigNotFound {
                mode_id: "not-a-real-mode".into()
            }
        );
    }

    #[test]
    fn declared_kind_matches_generated_payload() {
        let ctx = ChapterContext::new("Mathematics", 4, "Quadratic Equations");
        for config in standard().configs() {
            assert_eq!((config.generate)(None).kind(), config.kind, "{}", config.mode_id);
            assert_eq!(
                (config.generate)(Some(&ctx)).kind(),
                config.kind,
                "{}",
                config.mode_id
            );
        }
    }

    #[test]
    fn context_reaches_every_payload() {
        let ctx = ChapterContext::new("History", 2, "Nationalism in India");
        for config in standard().configs() {
            let generic = (config.generate)(None).text_fields().join("\n");
            let templated = (config.generate)(Some(&ctx)).text_fields().join("\n");
            assert!(
                templated.contains(&ctx.chapter_title)
                    || templated.contains(&ctx.subject_name)
                    || templated.contains("Chapter 2"),
                "{} ignores chapter context",
                config.mode_id
            );
            assert!(!generic.contains("Nationalism in India"), "{}", config.mode_id);
        }
    }

    #[test]
    fn register_replaces_existing_entry() {
        let registry = Registry::builder()
            .register(ActivityConfig::new("quiz", ContentKind::Mcq, content::quiz))
            .register(ActivityConfig::new("quiz", ContentKind::Mcq, content::mcq))
            .build();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.mode_ids().count(), 1);
        assert_eq!(
            registry.get_content("quiz", None).unwrap(),
            content::mcq(None)
        );
    }
}
