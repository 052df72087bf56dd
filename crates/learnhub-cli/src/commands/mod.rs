pub mod chapters;
pub mod init;
pub mod modes;
pub mod play;
pub mod show;
pub mod validate;

use anyhow::Result;

use learnhub_core::catalog;
use learnhub_core::config::LearnhubConfig;
use learnhub_core::model::ChapterContext;

/// Resolve `--subject`/`--chapter` into chapter context.
///
/// A chapter given without a subject falls back to the configured default
/// subject. Naming a subject or chapter that does not exist is an error;
/// omitting them means generic content.
pub(crate) fn chapter_context(
    config: &LearnhubConfig,
    subject: Option<String>,
    chapter: Option<String>,
) -> Result<Option<ChapterContext>> {
    let Some(chapter) = chapter else {
        if let Some(subject) = subject {
            tracing::warn!("--subject {subject} given without --chapter, using generic content");
        }
        return Ok(None);
    };
    let Some(subject) = subject.or_else(|| config.default_subject.clone()) else {
        anyhow::bail!("--chapter needs --subject (or default_subject in learnhub.toml)");
    };

    let known = catalog::subject(&subject).ok_or_else(|| {
        let ids: Vec<_> = catalog::SUBJECTS.iter().map(|s| s.id).collect();
        anyhow::anyhow!("unknown subject: {subject} (expected one of: {})", ids.join(", "))
    })?;
    match catalog::resolve(Some(known.id), Some(&chapter)) {
        Some(ctx) => Ok(Some(ctx)),
        None => anyhow::bail!(
            "unknown chapter '{chapter}' in {} (it has chapters 1-{})",
            known.name,
            known.chapters.len()
        ),
    }
}
