//! TOML session scripts.
//!
//! A script names a learning mode (optionally with chapter context) and the
//! events to replay against it:
//!
//! ```toml
//! events = ["select 2", "check", "next"]
//!
//! [session]
//! mode = "mcq"
//! subject = "mathematics"
//! chapter = 1
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog;
use crate::event::ActivityEvent;
use crate::model::ChapterContext;
use crate::registry;

/// Intermediate TOML structure for parsing script files.
#[derive(Debug, Deserialize)]
struct TomlScriptFile {
    session: TomlSession,
    #[serde(default)]
    events: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TomlSession {
    mode: String,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    chapter: Option<TomlChapter>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Chapters may be given by number or by id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlChapter {
    Number(u32),
    Id(String),
}

/// A parsed session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub mode: String,
    pub subject: Option<String>,
    pub chapter: Option<String>,
    pub seed: Option<u64>,
    pub events: Vec<ActivityEvent>,
    pub source: PathBuf,
}

impl Script {
    /// Chapter context named by the script, if it resolves.
    pub fn context(&self) -> Option<ChapterContext> {
        catalog::resolve(self.subject.as_deref(), self.chapter.as_deref())
    }
}

/// Parse a single TOML script file.
pub fn parse_script(path: &Path) -> Result<Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script file: {}", path.display()))?;

    parse_script_str(&content, path)
}

/// Parse a TOML string into a `Script` (useful for testing).
pub fn parse_script_str(content: &str, source_path: &Path) -> Result<Script> {
    let parsed: TomlScriptFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let events = parsed
        .events
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.parse::<ActivityEvent>()
                .with_context(|| format!("event {} ('{line}')", i + 1))
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid script: {}", source_path.display()))?;

    let chapter = parsed.session.chapter.map(|c| match c {
        TomlChapter::Number(n) => n.to_string(),
        TomlChapter::Id(id) => id,
    });

    Ok(Script {
        mode: parsed.session.mode,
        subject: parsed.session.subject,
        chapter,
        seed: parsed.session.seed,
        events,
        source: source_path.to_path_buf(),
    })
}

/// Recursively load all `.toml` scripts from a directory.
pub fn load_script_directory(dir: &Path) -> Result<Vec<Script>> {
    let mut scripts = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            scripts.extend(load_script_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_script(&path) {
                Ok(script) => scripts.push(script),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(scripts)
}

/// A warning from script validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based event number (if applicable).
    pub event: Option<usize>,
    pub message: String,
}

impl ValidationWarning {
    fn script(message: impl Into<String>) -> Self {
        Self {
            event: None,
            message: message.into(),
        }
    }
}

/// Validate a script against the registry and catalog.
pub fn validate_script(script: &Script) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let kind = registry::standard().lookup(&script.mode).map(|c| c.kind);
    if kind.is_none() {
        warnings.push(ValidationWarning::script(format!(
            "unknown learning mode: {}",
            script.mode
        )));
    }

    match (&script.subject, &script.chapter) {
        (Some(subject), _) if catalog::subject(subject).is_none() => {
            warnings.push(ValidationWarning::script(format!("unknown subject: {subject}")));
        }
        (Some(subject), Some(chapter)) if script.context().is_none() => {
            warnings.push(ValidationWarning::script(format!(
                "unknown chapter '{chapter}' in {subject}"
            )));
        }
        (None, Some(_)) => {
            warnings.push(ValidationWarning::script(
                "chapter is set without a subject, default_subject from learnhub.toml is required",
            ));
        }
        (Some(_), None) => {
            warnings.push(ValidationWarning::script(
                "subject is set without a chapter, generic content will be used",
            ));
        }
        _ => {}
    }

    if script.events.is_empty() {
        warnings.push(ValidationWarning::script("script has no events"));
    }

    if let Some(kind) = kind {
        for (i, event) in script.events.iter().enumerate() {
            if !event.accepted_by(kind) {
                warnings.push(ValidationWarning {
                    event: Some(i + 1),
                    message: format!("'{event}' is not a valid action for a {kind} activity"),
                });
            }
        }
    }

    warnings
}
