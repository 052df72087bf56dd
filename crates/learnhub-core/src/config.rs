//! Learner configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dispatch::SessionOptions;

/// How generated content is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s} (expected text or json)")),
        }
    }
}

/// Top-level learnhub configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnhubConfig {
    /// Subject used when a chapter is given without one.
    #[serde(default)]
    pub default_subject: Option<String>,
    /// Allow hint toggling in fill-in-the-blank activities.
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Fixed seed for match-mode shuffling.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_true() -> bool {
    true
}

impl Default for LearnhubConfig {
    fn default() -> Self {
        Self {
            default_subject: None,
            show_hints: true,
            shuffle_seed: None,
            default_format: OutputFormat::Text,
        }
    }
}

impl LearnhubConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            show_hints: self.show_hints,
            shuffle_seed: self.shuffle_seed,
            ..SessionOptions::default()
        }
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = var("LEARNHUB_SEED") {
            self.shuffle_seed = Some(
                seed.trim()
                    .parse()
                    .with_context(|| format!("LEARNHUB_SEED is not a number: {seed}"))?,
            );
        }
        if let Some(flag) = var("LEARNHUB_SHOW_HINTS") {
            self.show_hints = match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => anyhow::bail!("LEARNHUB_SHOW_HINTS must be true or false, got: {other}"),
            };
        }
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `learnhub.toml` in the current directory
/// 2. `~/.config/learnhub/config.toml`
///
/// Environment variable overrides: `LEARNHUB_SEED`, `LEARNHUB_SHOW_HINTS`.
pub fn load_config_from(path: Option<&Path>) -> Result<LearnhubConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("learnhub.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => LearnhubConfig::default(),
    };

    config.apply_overrides(|name| std::env::var(name).ok())?;

    Ok(config)
}

fn parse_config(path: &Path) -> Result<LearnhubConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<LearnhubConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("learnhub"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LearnhubConfig::default();
        assert!(config.show_hints);
        assert_eq!(config.shuffle_seed, None);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.session_options(), SessionOptions::default());
    }

    #[test]
    fn parse_partial_config() {
        let config: LearnhubConfig = toml::from_str(
            r#"
default_subject = "science"
shuffle_seed = 42
default_format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.default_subject.as_deref(), Some("science"));
        assert_eq!(config.shuffle_seed, Some(42));
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(config.show_hints);
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learnhub.toml");
        std::fs::write(&path, "show_hints = false\n").unwrap();

        let config = parse_config(&path).unwrap();
        assert!(!config.show_hints);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "show_hints = [").unwrap();
        let err = parse_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }

    #[test]
    fn env_overrides() {
        let mut config = LearnhubConfig::default();
        config
            .apply_overrides(|name| match name {
                "LEARNHUB_SEED" => Some("7".into()),
                "LEARNHUB_SHOW_HINTS" => Some("off".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.shuffle_seed, Some(7));
        assert!(!config.show_hints);

        let err = config
            .apply_overrides(|name| (name == "LEARNHUB_SEED").then(|| "seven".into()))
            .unwrap_err();
        assert!(err.to_string().contains("LEARNHUB_SEED"));
    }

    #[test]
    fn output_format_parsing() {
        assert_eq!("JSON".parse(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
