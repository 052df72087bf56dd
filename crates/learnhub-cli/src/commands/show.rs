//! The `learnhub show` command.

use std::path::PathBuf;

use anyhow::Result;

use learnhub_core::config::{load_config_from, OutputFormat};
use learnhub_core::registry;

use crate::render;

pub fn execute(
    mode: String,
    subject: Option<String>,
    chapter: Option<String>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = match format {
        Some(f) => f.parse::<OutputFormat>().map_err(|e| anyhow::anyhow!(e))?,
        None => config.default_format,
    };
    let ctx = super::chapter_context(&config, subject, chapter)?;

    let payload = registry::standard()
        .get_content(&mode, ctx.as_ref())
        .map_err(|e| anyhow::anyhow!(render::error(&e)))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!("{mode} ({})", payload.kind());
            if let Some(ctx) = &ctx {
                println!("{ctx}");
            }
            println!();
            print!("{}", render::payload(&payload));
        }
    }

    Ok(())
}
