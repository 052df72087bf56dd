//! The `learnhub play` command.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use learnhub_core::catalog;
use learnhub_core::config::load_config_from;
use learnhub_core::dispatch::{dispatch, Activity};
use learnhub_core::event::ActivityEvent;
use learnhub_core::modes::Transition;
use learnhub_core::script::{self, Script};

use crate::render;

pub async fn execute(
    mode: Option<String>,
    subject: Option<String>,
    chapter: Option<String>,
    script_path: Option<PathBuf>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let script = script_path
        .as_deref()
        .map(script::parse_script)
        .transpose()?;

    let mode = mode
        .or_else(|| script.as_ref().map(|s| s.mode.clone()))
        .ok_or_else(|| anyhow::anyhow!("no learning mode given, pass a MODE or --script"))?;

    let (subject, chapter) = match (&script, subject, chapter) {
        (Some(s), None, None) => (s.subject.clone(), s.chapter.clone()),
        (_, subject, chapter) => (subject, chapter),
    };
    let ctx = super::chapter_context(&config, subject, chapter)?;

    let mut options = config.session_options();
    if let Some(seed) = seed.or_else(|| script.as_ref().and_then(|s| s.seed)) {
        options.shuffle_seed = Some(seed);
    }
    if script.is_some() {
        options.live_countdown = false;
    }

    let mut activity = dispatch(&mode, ctx.as_ref(), &options)
        .map_err(|e| anyhow::anyhow!(render::error(&e)))?;

    let name = catalog::learning_mode(&mode).map_or(mode.as_str(), |m| m.name);
    println!("== {name} ==");
    if let Some(ctx) = &ctx {
        println!("{ctx}");
    }
    println!("Commands: {}", render::help(activity.kind()));
    println!();
    println!("{}", render::activity(&activity));

    match script {
        Some(script) => replay(&mut activity, script),
        None => interactive(&mut activity).await?,
    }

    Ok(())
}

fn replay(activity: &mut Activity, script: Script) {
    tracing::debug!(
        "replaying {} events from {}",
        script.events.len(),
        script.source.display()
    );
    for event in script.events {
        println!("\n> {event}");
        apply(activity, event);
    }
}

async fn interactive(activity: &mut Activity) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let line = line.trim();
                match line {
                    "" => continue,
                    "quit" | "exit" => break,
                    "help" => {
                        println!("Commands: {}", render::help(activity.kind()));
                        continue;
                    }
                    _ => {}
                }
                match line.parse::<ActivityEvent>() {
                    Ok(event) => apply(activity, event),
                    Err(e) => println!("{}", render::error(&e)),
                }
            }
            Some(transition) = activity.next_tick(), if activity.is_counting_down() => {
                if activity.is_complete() {
                    println!("\n{}", render::activity(activity));
                } else if transition.is_applied() {
                    println!("{}", activity.status());
                }
            }
        }
    }

    Ok(())
}

fn apply(activity: &mut Activity, event: ActivityEvent) {
    match activity.handle(event) {
        Ok(Transition::Applied) => println!("{}", render::activity(activity)),
        Ok(Transition::Ignored) => println!("(nothing to do)"),
        Err(e) => println!("{}", render::error(&e)),
    }
}
