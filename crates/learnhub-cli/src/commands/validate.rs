//! The `learnhub validate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnhub_core::script;

pub fn execute(script_path: PathBuf) -> Result<()> {
    let scripts = if script_path.is_dir() {
        script::load_script_directory(&script_path)?
    } else {
        vec![script::parse_script(&script_path)?]
    };

    let mut total_warnings = 0;

    for s in &scripts {
        println!(
            "Script: {} ({} mode, {} events)",
            s.source.display(),
            s.mode,
            s.events.len()
        );

        let warnings = script::validate_script(s);
        for w in &warnings {
            let prefix = w
                .event
                .map(|n| format!("  [event {n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All scripts valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
