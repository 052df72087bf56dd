//! The `learnhub init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("learnhub.toml").exists() {
        println!("learnhub.toml already exists, skipping.");
    } else {
        std::fs::write("learnhub.toml", SAMPLE_CONFIG)?;
        println!("Created learnhub.toml");
    }

    std::fs::create_dir_all("scripts")?;
    let example_path = std::path::Path::new("scripts/example.toml");
    if example_path.exists() {
        println!("scripts/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SCRIPT)?;
        println!("Created scripts/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Browse modes and chapters: learnhub modes, learnhub chapters");
    println!("  2. Run: learnhub validate --script scripts/example.toml");
    println!("  3. Run: learnhub play --script scripts/example.toml");
    println!("  4. Or play interactively: learnhub play flashcards --subject science --chapter 5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# learnhub configuration

# Subject used when only --chapter is given (mathematics, science, history)
default_subject = "mathematics"

# Allow the hint command in fill-in-the-blank activities
show_hints = true

# Fixed seed for match-the-following shuffles (remove for a new order each time)
# shuffle_seed = 42

# Output format for `learnhub show`: text or json
default_format = "text"
"#;

const EXAMPLE_SCRIPT: &str = r#"# Answers one MCQ question right and one wrong.
events = [
    "select 2",
    "check",
    "next",
    "select 0",
    "check",
    "finish",
]

[session]
mode = "mcq"
subject = "mathematics"
chapter = 1
"#;
