//! learnhub CLI: NCERT Class 10 learning-mode activities in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "learnhub", version, about = "Study NCERT Class 10 chapters with interactive learning modes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available learning modes
    Modes,

    /// List catalog chapters
    Chapters {
        /// Only show one subject (mathematics, science, history)
        #[arg(long)]
        subject: Option<String>,
    },

    /// Print the content a learning mode generates
    Show {
        /// Learning mode id (e.g. "flashcards", "fill-blanks")
        mode: String,

        /// Subject id for chapter context
        #[arg(long)]
        subject: Option<String>,

        /// Chapter id or number for chapter context
        #[arg(long)]
        chapter: Option<String>,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run a learning-mode activity interactively or from a script
    Play {
        /// Learning mode id (taken from the script when omitted)
        mode: Option<String>,

        /// Subject id for chapter context
        #[arg(long)]
        subject: Option<String>,

        /// Chapter id or number for chapter context
        #[arg(long)]
        chapter: Option<String>,

        /// Replay events from a .toml script instead of reading stdin
        #[arg(long)]
        script: Option<PathBuf>,

        /// Seed for match-mode shuffling
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate session script files
    Validate {
        /// Path to a script file or directory
        #[arg(long)]
        script: PathBuf,
    },

    /// Create a starter config and example script
    Init,
}

#[tokio::main]
async fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "learnhub=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Modes => commands::modes::execute(),
        Commands::Chapters { subject } => commands::chapters::execute(subject),
        Commands::Show {
            mode,
            subject,
            chapter,
            format,
            config,
        } => commands::show::execute(mode, subject, chapter, format, config),
        Commands::Play {
            mode,
            subject,
            chapter,
            script,
            seed,
            config,
        } => commands::play::execute(mode, subject, chapter, script, seed, config).await,
        Commands::Validate { script } => commands::validate::execute(script),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
