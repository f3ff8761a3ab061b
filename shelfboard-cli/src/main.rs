//! Shelfboard CLI - replay scripted board sessions

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "shelfboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a session script and print the resulting board
    Replay {
        /// Script file (JSON array of actions)
        script: String,

        /// Output the board snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Fail if any action is rejected
        #[arg(long)]
        strict: bool,
    },

    /// Validate a session script
    Validate {
        /// Script file (JSON array of actions)
        script: String,

        /// Treat rejected actions as invalid
        #[arg(long)]
        strict: bool,
    },

    /// Replay every script in a directory
    Batch {
        /// Directory of .json scripts
        input_dir: String,

        /// Write each final board snapshot here
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfboard_cli=debug,shelfboard_core=debug"
    } else {
        "shelfboard_cli=info"
    };

    // Logs go to stderr so board output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Replay {
            script,
            json,
            strict,
        } => commands::replay(&script, json, strict),

        Commands::Validate { script, strict } => commands::validate(&script, strict),

        Commands::Batch {
            input_dir,
            output_dir,
            jobs,
        } => commands::batch(&input_dir, output_dir.as_deref(), jobs),
    }
}
