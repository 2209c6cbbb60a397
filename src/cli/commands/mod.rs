//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod draft;
mod models_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "foiadraft")]
#[command(about = "Drafts FOIA requests from successful precedents on MuckRock")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check verbosity from raw args, before clap parsing.
/// Used by main() to configure logging as early as possible.
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Search prior requests on a topic, draft a new one, and optionally file it
    Draft {
        /// Topic to research (prompted for interactively when omitted)
        #[arg(short, long)]
        topic: Option<String>,

        /// Generation model to use (skips the interactive model menu)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List generation models available to the configured API key
    Models,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draft { topic, model } => draft::cmd_draft(topic, model).await,
        Commands::Models => models_cmd::cmd_models().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_draft_flags() {
        let cli = Cli::parse_from(["foiadraft", "draft", "--topic", "police budgets"]);
        match cli.command {
            Commands::Draft { topic, model } => {
                assert_eq!(topic.as_deref(), Some("police budgets"));
                assert!(model.is_none());
            }
            _ => panic!("expected draft command"),
        }
    }

    #[test]
    fn test_cli_parses_models() {
        let cli = Cli::parse_from(["foiadraft", "-v", "models"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Models));
    }
}
