//! CLI adapter for the RunDeck option provider
//!
//! Runs the same option providers as the HTTP endpoints, straight
//! against the configured catalog. Useful for checking what RunDeck
//! will be offered without going through the server.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::services::Services;

/// RunDeck option provider
///
/// Lists the artifactIds and versions RunDeck option dropdowns are
/// populated with.
#[derive(Parser, Debug)]
#[command(name = "rundeck-options")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "RunDeck option lists from an artifact catalog", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output, identical to the HTTP response body
    Json,
}

/// Available CLI commands
///
/// Option commands mirror the HTTP endpoints.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List artifactIds (GET /rundeck/options/artifactId)
    #[command(name = "artifact-ids")]
    ArtifactIds(commands::ArtifactIdsArgs),

    /// List versions, newest first (GET /rundeck/options/version)
    #[command(name = "versions")]
    Versions(commands::VersionsArgs),

    /// List the repositories the catalog can search
    #[command(name = "list-repositories")]
    ListRepositories(commands::RepositoriesArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  rundeck-options completions bash > ~/.local/share/bash-completion/completions/rundeck-options
    ///   zsh:   rundeck-options completions zsh > ~/.zfunc/_rundeck-options
    ///   fish:  rundeck-options completions fish > ~/.config/fish/completions/rundeck-options.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        // Neither needs the catalog
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::ShowConfig(args) => {
            let config = Config::load()?;
            commands::config::execute(args, &config, cli.format)
        }
        Commands::ArtifactIds(args) => {
            commands::options::execute_artifact_ids(args, &load_services()?, cli.format)
        }
        Commands::Versions(args) => {
            commands::options::execute_versions(args, &load_services()?, cli.format)
        }
        Commands::ListRepositories(args) => {
            commands::repositories::execute(args, &load_services()?, cli.format)
        }
    }
}

fn load_services() -> crate::core::error::Result<Services> {
    Services::new(Config::load()?)
}
