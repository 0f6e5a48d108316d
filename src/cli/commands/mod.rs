//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod options;
pub mod repositories;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use options::{ArtifactIdsArgs, SearchArgs, VersionsArgs};
pub use repositories::RepositoriesArgs;
