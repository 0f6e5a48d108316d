//! List-repositories command - show the repositories the gateway can search

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;

/// Arguments for the list-repositories command
#[derive(Args, Debug)]
pub struct RepositoriesArgs {}

/// Repository list response
#[derive(Debug, Serialize)]
pub struct RepositoriesResponse {
    pub count: usize,
    pub repositories: Vec<String>,
}

/// Execute the list-repositories command
pub fn execute(
    _args: RepositoriesArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let repositories = services.gateway.repository_ids();
    let response = RepositoriesResponse {
        count: repositories.len(),
        repositories,
    };

    match format {
        OutputFormat::Human => {
            if response.repositories.is_empty() {
                output::print_warning(&format!(
                    "Catalog {} lists no repositories",
                    services.config.catalog.path.display()
                ));
                return Ok(());
            }

            output::print_header(&format!(
                "{} repositor{}:",
                colors::number(&response.count.to_string()),
                if response.count == 1 { "y" } else { "ies" }
            ));
            for id in &response.repositories {
                println!("  {}", colors::repository(id));
            }
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}
