//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response, passwords omitted
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub listen: String,
    pub catalog: String,
    pub auth_realm: String,
    pub auth_users: Vec<String>,
    pub log_format: String,
}

impl ConfigResponse {
    fn new(config: &Config, xdg: &XdgDirs) -> Self {
        Self {
            config_file: xdg.config_file().to_string_lossy().into_owned(),
            listen: format!("{}:{}", config.server.host, config.server.port),
            catalog: config.catalog.path.to_string_lossy().into_owned(),
            auth_realm: config.auth.realm.clone(),
            auth_users: config
                .auth
                .users
                .iter()
                .map(|u| u.username.clone())
                .collect(),
            log_format: format!("{:?}", config.logging.format).to_lowercase(),
        }
    }
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::new(config, &XdgDirs::new());

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  listen: {}", response.listen);
            println!("  catalog: {}", response.catalog);
            println!("  auth:");
            println!("    realm: {}", response.auth_realm);
            println!("    users: {:?}", response.auth_users);
            println!("  log_format: {}", response.log_format);

            if response.auth_users.is_empty() {
                output::print_warning(
                    "no users configured; the server will reject every option request",
                );
            }
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}
