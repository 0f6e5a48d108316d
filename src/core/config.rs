//! Configuration management for the RunDeck option provider.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{OptionsError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Artifact catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON catalog read by the built-in search gateway
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// HTTP Basic authentication for protected resources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Realm announced in `WWW-Authenticate`
    #[serde(default = "default_realm")]
    pub realm: String,

    /// Accepted credentials. Empty means every protected request is rejected.
    #[serde(default)]
    pub users: Vec<UserCredentials>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

/// Log output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(OptionsError::ConfigError(format!(
                "Unknown log format: {other}"
            ))),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

fn default_realm() -> String {
    "rundeck-options".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: default_realm(),
            users: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
        }
    }
}

impl AuthConfig {
    /// Check a username/password pair against the configured users
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.username == username && u.password == password)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| OptionsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. RUNDECK_OPTIONS_CONFIG env var
    /// 2. XDG config file (~/.config/rundeck-options/config.toml)
    /// 3. ./rundeck-options.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("RUNDECK_OPTIONS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("rundeck-options.toml").exists() {
                Self::from_file("rundeck-options.toml")?
            } else {
                Self::default()
            }
        };

        // Catalog defaults to the XDG data directory unless set explicitly
        if config.catalog.path == default_catalog_path() {
            config.catalog.path = xdg.catalog_file();
        }

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var("RUNDECK_OPTIONS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("RUNDECK_OPTIONS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(catalog) = env::var("RUNDECK_OPTIONS_CATALOG") {
            self.catalog.path = PathBuf::from(catalog);
        }

        if let Ok(realm) = env::var("RUNDECK_OPTIONS_REALM") {
            self.auth.realm = realm;
        }
        if let (Ok(username), Ok(password)) = (
            env::var("RUNDECK_OPTIONS_USERNAME"),
            env::var("RUNDECK_OPTIONS_PASSWORD"),
        ) {
            let user = UserCredentials { username, password };
            if !self.auth.users.contains(&user) {
                self.auth.users.push(user);
            }
        }

        if let Ok(format) = env::var("RUNDECK_OPTIONS_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(OptionsError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(OptionsError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        if self.auth.realm.contains('"') {
            return Err(OptionsError::ConfigError(
                "Auth realm must not contain quotes".to_string(),
            ));
        }

        for user in &self.auth.users {
            if user.username.is_empty() || user.username.contains(':') {
                return Err(OptionsError::ConfigError(format!(
                    "Invalid username '{}': must be non-empty and contain no ':'",
                    user.username
                )));
            }
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Catalog: {:?}", self.catalog.path);
        tracing::info!("  Auth realm: {}", self.auth.realm);
        tracing::info!(
            "  Auth users: {} ({})",
            self.auth.users.len(),
            self.auth
                .users
                .iter()
                .map(|u| format!("{}:***", u.username))
                .collect::<Vec<_>>()
                .join(", ")
        );
        if self.auth.users.is_empty() {
            tracing::warn!("No users configured: protected option endpoints will reject every request");
        }
        tracing::info!("  Log format: {:?}", self.logging.format);
    }
}
