//! XDG Base Directory Support
//!
//! Resolves where the option provider looks for its configuration
//! file and its default artifact catalog.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "rundeck-options";

/// XDG directory structure for the option provider
///
/// Explicit `RUNDECK_OPTIONS_*` variables win over `XDG_*` variables,
/// which win over the XDG defaults under the home directory.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories from the current environment
    pub fn new() -> Self {
        Self {
            config_dir: resolve("RUNDECK_OPTIONS_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve(
                "RUNDECK_OPTIONS_DATA_DIR",
                "XDG_DATA_HOME",
                &[".local", "share"],
            ),
        }
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Explicit file override
        if let Ok(file) = env::var("RUNDECK_OPTIONS_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Default location of the artifact catalog
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Data: {:?}", self.data_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
        tracing::info!("  Default catalog: {:?}", self.catalog_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(app_var: &str, xdg_var: &str, home_suffix: &[&str]) -> PathBuf {
    if let Ok(dir) = env::var(app_var) {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = env::var(xdg_var) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in home_suffix {
        path.push(part);
    }
    path.join(APP_DIR)
}
