//! Unified service container
//!
//! Provides shared access to the gateway and the option providers.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::gateway::{CatalogGateway, SearchGateway};
use crate::core::providers::{ArtifactIdOptionProvider, VersionOptionProvider};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Search gateway shared by every provider
    pub gateway: Arc<dyn SearchGateway>,

    pub artifact_ids: Arc<ArtifactIdOptionProvider>,

    pub versions: Arc<VersionOptionProvider>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services backed by the configured catalog
    pub fn new(config: Config) -> Result<Self> {
        let gateway = CatalogGateway::load(&config.catalog.path)?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Create services around a host-provided gateway
    pub fn with_gateway(config: Config, gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            artifact_ids: Arc::new(ArtifactIdOptionProvider::new(Arc::clone(&gateway))),
            versions: Arc::new(VersionOptionProvider::new(Arc::clone(&gateway))),
            gateway,
            config: Arc::new(config),
        }
    }
}
