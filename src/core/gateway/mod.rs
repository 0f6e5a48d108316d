//! Search gateway abstraction
//!
//! The option providers never touch an index directly. They issue one
//! flat search per request through [`SearchGateway`], which a host
//! backs with its own artifact index. [`CatalogGateway`] is the
//! built-in implementation over a static JSON catalog.

mod catalog;

pub use catalog::{Catalog, CatalogGateway, CatalogRepository};

use std::collections::HashMap;

use thiserror::Error;

use crate::core::types::ArtifactRecord;

/// Term key for the Maven groupId
pub const TERM_GROUP_ID: &str = "g";
/// Term key for the Maven artifactId
pub const TERM_ARTIFACT_ID: &str = "a";
/// Term key for the version
pub const TERM_VERSION: &str = "v";
/// Term key for the packaging
pub const TERM_PACKAGING: &str = "p";
/// Term key for the classifier
pub const TERM_CLASSIFIER: &str = "c";

/// How term values are matched against record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Field equals the term value
    Exact,
    /// Field starts with the term value, ignoring case
    Scored,
}

/// Failures reported by a search gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("No such repository: {0}")]
    NoSuchRepository(String),

    #[error("Search backend failure: {0}")]
    Backend(String),
}

/// Narrow query interface onto an artifact index
///
/// Calls block; async callers run them on a blocking thread.
pub trait SearchGateway: Send + Sync {
    /// Flat search over every record matching `terms`
    ///
    /// `terms` may carry keys the gateway does not understand; those are
    /// ignored. `repository_id` of `None` searches all repositories.
    fn flat_search(
        &self,
        terms: &HashMap<String, String>,
        repository_id: Option<&str>,
        search_type: SearchType,
    ) -> Result<Vec<ArtifactRecord>, GatewayError>;

    /// Ids of the repositories this gateway can search
    fn repository_ids(&self) -> Vec<String>;
}
