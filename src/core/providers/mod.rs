//! RunDeck option providers
//!
//! Each provider turns one request's query parameters into an option
//! list with a single exact-match gateway search. Providers are
//! stateless apart from the injected gateway.

mod artifact_id;
mod version;

pub use artifact_id::ArtifactIdOptionProvider;
pub use version::{
    VersionOptionProvider, PARAM_INCLUDE_LATEST, PARAM_INCLUDE_RELEASE, PARAM_LIMIT,
};

use crate::core::error::{OptionsError, Result};
use crate::core::gateway::{GatewayError, SearchGateway, SearchType};
use crate::core::resource::ResourceDescriptor;
use crate::core::types::{ArtifactRecord, QueryParams, RundeckOption};

/// An option list endpoint
pub trait OptionProvider: Send + Sync {
    /// Resource contract (URI, representation, protection)
    fn descriptor(&self) -> ResourceDescriptor;

    /// Build the option list for one request
    fn options(&self, params: &QueryParams) -> Result<Vec<RundeckOption>>;
}

/// Exact-match search with every parameter forwarded as a term
pub(crate) fn search_exact(
    gateway: &dyn SearchGateway,
    params: &QueryParams,
) -> Result<Vec<ArtifactRecord>> {
    let repository_id = params.repository_id();

    gateway
        .flat_search(params.terms(), repository_id, SearchType::Exact)
        .map_err(|e| match e {
            GatewayError::NoSuchRepository(_) => {
                OptionsError::NoSuchRepository(repository_id.unwrap_or_default().to_string())
            }
            GatewayError::Backend(message) => OptionsError::SearchFailed(message),
        })
}
