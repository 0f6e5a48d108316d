//! HTTP request handlers for the option provider
//!
//! Implements the health check and the two RunDeck option endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header::ACCEPT, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::error::{OptionsError, Result};
use crate::core::providers::OptionProvider;
use crate::core::services::Services;
use crate::core::types::{QueryParams, RundeckOption};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// artifactId options handler
///
/// `GET /rundeck/options/artifactId?r=<repo>&<term>=<value>...`
///
/// # Errors
///
/// - `NoSuchRepository`: `r` names an unknown repository (400)
/// - `NotAcceptable`: the client does not accept JSON (406)
pub async fn artifact_id_options_handler(
    State(services): State<Arc<Services>>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RundeckOption>>> {
    serve_options(Arc::clone(&services.artifact_ids), &headers, pairs).await
}

/// version options handler
///
/// `GET /rundeck/options/version?r=<repo>&includeLatest=..&includeRelease=..&l=..&<term>=<value>...`
///
/// # Errors
///
/// - `NoSuchRepository`: `r` names an unknown repository (400)
/// - `NotAcceptable`: the client does not accept JSON (406)
pub async fn version_options_handler(
    State(services): State<Arc<Services>>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RundeckOption>>> {
    serve_options(Arc::clone(&services.versions), &headers, pairs).await
}

/// Negotiate the representation, then run the provider off the async runtime
async fn serve_options<P>(
    provider: Arc<P>,
    headers: &HeaderMap,
    pairs: Vec<(String, String)>,
) -> Result<Json<Vec<RundeckOption>>>
where
    P: OptionProvider + 'static,
{
    let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
    if !provider.descriptor().accepts(accept) {
        return Err(OptionsError::NotAcceptable(
            accept.unwrap_or_default().to_string(),
        ));
    }

    let params = QueryParams::from_pairs(pairs);
    let options = tokio::task::spawn_blocking(move || provider.options(&params))
        .await
        .map_err(|e| OptionsError::Internal(format!("Option provider task failed: {e}")))??;

    Ok(Json(options))
}
