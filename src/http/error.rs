//! HTTP mapping of [`OptionsError`]
//!
//! Every error leaves the service as `{"error": <message>, "status": <code>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::OptionsError;

impl OptionsError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            OptionsError::NoSuchRepository(_) => StatusCode::BAD_REQUEST,
            OptionsError::Unauthorized => StatusCode::UNAUTHORIZED,
            OptionsError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            OptionsError::SearchFailed(_)
            | OptionsError::CatalogError(_)
            | OptionsError::ConfigError(_)
            | OptionsError::Internal(_)
            | OptionsError::IoError(_)
            | OptionsError::SerdeError(_)
            | OptionsError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for OptionsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_client_error() {
            tracing::debug!(status = %status.as_u16(), error = %message, "Request rejected");
        } else {
            tracing::error!(status = %status.as_u16(), error = %message, "Request failed");
        }

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
