//! Route table for the option provider API

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::providers::OptionProvider;
use crate::core::resource::Protection;
use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Build the full application router
///
/// Option endpoints are mounted at their declared URIs, GET only,
/// behind Basic auth when their descriptor asks for it.
pub fn router(services: Arc<Services>) -> Router {
    let app = Router::new().route("/health", get(handlers::health_handler));

    let app = mount(
        app,
        services.artifact_ids.as_ref(),
        get(handlers::artifact_id_options_handler),
        &services,
    );
    let app = mount(
        app,
        services.versions.as_ref(),
        get(handlers::version_options_handler),
        &services,
    );

    app.layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}

fn mount(
    app: Router<Arc<Services>>,
    provider: &dyn OptionProvider,
    handler: MethodRouter<Arc<Services>>,
    services: &Arc<Services>,
) -> Router<Arc<Services>> {
    let descriptor = provider.descriptor();
    let handler = match descriptor.protection {
        Protection::AuthcBasic => handler.route_layer(middleware::from_fn_with_state(
            Arc::clone(services),
            http_middleware::require_basic_auth,
        )),
        Protection::Anonymous => handler,
    };

    tracing::debug!(uri = descriptor.uri, protection = ?descriptor.protection, "Mounted option resource");
    app.route(descriptor.uri, handler)
}
