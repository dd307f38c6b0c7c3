//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/navbar", get(handlers::navigation::get_navbar))
        .route("/api/sidebar", get(handlers::navigation::get_sidebar))
        .route("/api/documents", get(handlers::documents::get_documents))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
