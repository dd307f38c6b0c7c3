//! Configuration API endpoint.
//!
//! Returns site metadata and plugin registrations for the frontend.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use sapbit_config::PluginDescriptor;
use sapbit_nav::SiteMeta;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Site metadata and theme options.
    site: SiteMeta,
    /// Plugin descriptors, verbatim.
    plugins: Vec<PluginDescriptor>,
    /// Server version.
    version: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        site: state.model.site().clone(),
        plugins: state.model.plugins().to_vec(),
        version: state.version.clone(),
    })
}
