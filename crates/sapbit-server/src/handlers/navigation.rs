//! Navigation API endpoints.
//!
//! `/api/navbar` returns the whole navbar; `/api/sidebar` resolves the
//! sidebar and highlighted navbar link for one page.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use sapbit_nav::{NavItem, NavLink, SidebarSection};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/navbar.
#[derive(Serialize)]
pub(crate) struct NavbarResponse {
    /// Navbar entries in declaration order.
    items: Vec<NavItem>,
}

/// Handle GET /api/navbar.
pub(crate) async fn get_navbar(State(state): State<Arc<AppState>>) -> Json<NavbarResponse> {
    Json(NavbarResponse {
        items: state.model.navbar().to_vec(),
    })
}

/// Query parameters for GET /api/sidebar.
#[derive(Deserialize)]
pub(crate) struct SidebarQuery {
    /// Current page path (e.g. `/rfcs/standard.html`).
    path: Option<String>,
}

/// Response for GET /api/sidebar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SidebarResponse {
    /// Matched sidebar prefix, `None` when the page has no sidebar.
    prefix: Option<String>,
    /// Sidebar sections, empty when the page has no sidebar.
    sections: Vec<SidebarSection>,
    /// Navbar link to highlight.
    active: Option<NavLink>,
}

/// Handle GET /api/sidebar.
pub(crate) async fn get_sidebar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SidebarQuery>,
) -> Result<Json<SidebarResponse>, ServerError> {
    let path = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or(ServerError::MissingParameter("path"))?;
    if !path.starts_with('/') {
        return Err(ServerError::InvalidPath(path));
    }

    let model = &state.model;
    let group = model.sidebar_group_for(&path);

    Ok(Json(SidebarResponse {
        prefix: group.map(|g| g.prefix.clone()),
        sections: group.map(|g| g.sections.clone()).unwrap_or_default(),
        active: model.resolve_active_navbar_entry(&path).cloned(),
    }))
}
