//! Sidebar API endpoint.
//!
//! Returns the sidebar selected for a page path by longest-prefix match.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use docnav_site::{SidebarMatch, SidebarSection};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Sidebar selected for a page.
#[derive(Serialize)]
pub(crate) struct SidebarResponse {
    /// Matched prefix.
    prefix: String,
    /// Sections in declaration order.
    sections: Vec<SidebarSection>,
    /// Link pointing at the page itself, if listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<ActiveLink>,
}

/// The sidebar entry of the current page.
#[derive(Serialize)]
struct ActiveLink {
    section: String,
    text: String,
    link: String,
}

impl SidebarResponse {
    /// Build the response for a page from a registry match.
    pub(crate) fn new(matched: SidebarMatch<'_>, page_path: &str) -> Self {
        let active = matched.active(page_path).map(|(section, link)| ActiveLink {
            section: section.text.clone(),
            text: link.text.clone(),
            link: link.link.clone(),
        });

        Self {
            prefix: matched.prefix.to_owned(),
            sections: matched.sections.to_vec(),
            active,
        }
    }
}

/// Handle GET /api/sidebar/ (root path).
pub(crate) async fn get_root_sidebar(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SidebarResponse>, ServerError> {
    get_sidebar_impl("", &state)
}

/// Handle GET /api/sidebar/{path}.
pub(crate) async fn get_sidebar(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SidebarResponse>, ServerError> {
    get_sidebar_impl(&path, &state)
}

fn get_sidebar_impl(path: &str, state: &AppState) -> Result<Json<SidebarResponse>, ServerError> {
    let page_path = to_url_path(path);
    let matched = state
        .site
        .sidebar
        .lookup(&page_path)
        .ok_or_else(|| ServerError::SidebarNotFound(page_path.clone()))?;

    Ok(Json(SidebarResponse::new(matched, &page_path)))
}
