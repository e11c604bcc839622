//! Pages API endpoint.
//!
//! Returns the navigation context of a single page: its sidebar, edit URL
//! and comment widget settings. Frontmatter is read from the markdown
//! source under the docs directory.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use docnav_site::{PageFrontmatter, find_page_source};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::sidebar::SidebarResponse;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Query parameters for GET /api/pages/{path}.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    /// Page locale, mapped to the comment widget language.
    locale: Option<String>,
    /// Use the dark widget theme.
    #[serde(default)]
    dark: bool,
}

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse {
    /// URL path.
    path: String,
    /// Source file relative to the docs directory.
    source_file: String,
    /// Title from frontmatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Selected sidebar (absent when hidden or unmatched).
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar: Option<SidebarResponse>,
    /// "Edit this page" target.
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_link: Option<EditLinkResponse>,
    /// Comment widget script attributes (absent when disabled).
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<BTreeMap<&'static str, String>>,
}

#[derive(Serialize)]
struct EditLinkResponse {
    text: String,
    url: String,
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>, ServerError> {
    get_page_impl("", &state, &query).await
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>, ServerError> {
    get_page_impl(&path, &state, &query).await
}

async fn get_page_impl(
    path: &str,
    state: &AppState,
    query: &PageQuery,
) -> Result<Json<PageResponse>, ServerError> {
    let page_path = to_url_path(path);
    let source_file = find_page_source(&state.source_dir, &page_path)
        .ok_or_else(|| ServerError::PageNotFound(page_path.clone()))?;

    let content = tokio::fs::read_to_string(state.source_dir.join(&source_file)).await?;
    let frontmatter = PageFrontmatter::parse(&content).map_err(|source| {
        ServerError::Frontmatter {
            path: page_path.clone(),
            source,
        }
    })?;

    let sidebar = if frontmatter.shows_sidebar() {
        state
            .site
            .sidebar
            .lookup(&page_path)
            .map(|matched| SidebarResponse::new(matched, &page_path))
    } else {
        None
    };

    let source_file = source_file.to_string_lossy().replace('\\', "/");

    let edit_link = state
        .site
        .edit_link
        .as_ref()
        .filter(|_| frontmatter.shows_edit_link())
        .map(|edit| EditLinkResponse {
            text: edit.text.clone(),
            url: edit.url_for(&source_file),
        });

    let comments = state
        .site
        .comments
        .as_ref()
        .filter(|comments| comments.is_enabled_for(&page_path, Some(&frontmatter)))
        .map(|comments| comments.embed_attributes(query.locale.as_deref(), query.dark));

    Ok(Json(PageResponse {
        path: page_path,
        source_file,
        title: frontmatter.title,
        sidebar,
        edit_link,
        comments,
    }))
}
