//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docnav_site::FrontmatterError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No sidebar prefix matches the path.
    #[error("No sidebar for path: {0}")]
    SidebarNotFound(String),

    /// No markdown source exists for the path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Page frontmatter is malformed.
    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        /// URL path of the page.
        path: String,
        /// Parse error.
        #[source]
        source: FrontmatterError,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::SidebarNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "No sidebar for path", "path": path}),
            ),
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::Frontmatter { path, source } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": source.to_string(), "path": path}),
            ),
            Self::Io(e) => {
                tracing::error!(error = %e, "I/O error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
