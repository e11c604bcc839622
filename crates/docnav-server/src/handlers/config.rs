//! Configuration API endpoint.
//!
//! Returns the framework configuration object.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.framework_config.clone())
}
