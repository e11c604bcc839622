//! Navigation API endpoint.
//!
//! Returns the nav bar with metadata labels resolved.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use docnav_site::ResolvedNav;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Nav bar entries in declaration order.
    items: ResolvedNav,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        items: state.nav.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_site::{MetadataField, NavEntry, NavText, NavTree, ProjectMetadata};

    #[test]
    fn test_navigation_response_serialization() {
        let tree = NavTree::new(vec![
            NavEntry::link("Guide", "/guide/wire"),
            NavEntry::Group {
                text: NavText::Metadata {
                    from: MetadataField::Version,
                },
                items: vec![NavEntry::link("Changelog", "https://example.com/CHANGELOG.md")],
            },
        ]);
        let metadata = ProjectMetadata {
            version: Some("0.4.0".to_owned()),
            ..Default::default()
        };
        let response = NavigationResponse {
            items: tree.resolve(&metadata),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["text"], "Guide");
        assert_eq!(json["items"][0]["link"], "/guide/wire");
        assert_eq!(json["items"][1]["text"], "0.4.0");
        assert_eq!(json["items"][1]["items"][0]["text"], "Changelog");
    }
}
