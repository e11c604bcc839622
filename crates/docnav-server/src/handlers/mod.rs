//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod sidebar;

/// Convert a captured route path (without leading slash) to a page path.
///
/// The wildcard capture drops the leading slash (e.g. "guide/wire", "" for
/// the root) while sidebars and links use "/guide/wire" and "/".
pub(crate) fn to_url_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
