//! Markdown source lookup for page paths.

use std::path::{Component, Path, PathBuf};

use crate::sidebar::normalize_page_path;

/// Locate the markdown source of a page path, relative to `source_dir`.
///
/// `/guide/wire` resolves to `guide/wire.md` or `guide/wire/index.md`;
/// `/` resolves to `index.md`. A trailing `.md` or `.html` is ignored.
/// Paths escaping the docs directory never match.
#[must_use]
pub fn find_page_source(source_dir: &Path, page_path: &str) -> Option<PathBuf> {
    let page_path = normalize_page_path(page_path);
    let relative = page_path.trim_matches('/');
    let relative = relative
        .strip_suffix(".md")
        .or_else(|| relative.strip_suffix(".html"))
        .unwrap_or(relative);

    let base = PathBuf::from(relative);
    if !base.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }

    let candidates = if relative.is_empty() {
        vec![PathBuf::from("index.md")]
    } else {
        vec![PathBuf::from(format!("{relative}.md")), base.join("index.md")]
    };

    candidates
        .into_iter()
        .find(|candidate| source_dir.join(candidate).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn docs_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("guide")).unwrap();
        std::fs::create_dir_all(dir.path().join("reference")).unwrap();
        std::fs::write(dir.path().join("index.md"), "# Home\n").unwrap();
        std::fs::write(dir.path().join("guide/wire.md"), "# Wire\n").unwrap();
        std::fs::write(dir.path().join("guide/hive.default.md"), "# hive.default\n").unwrap();
        std::fs::write(dir.path().join("reference/index.md"), "# Reference\n").unwrap();
        dir
    }

    #[test]
    fn test_find_page() {
        let dir = docs_dir();

        assert_eq!(
            find_page_source(dir.path(), "/guide/wire"),
            Some(PathBuf::from("guide/wire.md"))
        );
        assert_eq!(
            find_page_source(dir.path(), "/guide/wire.html#install"),
            Some(PathBuf::from("guide/wire.md"))
        );
    }

    #[test]
    fn test_find_page_with_dot_in_name() {
        let dir = docs_dir();

        assert_eq!(
            find_page_source(dir.path(), "/guide/hive.default"),
            Some(PathBuf::from("guide/hive.default.md"))
        );
    }

    #[test]
    fn test_find_index() {
        let dir = docs_dir();

        assert_eq!(
            find_page_source(dir.path(), "/"),
            Some(PathBuf::from("index.md"))
        );
        assert_eq!(
            find_page_source(dir.path(), "/reference/"),
            Some(PathBuf::from("reference/index.md"))
        );
    }

    #[test]
    fn test_find_missing() {
        let dir = docs_dir();

        assert_eq!(find_page_source(dir.path(), "/guide/keys"), None);
    }

    #[test]
    fn test_rejects_traversal() {
        let dir = docs_dir();

        assert_eq!(
            find_page_source(&dir.path().join("guide"), "/../index"),
            None
        );
    }
}
