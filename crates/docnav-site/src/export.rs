//! Framework-facing configuration object.
//!
//! The rendering framework expects a fixed shape: `title`, `description`,
//! `themeConfig` (nav, sidebar, edit link, social links, footer, search),
//! `markdown` plugin registrations and bundler plugins under `vite`. Field
//! names are camelCase in that shape.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::SiteDefinition;
use crate::comments::{CommentsConfig, InputPosition};
use crate::icons::IconSource;
use crate::nav::ResolvedNav;
use crate::sidebar::SidebarRegistry;
use crate::theme::{EditLink, Footer, MarkdownPlugin, SearchConfig, SocialLink};

/// Configuration object consumed by the rendering framework.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig<'a> {
    /// Site title.
    pub title: &'a str,
    /// Site description.
    pub description: &'a str,
    /// Default theme configuration.
    pub theme_config: ThemeConfig<'a>,
    /// Markdown renderer setup.
    pub markdown: MarkdownExport<'a>,
    /// Bundler setup.
    pub vite: ViteExport<'a>,
    /// Comment widget options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<CommentsExport<'a>>,
}

/// `themeConfig` section.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig<'a> {
    /// Search configuration.
    pub search: &'a SearchConfig,
    /// Resolved nav bar.
    pub nav: &'a ResolvedNav,
    /// Sidebars keyed by prefix.
    pub sidebar: &'a SidebarRegistry,
    /// Edit link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<&'a EditLink>,
    /// Social links.
    pub social_links: &'a [SocialLink],
    /// Footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<&'a Footer>,
}

/// `markdown` section.
#[derive(Debug, Serialize)]
pub struct MarkdownExport<'a> {
    /// Plugins in registration order.
    pub plugins: &'a [MarkdownPlugin],
}

/// `vite` section.
#[derive(Debug, Serialize)]
pub struct ViteExport<'a> {
    /// Bundler plugins.
    pub plugins: Vec<VitePlugin<'a>>,
}

/// Bundler plugin registration.
#[derive(Debug, Serialize)]
#[serde(tag = "name")]
pub enum VitePlugin<'a> {
    /// Code group icon CSS generation.
    #[serde(rename = "group-icons", rename_all = "camelCase")]
    GroupIcons {
        /// Icons by label.
        custom_icon: BTreeMap<&'a str, &'a IconSource>,
    },
}

/// Comment widget options in the widget's own naming.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsExport<'a> {
    repo: &'a str,
    repo_id: &'a str,
    category: &'a str,
    category_id: &'a str,
    mapping: &'static str,
    input_position: InputPosition,
    lang: &'a str,
    locales: &'a BTreeMap<String, String>,
    home_page_show_comment: bool,
    light_theme: &'a str,
    dark_theme: &'a str,
    default_enabled: bool,
}

impl<'a> From<&'a CommentsConfig> for CommentsExport<'a> {
    fn from(comments: &'a CommentsConfig) -> Self {
        Self {
            repo: &comments.repo,
            repo_id: &comments.repo_id,
            category: &comments.category,
            category_id: &comments.category_id,
            mapping: comments.mapping.as_str(),
            input_position: comments.input_position,
            lang: &comments.lang,
            locales: &comments.locales,
            home_page_show_comment: comments.home_page_show_comment,
            light_theme: &comments.light_theme,
            dark_theme: &comments.dark_theme,
            default_enabled: comments.enabled_by_default,
        }
    }
}

impl SiteDefinition {
    /// Build the framework configuration object.
    ///
    /// `nav` is this site's nav bar resolved against project metadata.
    /// The group-icons bundler plugin is emitted only when the matching
    /// markdown plugin is registered.
    #[must_use]
    pub fn to_framework_config<'a>(&'a self, nav: &'a ResolvedNav) -> FrameworkConfig<'a> {
        let mut vite_plugins = Vec::new();
        if self.markdown.is_enabled(MarkdownPlugin::GroupIcons) {
            vite_plugins.push(VitePlugin::GroupIcons {
                custom_icon: self.icons.iter().collect(),
            });
        }

        FrameworkConfig {
            title: &self.title,
            description: &self.description,
            theme_config: ThemeConfig {
                search: &self.search,
                nav,
                sidebar: &self.sidebar,
                edit_link: self.edit_link.as_ref(),
                social_links: &self.social_links,
                footer: self.footer.as_ref(),
            },
            markdown: MarkdownExport {
                plugins: &self.markdown.plugins,
            },
            vite: ViteExport {
                plugins: vite_plugins,
            },
            comments: self.comments.as_ref().map(CommentsExport::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::nav::{MetadataField, NavEntry, NavText, NavTree, ProjectMetadata};
    use crate::sidebar::{SidebarLink, SidebarSection};
    use crate::theme::MarkdownConfig;
    use crate::{IconMap, TermMapping};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn site() -> SiteDefinition {
        let mut sidebar = SidebarRegistry::new();
        sidebar.insert(
            "/reference/",
            vec![SidebarSection {
                text: "Reference".to_owned(),
                collapsed: None,
                items: vec![SidebarLink {
                    text: "CLI".to_owned(),
                    link: "/reference/cli".to_owned(),
                }],
            }],
        );

        let mut icons = IconMap::new();
        icons.insert(
            "hive.nix",
            IconSource::Named("vscode-icons:file-type-nix".to_owned()),
        );
        icons.insert(
            "home",
            IconSource::Local {
                local: PathBuf::from("/site/assets/homemanager.svg"),
            },
        );

        SiteDefinition {
            title: "wire".to_owned(),
            description: "a tool to deploy nixos systems".to_owned(),
            nav: NavTree::new(vec![
                NavEntry::link("Home", "/"),
                NavEntry::Group {
                    text: NavText::Metadata {
                        from: MetadataField::Version,
                    },
                    items: vec![NavEntry::link("Changelog", "https://example.com/CHANGELOG.md")],
                },
            ]),
            sidebar,
            edit_link: Some(EditLink {
                pattern: "https://github.com/wires-org/wire/edit/main/docs/:path".to_owned(),
                text: "Edit this page on GitHub".to_owned(),
            }),
            social_links: vec![SocialLink {
                icon: "github".to_owned(),
                link: "https://github.com/wires-org/wire".to_owned(),
            }],
            markdown: MarkdownConfig {
                plugins: vec![MarkdownPlugin::Footnote, MarkdownPlugin::GroupIcons],
            },
            icons,
            ..Default::default()
        }
    }

    fn export(site: &SiteDefinition) -> serde_json::Value {
        let metadata = ProjectMetadata {
            version: Some("0.4.0".to_owned()),
            ..Default::default()
        };
        let nav = site.nav.resolve(&metadata);
        serde_json::to_value(site.to_framework_config(&nav)).unwrap()
    }

    #[test]
    fn test_export_top_level_fields() {
        let json = export(&site());

        assert_eq!(json["title"], "wire");
        assert_eq!(json["description"], "a tool to deploy nixos systems");
        assert_eq!(json["themeConfig"]["search"], json!({ "provider": "local" }));
        assert!(json.get("comments").is_none());
    }

    #[test]
    fn test_export_nav_uses_resolved_labels() {
        let json = export(&site());

        assert_eq!(
            json["themeConfig"]["nav"],
            json!([
                { "text": "Home", "link": "/" },
                {
                    "text": "0.4.0",
                    "items": [{ "text": "Changelog", "link": "https://example.com/CHANGELOG.md" }]
                }
            ])
        );
    }

    #[test]
    fn test_export_sidebar_keyed_by_prefix() {
        let json = export(&site());

        assert_eq!(
            json["themeConfig"]["sidebar"],
            json!({
                "/reference/": [{
                    "text": "Reference",
                    "items": [{ "text": "CLI", "link": "/reference/cli" }]
                }]
            })
        );
    }

    #[test]
    fn test_export_edit_and_social_links() {
        let json = export(&site());

        assert_eq!(
            json["themeConfig"]["editLink"]["pattern"],
            "https://github.com/wires-org/wire/edit/main/docs/:path"
        );
        assert_eq!(json["themeConfig"]["socialLinks"][0]["icon"], "github");
        assert!(json["themeConfig"].get("footer").is_none());
    }

    #[test]
    fn test_export_plugins() {
        let json = export(&site());

        assert_eq!(json["markdown"]["plugins"], json!(["footnote", "group-icons"]));
        assert_eq!(
            json["vite"]["plugins"],
            json!([{
                "name": "group-icons",
                "customIcon": {
                    "hive.nix": "vscode-icons:file-type-nix",
                    "home": { "local": "/site/assets/homemanager.svg" }
                }
            }])
        );
    }

    #[test]
    fn test_export_without_group_icons_plugin() {
        let mut site = site();
        site.markdown.plugins = vec![MarkdownPlugin::Footnote];

        let json = export(&site);

        assert_eq!(json["vite"]["plugins"], json!([]));
    }

    #[test]
    fn test_export_comments_use_widget_names() {
        let mut site = site();
        site.comments = Some(CommentsConfig {
            repo: "wires-org/wire".to_owned(),
            repo_id: "R_kgDOMQQbzw".to_owned(),
            category: "giscus".to_owned(),
            category_id: "DIC_kwDOMQQbz84Co4vv".to_owned(),
            mapping: TermMapping::Pathname,
            input_position: InputPosition::Top,
            lang: "en".to_owned(),
            locales: BTreeMap::from([("en-US".to_owned(), "en".to_owned())]),
            home_page_show_comment: false,
            light_theme: "light".to_owned(),
            dark_theme: "transparent_dark".to_owned(),
            enabled_by_default: false,
        });

        let json = export(&site);

        assert_eq!(
            json["comments"],
            json!({
                "repo": "wires-org/wire",
                "repoId": "R_kgDOMQQbzw",
                "category": "giscus",
                "categoryId": "DIC_kwDOMQQbz84Co4vv",
                "mapping": "pathname",
                "inputPosition": "top",
                "lang": "en",
                "locales": { "en-US": "en" },
                "homePageShowComment": false,
                "lightTheme": "light",
                "darkTheme": "transparent_dark",
                "defaultEnabled": false
            })
        );
    }
}
