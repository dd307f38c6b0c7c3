//! Site-level declarative input.
//!
//! These types mirror the `sapbit.toml` layout one-to-one. They carry no
//! invariants of their own: navbar shape, sidebar prefixes and plugin options
//! are validated when the navigation model is built.

use serde::{Deserialize, Serialize};

/// Site metadata, theme options and plugin list.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Language tag (e.g. `en-US`).
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Theme options, navbar and sidebar.
    pub theme: ThemeConfig,
    /// Registered plugins, in declaration order.
    pub plugins: Vec<PluginDescriptor>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en-US".to_owned(),
            title: String::new(),
            description: String::new(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }
}

/// Theme options.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Logo image path.
    pub logo: Option<String>,
    /// Logo image path for dark mode.
    pub logo_dark: Option<String>,
    /// Repository, either `owner/name` or a full URL.
    pub repo: Option<String>,
    /// Whether pages get an "edit this page" link.
    pub edit_link: bool,
    /// Edit link pattern with `:repo`, `:branch` and `:path` placeholders.
    pub edit_link_pattern: Option<String>,
    /// Branch holding the documentation sources.
    pub docs_branch: String,
    /// Directory of the documentation sources within the repository.
    pub docs_dir: String,
    /// Whether the search box is shown.
    pub search: bool,
    /// Maximum number of search suggestions.
    pub search_max_suggestions: u32,
    /// Top navigation bar entries.
    pub navbar: Vec<NavbarEntry>,
    /// Sidebar groups keyed by path prefix.
    pub sidebar: Vec<SidebarGroup>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo: None,
            logo_dark: None,
            repo: None,
            edit_link: true,
            edit_link_pattern: None,
            docs_branch: "main".to_owned(),
            docs_dir: String::new(),
            search: true,
            search_max_suggestions: 10,
            navbar: Vec::new(),
            sidebar: Vec::new(),
        }
    }
}

/// Raw navbar entry.
///
/// Exactly one of `link` and `children` is expected; an explicit empty
/// `children` list is kept distinct from an absent one.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavbarEntry {
    /// Display text.
    pub text: String,
    /// Link target path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Dropdown entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavbarEntry>>,
}

impl NavbarEntry {
    /// Create a link entry.
    #[must_use]
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            children: None,
        }
    }

    /// Create a dropdown entry.
    #[must_use]
    pub fn group(text: impl Into<String>, children: Vec<NavbarEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            children: Some(children),
        }
    }
}

/// Sidebar sections shown on pages below `prefix`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SidebarGroup {
    /// Absolute path prefix, starting and ending with `/`.
    pub prefix: String,
    /// Sections in display order.
    pub sections: Vec<SidebarSection>,
}

/// A titled list of document references.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SidebarSection {
    /// Section heading.
    pub text: String,
    /// Source document paths (e.g. `/rfcs/README.md`).
    pub children: Vec<String>,
}

impl SidebarSection {
    /// Create a section from a heading and document paths.
    #[must_use]
    pub fn new(text: impl Into<String>, children: &[&str]) -> Self {
        Self {
            text: text.into(),
            children: children.iter().map(|&c| c.to_owned()).collect(),
        }
    }
}

/// Plugin identifier with its option map.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PluginDescriptor {
    /// Plugin identifier (e.g. `umami-analytics`).
    pub name: String,
    /// Plugin options, passed on verbatim.
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}
