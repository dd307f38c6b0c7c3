//! Normalized navigation model.
//!
//! # Architecture
//!
//! [`NavigationModel`] is immutable once built. Lookups borrow from it and
//! never allocate, so a single model can be shared behind an `Arc` by any
//! number of readers without locking.

use std::collections::HashSet;

use sapbit_config::{PluginDescriptor, SidebarGroup, SidebarSection};
use serde::Serialize;

use crate::documents::{DocumentRef, DocumentSource, link_to_document};
use crate::edit_link::EditLinks;

/// Navbar entry pointing at a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display text.
    pub text: String,
    /// Link target path.
    pub link: String,
}

/// Navbar dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display text.
    pub text: String,
    /// Dropdown links in declaration order.
    pub children: Vec<NavLink>,
}

/// Top-level navbar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Direct link.
    Link(NavLink),
    /// Dropdown of links.
    Group(NavGroup),
}

impl NavItem {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Group(group) => &group.text,
        }
    }
}

/// Site metadata and theme options the rendering layer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    /// Language tag.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Logo image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Dark-mode logo image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,
    /// Repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Whether the search box is shown.
    pub search: bool,
    /// Maximum number of search suggestions.
    pub search_max_suggestions: u32,
}

/// Validated navigation model.
///
/// Built with [`build`](crate::build). Navbar entries, sidebar groups and
/// plugins keep their declaration order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationModel {
    pub(crate) site: SiteMeta,
    pub(crate) navbar: Vec<NavItem>,
    pub(crate) sidebar: Vec<SidebarGroup>,
    pub(crate) plugins: Vec<PluginDescriptor>,
    #[serde(skip)]
    pub(crate) edit_links: Option<EditLinks>,
}

impl NavigationModel {
    /// Site metadata and theme options.
    #[must_use]
    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    /// Navbar entries in declaration order.
    #[must_use]
    pub fn navbar(&self) -> &[NavItem] {
        &self.navbar
    }

    /// Sidebar groups in declaration order.
    #[must_use]
    pub fn sidebar_groups(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    /// Sections registered for exactly `prefix`.
    #[must_use]
    pub fn sidebar(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.sidebar
            .iter()
            .find(|group| group.prefix == prefix)
            .map(|group| group.sections.as_slice())
    }

    /// Plugin descriptors as declared.
    #[must_use]
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Group whose prefix is the longest prefix of `current_path`.
    #[must_use]
    pub fn sidebar_group_for(&self, current_path: &str) -> Option<&SidebarGroup> {
        // Prefixes are unique, so the longest match is unambiguous.
        self.sidebar
            .iter()
            .filter(|group| current_path.starts_with(&group.prefix))
            .max_by_key(|group| group.prefix.len())
    }

    /// Sidebar sections for a page.
    ///
    /// Uses the longest registered prefix of `current_path`. An empty slice
    /// means the page has no sidebar.
    #[must_use]
    pub fn resolve_sidebar(&self, current_path: &str) -> &[SidebarSection] {
        self.sidebar_group_for(current_path)
            .map(|group| group.sections.as_slice())
            .unwrap_or_default()
    }

    /// Navbar link to highlight for a page.
    ///
    /// Walks top-level entries and dropdown children depth-first in
    /// declaration order and returns the first link that is a prefix of
    /// `current_path`.
    #[must_use]
    pub fn resolve_active_navbar_entry(&self, current_path: &str) -> Option<&NavLink> {
        self.navbar
            .iter()
            .flat_map(|item| match item {
                NavItem::Link(link) => std::slice::from_ref(link),
                NavItem::Group(group) => group.children.as_slice(),
            })
            .find(|link| current_path.starts_with(&link.link))
    }

    /// Source documents the configuration references.
    ///
    /// Navbar links come first, then sidebar references, each in declaration
    /// order. A document referenced twice is listed once, attributed to its
    /// first reference.
    #[must_use]
    pub fn required_documents(&self) -> Vec<DocumentRef> {
        let navbar = self.navbar.iter().flat_map(|item| match item {
            NavItem::Link(link) => vec![link],
            NavItem::Group(group) => group.children.iter().collect(),
        });
        let navbar = navbar.map(|link| {
            (
                link.link.as_str(),
                DocumentSource::Navbar(link.text.clone()),
            )
        });
        let sidebar = self.sidebar.iter().flat_map(|group| {
            group
                .sections
                .iter()
                .flat_map(|section| section.children.iter())
                .map(move |child| (child.as_str(), DocumentSource::Sidebar(group.prefix.clone())))
        });

        let mut seen = HashSet::new();
        navbar
            .chain(sidebar)
            .filter_map(|(link, source)| {
                let path = link_to_document(link)?;
                seen.insert(path.clone()).then_some(DocumentRef {
                    path,
                    referenced_by: source,
                })
            })
            .collect()
    }

    /// "Edit this page" URL for a source document.
    ///
    /// `None` when edit links are disabled or no repository is configured.
    #[must_use]
    pub fn edit_link(&self, document: &str) -> Option<String> {
        self.edit_links
            .as_ref()
            .map(|links| links.for_document(document))
    }
}
