//! Validation and normalization of [`SiteConfig`] into a [`NavigationModel`].
//!
//! Building is a pure function of its inputs. The first invalid element
//! aborts the build; no partially built model is ever returned.

use std::collections::HashSet;

use sapbit_config::{NavbarEntry, SidebarGroup, SiteConfig};

use crate::ConfigError;
use crate::documents::is_external;
use crate::edit_link::{EditLinks, repo_url};
use crate::model::{NavGroup, NavItem, NavLink, NavigationModel, SiteMeta};
use crate::plugin::PluginRegistry;

/// Build the navigation model with the built-in plugin registry.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found in the configuration.
pub fn build(config: &SiteConfig) -> Result<NavigationModel, ConfigError> {
    build_with(config, &PluginRegistry::builtin())
}

/// Build the navigation model, validating plugins against `registry`.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found in the configuration.
pub fn build_with(
    config: &SiteConfig,
    registry: &PluginRegistry,
) -> Result<NavigationModel, ConfigError> {
    require_non_empty(&config.lang, "lang")?;
    require_non_empty(&config.title, "title")?;
    require_non_empty(&config.description, "description")?;

    let navbar = config
        .theme
        .navbar
        .iter()
        .map(normalize_entry)
        .collect::<Result<Vec<_>, _>>()?;

    validate_sidebar(&config.theme.sidebar)?;

    for plugin in &config.plugins {
        registry.validate(plugin)?;
    }

    let theme = &config.theme;
    let model = NavigationModel {
        site: SiteMeta {
            lang: config.lang.clone(),
            title: config.title.clone(),
            description: config.description.clone(),
            logo: theme.logo.clone(),
            logo_dark: theme.logo_dark.clone(),
            repo: theme.repo.as_deref().map(repo_url),
            search: theme.search,
            search_max_suggestions: theme.search_max_suggestions,
        },
        navbar,
        sidebar: theme.sidebar.clone(),
        plugins: config.plugins.clone(),
        edit_links: EditLinks::from_theme(theme),
    };

    tracing::debug!(
        navbar = model.navbar.len(),
        sidebar_groups = model.sidebar.len(),
        plugins = model.plugins.len(),
        "Built navigation model"
    );

    Ok(model)
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

fn malformed(entry: &NavbarEntry, reason: &'static str) -> ConfigError {
    ConfigError::MalformedEntry {
        text: entry.text.clone(),
        reason,
    }
}

/// Convert a top-level entry into its sum-type form.
fn normalize_entry(entry: &NavbarEntry) -> Result<NavItem, ConfigError> {
    match (&entry.link, &entry.children) {
        (_, Some(children)) if children.is_empty() => {
            Err(malformed(entry, "children cannot be empty"))
        }
        (Some(_), Some(_)) => Err(malformed(entry, "has both a link and children")),
        (None, None) => Err(malformed(entry, "needs either a link or children")),
        (Some(_), None) => normalize_link(entry).map(NavItem::Link),
        (None, Some(children)) => {
            let children = children
                .iter()
                .map(normalize_link)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(NavItem::Group(NavGroup {
                text: entry.text.clone(),
                children,
            }))
        }
    }
}

/// Convert an entry that must be a plain link.
fn normalize_link(entry: &NavbarEntry) -> Result<NavLink, ConfigError> {
    if entry.children.is_some() {
        return Err(malformed(entry, "nested dropdowns are not supported"));
    }
    match entry.link.as_deref() {
        None => Err(malformed(entry, "needs a link")),
        Some("") => Err(malformed(entry, "link cannot be empty")),
        Some(link) if !is_external(link) && !link.starts_with('/') => {
            Err(malformed(entry, "link must be absolute or external"))
        }
        Some(link) if !is_external(link) && has_dot_segment(link) => {
            Err(malformed(entry, "link cannot contain '.' or '..' segments"))
        }
        Some(link) => Ok(NavLink {
            text: entry.text.clone(),
            link: link.to_owned(),
        }),
    }
}

fn validate_sidebar(groups: &[SidebarGroup]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for group in groups {
        if !is_valid_prefix(&group.prefix) {
            return Err(ConfigError::InvalidPrefix(group.prefix.clone()));
        }
        if !seen.insert(group.prefix.as_str()) {
            return Err(ConfigError::DuplicatePrefix(group.prefix.clone()));
        }

        for section in &group.sections {
            let invalid = |reason| ConfigError::MalformedSection {
                prefix: group.prefix.clone(),
                text: section.text.clone(),
                reason,
            };
            if section.text.trim().is_empty() {
                return Err(invalid("text cannot be empty"));
            }
            if section.children.iter().any(|c| c.trim().is_empty()) {
                return Err(invalid("document reference cannot be empty"));
            }
            if section
                .children
                .iter()
                .any(|c| !is_external(c) && has_dot_segment(c))
            {
                return Err(invalid("document reference cannot contain '.' or '..' segments"));
            }
        }
    }

    Ok(())
}

/// `/` or `/a/b/`: absolute, trailing slash, no empty or dot segments.
fn is_valid_prefix(prefix: &str) -> bool {
    prefix == "/"
        || (prefix.len() > 1
            && prefix.starts_with('/')
            && prefix.ends_with('/')
            && !prefix.contains("//")
            && !prefix.contains(char::is_whitespace)
            && !has_dot_segment(prefix))
}

/// True if the path part (before `?` or `#`) has a `.` or `..` segment.
fn has_dot_segment(path: &str) -> bool {
    path.split(['#', '?'])
        .next()
        .unwrap_or_default()
        .split('/')
        .any(|segment| segment == "." || segment == "..")
}
