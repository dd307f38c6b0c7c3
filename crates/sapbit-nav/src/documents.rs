//! Source documents referenced by the navigation.
//!
//! Page links and sidebar references both point at markdown sources under
//! the docs directory. Page URLs follow the generator's routing rules:
//!
//! - `/` and `/guide/` map to `README.md` and `guide/README.md`
//! - `/guide/setup.html` maps to `guide/setup.md`
//! - `/guide/setup.md` is taken as is
//! - `/guide/setup` gains a `.md` extension
//!
//! External links are not documents and are skipped.

use std::fmt;

use serde::Serialize;

/// Where a document reference was declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum DocumentSource {
    /// Navbar entry, by display text.
    Navbar(String),
    /// Sidebar group, by prefix.
    Sidebar(String),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navbar(text) => write!(f, "navbar entry \"{text}\""),
            Self::Sidebar(prefix) => write!(f, "sidebar \"{prefix}\""),
        }
    }
}

/// A source document the site cannot be built without.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    /// Path relative to the docs directory (e.g. `rfcs/README.md`).
    pub path: String,
    /// First place the document is referenced from.
    pub referenced_by: DocumentSource,
}

/// True for links leaving the site.
pub(crate) fn is_external(link: &str) -> bool {
    link.contains("://") || link.starts_with("mailto:") || link.starts_with("tel:")
}

/// Map a page link or document reference to its source document.
///
/// Returns `None` for external links and for links that only carry a
/// fragment or query (`#top`, `?tab=v4`).
#[must_use]
pub fn link_to_document(link: &str) -> Option<String> {
    if is_external(link) || link.starts_with(['#', '?']) {
        return None;
    }

    let path = link
        .split(['#', '?'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('/');

    let document = if path.is_empty() || path.ends_with('/') {
        format!("{path}README.md")
    } else if let Some(stem) = path.strip_suffix(".html") {
        format!("{stem}.md")
    } else if path.ends_with(".md") {
        path.to_owned()
    } else {
        format!("{path}.md")
    };

    Some(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_maps_to_readme() {
        assert_eq!(link_to_document("/").as_deref(), Some("README.md"));
    }

    #[test]
    fn test_directory_maps_to_readme() {
        assert_eq!(link_to_document("/rfcs/").as_deref(), Some("rfcs/README.md"));
    }

    #[test]
    fn test_html_maps_to_markdown() {
        assert_eq!(
            link_to_document("/rfcs/standard.html").as_deref(),
            Some("rfcs/standard.md")
        );
    }

    #[test]
    fn test_markdown_reference_kept() {
        assert_eq!(
            link_to_document("/sap-objects/tables.md").as_deref(),
            Some("sap-objects/tables.md")
        );
    }

    #[test]
    fn test_extensionless_gains_md() {
        assert_eq!(link_to_document("/get-started").as_deref(), Some("get-started.md"));
    }

    #[test]
    fn test_fragment_and_query_stripped() {
        assert_eq!(
            link_to_document("/odata/urls.html#filters").as_deref(),
            Some("odata/urls.md")
        );
        assert_eq!(
            link_to_document("/odata/?tab=v4").as_deref(),
            Some("odata/README.md")
        );
    }

    #[test]
    fn test_external_links_skipped() {
        assert_eq!(link_to_document("https://help.sap.com"), None);
        assert_eq!(link_to_document("mailto:docs@example.com"), None);
    }

    #[test]
    fn test_fragment_only_links_skipped() {
        assert_eq!(link_to_document("#top"), None);
        assert_eq!(link_to_document("?tab=v4"), None);
        assert_eq!(link_to_document("/#top").as_deref(), Some("README.md"));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            DocumentSource::Navbar("Home".to_owned()).to_string(),
            "navbar entry \"Home\""
        );
        assert_eq!(
            DocumentSource::Sidebar("/rfcs/".to_owned()).to_string(),
            "sidebar \"/rfcs/\""
        );
    }
}
