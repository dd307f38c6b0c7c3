//! "Edit this page" links.

use sapbit_config::ThemeConfig;
use serde::Serialize;

/// Pattern used when the theme does not set one.
const DEFAULT_PATTERN: &str = ":repo/edit/:branch/:path";

/// Resolved edit-link template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditLinks {
    pattern: String,
    repo_url: String,
    branch: String,
    docs_dir: String,
}

impl EditLinks {
    /// Build from theme options.
    ///
    /// Returns `None` when edit links are disabled or no repository is set.
    pub(crate) fn from_theme(theme: &ThemeConfig) -> Option<Self> {
        if !theme.edit_link {
            return None;
        }
        let repo = theme.repo.as_deref().filter(|r| !r.is_empty())?;

        Some(Self {
            pattern: theme
                .edit_link_pattern
                .clone()
                .unwrap_or_else(|| DEFAULT_PATTERN.to_owned()),
            repo_url: repo_url(repo),
            branch: theme.docs_branch.clone(),
            docs_dir: theme.docs_dir.trim_matches('/').to_owned(),
        })
    }

    /// Edit URL for a source document relative to the docs directory.
    #[must_use]
    pub fn for_document(&self, document: &str) -> String {
        let document = document.trim_start_matches('/');
        let path = if self.docs_dir.is_empty() {
            document.to_owned()
        } else {
            format!("{}/{document}", self.docs_dir)
        };

        self.pattern
            .replace(":repo", &self.repo_url)
            .replace(":branch", &self.branch)
            .replace(":path", &path)
    }
}

/// Expand `owner/name` shorthand to a GitHub URL.
pub(crate) fn repo_url(repo: &str) -> String {
    if repo.contains("://") {
        repo.trim_end_matches('/').to_owned()
    } else {
        format!("https://github.com/{}", repo.trim_matches('/'))
    }
}
