//! Navigation model for the SAP Bit documentation site.
//!
//! This crate provides:
//! - [`build`]: validation of a [`SiteConfig`](sapbit_config::SiteConfig)
//!   into an immutable [`NavigationModel`]
//! - Path lookups for rendering: [`NavigationModel::resolve_sidebar`] and
//!   [`NavigationModel::resolve_active_navbar_entry`]
//! - [`NavigationModel::required_documents`] for build-time existence checks
//! - [`PluginRegistry`] for plugin option validation
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sapbit_config::Config;
//!
//! let config = Config::load(None, None)?;
//! let model = sapbit_nav::build(&config.site)?;
//!
//! for section in model.resolve_sidebar("/rfcs/standard.html") {
//!     println!("{}: {} documents", section.text, section.children.len());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod documents;
mod edit_link;
mod error;
mod model;
mod plugin;

pub use builder::{build, build_with};
pub use documents::{DocumentRef, DocumentSource, link_to_document};
pub use edit_link::EditLinks;
pub use error::ConfigError;
pub use model::{NavGroup, NavItem, NavLink, NavigationModel, SiteMeta};
pub use plugin::{OptionKind, PluginRegistry, PluginSpec, UMAMI_ANALYTICS};

// Re-export input types for convenience
pub use sapbit_config::{SidebarGroup, SidebarSection};

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    // The model is published once and read from many request handlers.
    assert_impl_all!(NavigationModel: Send, Sync);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error);
}
