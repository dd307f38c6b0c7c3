//! `sapbit resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use sapbit_config::CliSettings;
use sapbit_nav::NavigationModel;
use serde::Serialize;

use super::load_model;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Page path to resolve (e.g. `/rfcs/standard.html`).
    path: String,

    /// Path to configuration file (default: auto-discover sapbit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON on stdout.
    #[arg(long)]
    json: bool,
}

/// Resolved navigation for one page.
#[derive(Debug, PartialEq, Serialize)]
struct Resolution<'a> {
    path: &'a str,
    prefix: Option<&'a str>,
    sections: &'a [sapbit_nav::SidebarSection],
    active: Option<&'a sapbit_nav::NavLink>,
}

fn resolve<'a>(model: &'a NavigationModel, path: &'a str) -> Resolution<'a> {
    Resolution {
        path,
        prefix: model.sidebar_group_for(path).map(|g| g.prefix.as_str()),
        sections: model.resolve_sidebar(path),
        active: model.resolve_active_navbar_entry(path),
    }
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, model) = load_model(self.config.as_deref(), &CliSettings::default())?;
        let resolution = resolve(&model, &self.path);

        if self.json {
            let json = serde_json::to_string_pretty(&resolution)?;
            Term::stdout().write_line(&json)?;
            return Ok(());
        }

        let output = Output::new();
        output.heading(&self.path);
        match resolution.active {
            Some(link) => output.info(&format!("Navbar: {} ({})", link.text, link.link)),
            None => output.info("Navbar: no active entry"),
        }
        match resolution.prefix {
            Some(prefix) => {
                output.info(&format!("Sidebar: {prefix}"));
                for section in resolution.sections {
                    output.item(1, &section.text);
                    for child in &section.children {
                        output.item(2, child);
                    }
                }
            }
            None => output.info("Sidebar: none"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sapbit_config::{NavbarEntry, SidebarGroup, SidebarSection, SiteConfig};

    use super::*;

    fn model() -> NavigationModel {
        let mut site = SiteConfig {
            title: "SAP Bit".to_owned(),
            description: "The Ultimate SAP Resource".to_owned(),
            ..SiteConfig::default()
        };
        site.theme.navbar = vec![NavbarEntry::link("OData", "/odata/")];
        site.theme.sidebar = vec![SidebarGroup {
            prefix: "/odata/".to_owned(),
            sections: vec![SidebarSection::new("OData", &["/odata/README.md", "/odata/urls.md"])],
        }];
        sapbit_nav::build(&site).unwrap()
    }

    #[test]
    fn test_resolve_matching_page() {
        let model = model();
        let resolution = resolve(&model, "/odata/urls.html");

        assert_eq!(resolution.prefix, Some("/odata/"));
        assert_eq!(resolution.sections.len(), 1);
        assert_eq!(resolution.active.map(|l| l.text.as_str()), Some("OData"));
    }

    #[test]
    fn test_resolve_json_shape() {
        let model = model();
        let json = serde_json::to_value(resolve(&model, "/get-started.html")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "path": "/get-started.html",
                "prefix": null,
                "sections": [],
                "active": null
            })
        );
    }
}
