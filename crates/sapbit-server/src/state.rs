//! Application state.

use std::sync::Arc;

use sapbit_nav::NavigationModel;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation model, immutable for the lifetime of the server.
    pub(crate) model: Arc<NavigationModel>,
    /// Application version.
    pub(crate) version: String,
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use sapbit_config::{NavbarEntry, SidebarGroup, SidebarSection, SiteConfig};

    use super::AppState;

    /// State around a small RFC site.
    pub(crate) fn rfc_state() -> Arc<AppState> {
        let mut site = SiteConfig {
            title: "SAP Bit".to_owned(),
            description: "The Ultimate SAP Resource".to_owned(),
            ..SiteConfig::default()
        };
        site.theme.repo = Some("sapbit/sapbit".to_owned());
        site.theme.navbar = vec![
            NavbarEntry::link("Get Started", "/get-started.html"),
            NavbarEntry::group(
                "RFCs",
                vec![
                    NavbarEntry::link("Overview", "/rfcs/"),
                    NavbarEntry::link("Standard", "/rfcs/standard.html"),
                ],
            ),
        ];
        site.theme.sidebar = vec![SidebarGroup {
            prefix: "/rfcs/".to_owned(),
            sections: vec![SidebarSection::new(
                "RFCs",
                &["/rfcs/README.md", "/rfcs/standard.md"],
            )],
        }];

        Arc::new(AppState {
            model: Arc::new(sapbit_nav::build(&site).unwrap()),
            version: "0.1.0".to_owned(),
        })
    }
}
