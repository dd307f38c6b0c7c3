//! `sapbit serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sapbit_config::CliSettings;
use sapbit_server::{run_server, server_config_from_config};

use super::load_model;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover sapbit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "SAPBIT_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "SAPBIT_PORT")]
    port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        };

        // The model is complete before anything is published.
        let (config, model) = load_model(self.config.as_deref(), &cli_settings)?;
        let model = Arc::new(model);

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Site: {} ({} navbar entries, {} sidebar groups, {} plugins)",
            model.site().title,
            model.navbar().len(),
            model.sidebar_groups().len(),
            model.plugins().len()
        ));

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config, model)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
