//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;

use std::path::Path;

use sapbit_config::{CliSettings, Config};
use sapbit_nav::NavigationModel;

use crate::error::CliError;

/// Load configuration and build the navigation model.
pub(crate) fn load_model(
    config_path: Option<&Path>,
    cli_settings: &CliSettings,
) -> Result<(Config, NavigationModel), CliError> {
    let config = Config::load(config_path, Some(cli_settings))?;
    let model = sapbit_nav::build(&config.site)?;
    Ok((config, model))
}
