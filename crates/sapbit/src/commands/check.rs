//! `sapbit check` command implementation.
//!
//! Gate for the site build: the configuration must be valid and every
//! document it references must exist under the docs directory.

use std::path::{Path, PathBuf};

use clap::Args;
use sapbit_config::CliSettings;
use sapbit_nav::DocumentRef;

use super::load_model;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sapbit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any referenced
    /// document is missing.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };

        let (config, model) = load_model(self.config.as_deref(), &cli_settings)?;
        let source_dir = &config.docs_resolved.source_dir;
        output.info(&format!("Source directory: {}", source_dir.display()));

        let documents = model.required_documents();
        let missing = find_missing(&documents, source_dir);

        if !missing.is_empty() {
            for document in &missing {
                tracing::warn!(
                    path = %document.path,
                    referenced_by = %document.referenced_by,
                    "Referenced document not found"
                );
                output.warning(&format!(
                    "missing: {} (referenced by {})",
                    document.path, document.referenced_by
                ));
            }
            return Err(CliError::MissingDocument(
                missing.into_iter().map(|d| d.path.clone()).collect(),
            ));
        }

        output.success(&format!(
            "Configuration OK: {} navbar entries, {} sidebar groups, {} documents",
            model.navbar().len(),
            model.sidebar_groups().len(),
            documents.len()
        ));
        Ok(())
    }
}

/// Documents that do not exist as files under `source_dir`.
fn find_missing<'a>(documents: &'a [DocumentRef], source_dir: &Path) -> Vec<&'a DocumentRef> {
    documents
        .iter()
        .filter(|document| !source_dir.join(&document.path).is_file())
        .collect()
}
