//! CLI error types.

use sapbit_config::LoadError;
use sapbit_nav::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Documents referenced by the navigation that do not exist.
    #[error("{} referenced document(s) missing", .0.len())]
    MissingDocument(Vec<String>),

    #[error("{0}")]
    Server(String),
}
