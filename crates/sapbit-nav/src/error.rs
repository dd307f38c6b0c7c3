//! Errors raised while building the navigation model.

/// Invalid site configuration.
///
/// Every variant names the offending element so the message alone is enough
/// to locate it in `sapbit.toml`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required site field is empty.
    #[error("Site field `{0}` cannot be empty")]
    EmptyField(&'static str),

    /// Navbar entry violates the link-xor-children shape.
    #[error("Malformed navbar entry \"{text}\": {reason}")]
    MalformedEntry {
        /// Display text of the entry.
        text: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Sidebar prefix is not an absolute `/…/` path.
    #[error("Invalid sidebar prefix \"{0}\": must start and end with '/' and contain no empty segments")]
    InvalidPrefix(String),

    /// Two sidebar groups share a prefix.
    #[error("Duplicate sidebar prefix \"{0}\"")]
    DuplicatePrefix(String),

    /// Sidebar section with empty text or an empty document reference.
    #[error("Malformed sidebar section \"{text}\" under \"{prefix}\": {reason}")]
    MalformedSection {
        /// Prefix of the enclosing group.
        prefix: String,
        /// Section text.
        text: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Plugin identifier with no registered spec.
    #[error("Unknown plugin \"{0}\"")]
    UnknownPlugin(String),

    /// Plugin option rejected by the plugin's spec.
    #[error("Invalid option \"{option}\" for plugin \"{plugin}\": {reason}")]
    InvalidPluginOption {
        /// Plugin identifier.
        plugin: String,
        /// Option key.
        option: String,
        /// What is wrong with it.
        reason: String,
    },
}
