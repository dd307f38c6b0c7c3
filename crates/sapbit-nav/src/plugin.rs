//! Plugin registry.
//!
//! Maps plugin identifiers to the set of options each plugin understands.
//! The registry only validates option keys and value shapes; the descriptors
//! themselves are handed on to the site generator untouched.

use std::collections::HashMap;

use sapbit_config::PluginDescriptor;
use serde_json::Value;

use crate::ConfigError;

/// Identifier of the built-in analytics plugin.
pub const UMAMI_ANALYTICS: &str = "umami-analytics";

/// Expected shape of an option value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// Any JSON value.
    Any,
    /// A string.
    String,
    /// An `http://` or `https://` URL.
    Url,
    /// A boolean.
    Bool,
}

impl OptionKind {
    /// Check `value`, returning the reason it was rejected.
    fn check(self, value: &Value) -> Result<(), &'static str> {
        match (self, value) {
            (Self::Any, _) | (Self::String, Value::String(_)) | (Self::Bool, Value::Bool(_)) => {
                Ok(())
            }
            (Self::Url, Value::String(s)) => {
                if s.starts_with("http://") || s.starts_with("https://") {
                    Ok(())
                } else {
                    Err("must start with http:// or https://")
                }
            }
            (Self::String | Self::Url, _) => Err("must be a string"),
            (Self::Bool, _) => Err("must be a boolean"),
        }
    }
}

#[derive(Clone, Debug)]
struct OptionSpec {
    key: String,
    kind: OptionKind,
    required: bool,
}

/// Options recognized by one plugin.
#[derive(Clone, Debug, Default)]
pub struct PluginSpec {
    options: Vec<OptionSpec>,
}

impl PluginSpec {
    /// Create a spec with no recognized options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option that must be present.
    #[must_use]
    pub fn required(self, key: &str, kind: OptionKind) -> Self {
        self.with_option(key, kind, true)
    }

    /// Add an option that may be omitted.
    #[must_use]
    pub fn optional(self, key: &str, kind: OptionKind) -> Self {
        self.with_option(key, kind, false)
    }

    fn with_option(mut self, key: &str, kind: OptionKind, required: bool) -> Self {
        self.options.push(OptionSpec {
            key: key.to_owned(),
            kind,
            required,
        });
        self
    }

    /// Recognized option keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }

    fn validate(&self, plugin: &PluginDescriptor) -> Result<(), ConfigError> {
        let invalid = |option: &str, reason: &str| ConfigError::InvalidPluginOption {
            plugin: plugin.name.clone(),
            option: option.to_owned(),
            reason: reason.to_owned(),
        };

        for (key, value) in &plugin.options {
            let spec = self
                .options
                .iter()
                .find(|o| o.key == *key)
                .ok_or_else(|| invalid(key, "unrecognized option"))?;
            spec.kind.check(value).map_err(|reason| invalid(key, reason))?;
        }

        if let Some(missing) = self
            .options
            .iter()
            .find(|o| o.required && !plugin.options.contains_key(&o.key))
        {
            return Err(invalid(&missing.key, "required option missing"));
        }

        Ok(())
    }
}

/// Registry from plugin identifier to [`PluginSpec`].
#[derive(Clone, Debug, Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, PluginSpec>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the plugins the site ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            UMAMI_ANALYTICS,
            PluginSpec::new()
                .required("link", OptionKind::Url)
                .required("id", OptionKind::String),
        );
        registry
    }

    /// Register or replace a plugin spec.
    pub fn register(&mut self, name: impl Into<String>, spec: PluginSpec) -> &mut Self {
        self.plugins.insert(name.into(), spec);
        self
    }

    /// Look up the spec for a plugin.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PluginSpec> {
        self.plugins.get(name)
    }

    /// Validate a descriptor against its registered spec.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlugin`] if the identifier is not
    /// registered, or [`ConfigError::InvalidPluginOption`] if an option is
    /// unrecognized, has the wrong shape, or a required one is missing.
    pub fn validate(&self, plugin: &PluginDescriptor) -> Result<(), ConfigError> {
        self.get(&plugin.name)
            .ok_or_else(|| ConfigError::UnknownPlugin(plugin.name.clone()))?
            .validate(plugin)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn descriptor(name: &str, options: Value) -> PluginDescriptor {
        let Value::Object(options) = options else {
            panic!("options must be an object");
        };
        PluginDescriptor {
            name: name.to_owned(),
            options,
        }
    }

    fn umami(options: Value) -> PluginDescriptor {
        descriptor(UMAMI_ANALYTICS, options)
    }

    #[test]
    fn test_builtin_umami_accepts_link_and_id() {
        let registry = PluginRegistry::builtin();
        let plugin = umami(json!({"link": "https://stats.example.com/script.js", "id": "abc"}));
        assert!(registry.validate(&plugin).is_ok());
    }

    #[test]
    fn test_builtin_umami_keys() {
        let registry = PluginRegistry::builtin();
        let keys: Vec<&str> = registry.get(UMAMI_ANALYTICS).unwrap().keys().collect();
        assert_eq!(keys, vec!["link", "id"]);
    }

    #[test]
    fn test_unrecognized_option_rejected() {
        let registry = PluginRegistry::builtin();
        let plugin = umami(json!({
            "link": "https://stats.example.com/script.js",
            "id": "abc",
            "domains": "sapbit.example.com"
        }));

        let err = registry.validate(&plugin).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidPluginOption {
                plugin: UMAMI_ANALYTICS.to_owned(),
                option: "domains".to_owned(),
                reason: "unrecognized option".to_owned(),
            }
        );
    }

    #[test]
    fn test_missing_required_option_rejected() {
        let registry = PluginRegistry::builtin();
        let err = registry
            .validate(&umami(json!({"link": "https://stats.example.com/script.js"})))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPluginOption { ref option, .. } if option == "id"
        ));
        assert!(err.to_string().contains("required option missing"));
    }

    #[test]
    fn test_non_http_link_rejected() {
        let registry = PluginRegistry::builtin();
        let err = registry
            .validate(&umami(json!({"link": "ftp://stats.example.com", "id": "abc"})))
            .unwrap_err();
        assert!(err.to_string().contains("http://"), "{err}");
    }

    #[test]
    fn test_wrong_type_rejected() {
        let registry = PluginRegistry::builtin();
        let err = registry
            .validate(&umami(json!({"link": "https://stats.example.com", "id": 42})))
            .unwrap_err();
        assert!(err.to_string().contains("must be a string"), "{err}");
    }

    #[test]
    fn test_unknown_plugin_rejected() {
        let registry = PluginRegistry::builtin();
        let err = registry
            .validate(&descriptor("google-analytics", json!({})))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownPlugin("google-analytics".to_owned()));
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = PluginRegistry::new();
        registry.register(
            "reading-time",
            PluginSpec::new()
                .optional("enabled", OptionKind::Bool)
                .optional("extra", OptionKind::Any),
        );

        assert!(registry.validate(&descriptor("reading-time", json!({}))).is_ok());
        assert!(
            registry
                .validate(&descriptor("reading-time", json!({"enabled": true, "extra": [1]})))
                .is_ok()
        );
        assert!(
            registry
                .validate(&descriptor("reading-time", json!({"enabled": "yes"})))
                .is_err()
        );
    }
}
