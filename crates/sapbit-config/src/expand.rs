//! `${VAR}` / `${VAR:-default}` expansion for configuration strings.

use serde_json::Value;

use crate::LoadError;

/// Name of the variable that failed to resolve.
struct Unset(String);

/// Expand environment variable references in `value`.
///
/// Bare `$VAR` is left untouched; only the braced form is recognized.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, LoadError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, Unset> {
        std::env::var(name)
            .map(Some)
            .map_err(|_| Unset(name.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| LoadError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Expand a string field in place.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), LoadError> {
    *value = expand_env(value, field)?;
    Ok(())
}

/// Expand every string option of a plugin.
///
/// Non-string values are left as they are.
pub(crate) fn expand_options(
    options: &mut serde_json::Map<String, Value>,
    plugin: &str,
) -> Result<(), LoadError> {
    for (key, value) in options.iter_mut() {
        if let Value::String(s) = value {
            expand_in_place(s, &format!("plugins.{plugin}.{key}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passes_through() {
        assert_eq!(expand_env("SAP Bit", "title").unwrap(), "SAP Bit");
        assert_eq!(expand_env("$HOME", "title").unwrap(), "$HOME");
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SAPBIT_TEST_EXPAND_SET", "bit");
        }
        let result = expand_env("sap-${SAPBIT_TEST_EXPAND_SET}", "title").unwrap();
        assert_eq!(result, "sap-bit");
        unsafe {
            std::env::remove_var("SAPBIT_TEST_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SAPBIT_TEST_EXPAND_DEFAULT");
        }
        let result = expand_env("${SAPBIT_TEST_EXPAND_DEFAULT:-fallback}", "title").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_unset_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SAPBIT_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${SAPBIT_TEST_EXPAND_MISSING}", "theme.repo").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("theme.repo"), "{msg}");
        assert!(msg.contains("SAPBIT_TEST_EXPAND_MISSING"), "{msg}");
    }

    #[test]
    fn test_expand_options_skips_non_strings() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SAPBIT_TEST_UMAMI_ID", "abc-123");
        }
        let mut options = serde_json::Map::new();
        options.insert("id".to_owned(), Value::from("${SAPBIT_TEST_UMAMI_ID}"));
        options.insert("weight".to_owned(), Value::from(3));

        expand_options(&mut options, "umami-analytics").unwrap();

        assert_eq!(options["id"], "abc-123");
        assert_eq!(options["weight"], 3);
        unsafe {
            std::env::remove_var("SAPBIT_TEST_UMAMI_ID");
        }
    }
}
