//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains('$') {
        return Ok(value.to_owned());
    }
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("glue-tabs", "tabs.class_prefix").unwrap(), "glue-tabs");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCPOST_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${DOCPOST_EXPAND_UNSET:-fallback}", "tabs.class_prefix").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCPOST_EXPAND_MISSING");
        }
        let err = expand_env("${DOCPOST_EXPAND_MISSING}", "tabs.panel_id_prefix").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DOCPOST_EXPAND_MISSING"));
        assert!(msg.contains("tabs.panel_id_prefix"));
    }
}
