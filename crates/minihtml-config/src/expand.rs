//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("index.html", "output.path").unwrap(), "index.html");
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env("${MINIHTML_TEST_SURELY_UNSET:-docs}/api.article", "source.path").unwrap(),
            "docs/api.article"
        );
    }

    #[test]
    fn test_unset_without_default_is_error() {
        let err = expand_env("${MINIHTML_TEST_SURELY_UNSET}", "page.title").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EnvVar { ref field, ref message }
                if field == "page.title" && message.contains("MINIHTML_TEST_SURELY_UNSET")
        ));
    }
}
