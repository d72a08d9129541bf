use std::collections::BTreeMap;

use errmap_core::ErrorKind;
use serde::Deserialize;

/// Error registry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Extra detail attached to each kind's descriptor, keyed by slug
    /// (e.g. `access_denied = "..."`)
    #[serde(default)]
    pub explanations: BTreeMap<ErrorKind, String>,
}

impl ErrorsConfig {
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        for (kind, explanation) in &self.explanations {
            if explanation.trim().is_empty() {
                anyhow::bail!("errors.explanations.{kind} must not be blank");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_explanations() {
        let toml = r#"
            [explanations]
            access_denied = "missing scope"
            invalid_json = "body is not valid JSON"
        "#;

        let config: ErrorsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.explanations.len(), 2);
        assert_eq!(config.explanations[&ErrorKind::AccessDenied], "missing scope");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_kind_rejected() {
        let toml = r#"
            [explanations]
            teapot = "short and stout"
        "#;

        assert!(toml::from_str::<ErrorsConfig>(toml).is_err());
    }

    #[test]
    fn blank_explanation_fails_validation() {
        let toml = r#"
            [explanations]
            not_found = "   "
        "#;

        let config: ErrorsConfig = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        insta::assert_snapshot!(err, @"errors.explanations.not_found must not be blank");
    }
}
