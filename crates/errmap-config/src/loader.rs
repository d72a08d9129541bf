use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the service name or log filter is empty, or an
    /// explanation is blank
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref telemetry) = self.telemetry {
            if telemetry.service_name.trim().is_empty() {
                anyhow::bail!("telemetry.service_name must not be empty");
            }

            if telemetry.log_filter.trim().is_empty() {
                anyhow::bail!("telemetry.log_filter must not be empty");
            }
        }

        self.errors.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use errmap_core::ErrorKind;

    use crate::LogFormat;

    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [telemetry]
            format = "compact"

            [errors.explanations]
            internal_error = "the incident has been recorded"
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        let telemetry = config.telemetry.as_ref().unwrap();
        assert_eq!(telemetry.format, LogFormat::Compact);
        assert_eq!(
            config.errors.explanations[&ErrorKind::Internal],
            "the incident has been recorded"
        );
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("/nonexistent/errmap.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file /nonexistent/errmap.toml"));
    }

    #[test]
    fn expands_env_before_parsing() {
        temp_env::with_var("ERRMAP_TEST_SERVICE", Some("orders-api"), || {
            let config = Config::parse("[telemetry]\nservice_name = \"{{ env.ERRMAP_TEST_SERVICE }}\"").unwrap();
            assert_eq!(config.telemetry.unwrap().service_name, "orders-api");
        });
    }

    #[test]
    fn expansion_failure_reported() {
        temp_env::with_var_unset("ERRMAP_TEST_UNSET", || {
            let err = Config::parse("[telemetry]\nservice_name = \"{{ env.ERRMAP_TEST_UNSET }}\"").unwrap_err();
            assert!(err.to_string().starts_with("config variable expansion failed"));
        });
    }

    #[test]
    fn empty_service_name_rejected() {
        let err = Config::parse("[telemetry]\nservice_name = \"\"").unwrap_err();
        insta::assert_snapshot!(err, @"telemetry.service_name must not be empty");
    }

    #[test]
    fn empty_log_filter_rejected() {
        let err = Config::parse("[telemetry]\nlog_filter = \" \"").unwrap_err();
        assert_eq!(err.to_string(), "telemetry.log_filter must not be empty");
    }

    #[test]
    fn blank_explanation_rejected() {
        let err = Config::parse("[errors.explanations]\naccess_denied = \"\"").unwrap_err();
        assert_eq!(err.to_string(), "errors.explanations.access_denied must not be blank");
    }
}
