use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// `tracing` filter directive, `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

fn default_service_name() -> String {
    "errmap".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: TelemetryConfig = toml::from_str("").unwrap();
        assert_eq!(config.service_name, "errmap");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn json_format() {
        let toml = r#"
            service_name = "billing-api"
            log_filter = "errmap_core=debug,warn"
            format = "json"
        "#;

        let config: TelemetryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.service_name, "billing-api");
        assert_eq!(config.log_filter, "errmap_core=debug,warn");
        assert_eq!(config.format, LogFormat::Json);
    }
}
