#![allow(clippy::must_use_candidate)]

mod env;
pub mod errors;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use errors::ErrorsConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level errmap configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
    /// Error registry configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
}

impl Config {
    /// Build the error registry described by this configuration
    pub fn registry(&self) -> errmap_core::Registry {
        errmap_core::Registry::with_explanations(
            self.errors
                .explanations
                .iter()
                .map(|(kind, explanation)| (*kind, explanation.clone())),
        )
    }
}
