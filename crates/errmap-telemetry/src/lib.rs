//! Logging for errmap
//!
//! Installs a `tracing-subscriber` registry writing to stderr so stdout stays
//! free for command output.

use errmap_config::{LogFormat, TelemetryConfig};
use tracing::Subscriber;
use tracing::span::EnteredSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Keeps the service span entered; hold it for the lifetime of the program
pub struct TelemetryGuard {
    _service: EnteredSpan,
}

/// Initialize logging from configuration
///
/// Filter precedence: the explicit `log_filter` argument, then `RUST_LOG`,
/// then the configured filter, then `info`. Every event emitted while the
/// returned guard is alive carries the configured `service` field.
///
/// # Errors
///
/// Returns an error if the chosen filter does not parse or a global
/// subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, log_filter: Option<&str>) -> anyhow::Result<TelemetryGuard> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(config, log_filter)?;
    let format = config.map_or_else(LogFormat::default, |c| c.format);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(format, std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    let service = config.map_or("errmap", |c| c.service_name.as_str());
    let guard = TelemetryGuard {
        _service: service_span(service).entered(),
    };

    tracing::debug!(?format, "logging initialized");

    Ok(guard)
}

/// Root span carrying the service name
///
/// ERROR level keeps it enabled under any filter that lets events through.
fn service_span(service: &str) -> tracing::Span {
    tracing::error_span!("errmap", service = %service)
}

/// fmt layer in the requested format
fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::fmt;

    match format {
        LogFormat::Pretty => fmt::layer().pretty().with_target(true).with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).with_writer(writer).boxed(),
        LogFormat::Json => fmt::layer().json().with_target(true).with_writer(writer).boxed(),
    }
}

/// Pick and parse the filter directive
fn build_filter(config: Option<&TelemetryConfig>, log_filter: Option<&str>) -> anyhow::Result<EnvFilter> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok().filter(|v| !v.trim().is_empty());

    let directive = log_filter
        .map(str::to_owned)
        .or(from_env)
        .or_else(|| config.map(|c| c.log_filter.clone()))
        .unwrap_or_else(|| "info".to_owned());

    EnvFilter::try_new(&directive).map_err(|e| anyhow::anyhow!("invalid log filter `{directive}`: {e}"))
}
