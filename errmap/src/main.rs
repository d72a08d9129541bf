#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::io::Write;

use args::Args;
use clap::Parser;
use errmap_config::Config;
use errmap_core::{ApiError, InternalError};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = args.config.as_deref().map(Config::load).transpose()?.unwrap_or_default();

    // Initialize logging
    let _telemetry_guard = errmap_telemetry::init(config.telemetry.as_ref(), args.log_filter.as_deref())?;

    // Registry must be in place before the first lookup
    config.registry().install()?;

    tracing::debug!(config_path = ?args.config, "starting errmap");

    render(&args.errors, &mut std::io::stdout().lock())?;

    Ok(())
}

/// Convert each input and print its message
fn render(inputs: &[String], out: &mut impl Write) -> std::io::Result<()> {
    for input in inputs {
        let api = resolve(input);
        tracing::info!(
            input = %input,
            code = api.code(),
            status = api.status().as_u16(),
            "converted error"
        );
        writeln!(out, "base error:  {api}")?;
    }

    out.flush()
}

/// Resolve a sentinel name, or wrap anything else in an opaque error
fn resolve(input: &str) -> ApiError {
    if let Ok(sentinel) = input.parse::<InternalError>() {
        return errmap_core::convert(&sentinel);
    }

    let opaque = anyhow::anyhow!(input.to_owned());
    let source: &(dyn std::error::Error + 'static) = opaque.as_ref();
    errmap_core::convert(source)
}
