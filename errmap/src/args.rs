use std::path::PathBuf;

use clap::Parser;

/// Resolve internal errors to their API error descriptors
#[derive(Debug, Parser)]
#[command(name = "errmap", about = "Map internal error sentinels to API errors")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "ERRMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the log filter (e.g. `errmap_core=debug`)
    #[arg(long, env = "ERRMAP_LOG")]
    pub log_filter: Option<String>,

    /// Internal error to convert; names that are not a known sentinel are
    /// treated as an opaque error
    #[arg(short, long = "error", value_name = "NAME", default_values_t = [
        "access-denied".to_string(),
        "invalid-json".to_string(),
    ])]
    pub errors: Vec<String>,
}
