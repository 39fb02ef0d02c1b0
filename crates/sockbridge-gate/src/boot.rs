use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber for embedders that do not
/// bring their own. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
