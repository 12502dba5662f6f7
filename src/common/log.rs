//! Subscriber setup for the `tracing` events emitted at the host boundary.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use super::config::{HostCfg, LogFormat};

/// Install the global subscriber. Returns `false` when one was already set,
/// either by an earlier call or by the embedding script. A filter that
/// bypassed [`HostCfg::from_lookup`] validation falls back to `info`.
pub fn init(cfg: &HostCfg) -> bool {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_target(true);

    let result = match cfg.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.is_ok()
}
