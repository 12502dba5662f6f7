//! Runtime configuration loaded from the process environment.

use std::env;

use tracing_subscriber::EnvFilter;

use super::error::{ScriptError, ScriptResult};

pub const HOST_LIBRARY_KEY: &str = "IMHEX_SCRIPT_HOST_LIBRARY";
pub const LOG_KEY: &str = "IMHEX_SCRIPT_LOG";
pub const LOG_FORMAT_KEY: &str = "IMHEX_SCRIPT_LOG_FORMAT";

/// Shape of the log lines emitted by [`crate::common::log::init`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Snapshot of configuration values consumed by the crate.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HostCfg {
    /// Library exporting the host entry points; `None` means the running process.
    pub host_library: Option<String>,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl HostCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> ScriptResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ScriptResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_library = lookup(HOST_LIBRARY_KEY)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let log_filter = lookup(LOG_KEY)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        if EnvFilter::try_new(&log_filter).is_err() {
            return Err(ScriptError::Config {
                key: LOG_KEY,
                value: log_filter,
            });
        }

        let log_format = match lookup(LOG_FORMAT_KEY) {
            None => LogFormat::Text,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ScriptError::Config {
                        key: LOG_FORMAT_KEY,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            host_library,
            log_filter,
            log_format,
        })
    }
}
