//! Shared utilities that glue the different domains together.
pub mod config;
pub mod error;
pub mod log;

pub use config::HostCfg;
pub use error::{ScriptCode, ScriptError, ScriptResult};
