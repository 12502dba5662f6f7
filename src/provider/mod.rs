//! Provider domain: script-defined data sources the host can open.

pub mod domain;
pub mod registry;
pub mod service;

pub use domain::Provider;
pub use registry::MAX_PROVIDERS;
pub use service::{register, register_default, with_provider, ProviderHandle};
