//! Native bindings for scripts running inside the ImHex scripting host.
//!
//! The host exports a small function table (`readMemoryV1`, `writeMemoryV1`,
//! `getSelectionV1`, `createBookmarkV1`, `registerProviderV1`). This crate
//! resolves it and wraps each call in a typed, safe API.
pub mod api;
pub mod bookmarks;
pub mod common;
pub mod host;
pub mod memory;
pub mod provider;

pub use bookmarks::{Bookmark, Color};
pub use common::{HostCfg, ScriptCode, ScriptError, ScriptResult};
pub use host::Host;
pub use memory::{Region, Selection};
pub use provider::{Provider, ProviderHandle};

/// Load configuration, install logging and return the process-wide host.
pub fn init() -> ScriptResult<&'static Host> {
    let cfg = HostCfg::load()?;
    common::log::init(&cfg);
    host::connect(&cfg)
}
