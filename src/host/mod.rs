//! Connection to the native host application.
//!
//! Every call into the host goes through a [`Host`], which wraps the resolved
//! [`HostTable`]. A process-wide host can be installed once and is otherwise
//! resolved lazily from configuration on first use.

pub mod abi;
mod library;
#[cfg(test)]
pub(crate) mod mock;

use std::ffi::CStr;
use std::sync::Arc;

use libloading::Library;
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::common::config::HostCfg;
use crate::common::error::{ScriptError, ScriptResult};

pub use abi::{DataAccessFn, GetSizeFn, HostTable, ABI_VERSION};

static CURRENT: OnceCell<Host> = OnceCell::new();

/// Resolved entry points, plus the library handle that keeps them mapped.
#[derive(Clone, Debug)]
pub struct Host {
    table: HostTable,
    _library: Option<Arc<Library>>,
}

impl Host {
    /// Wrap a table resolved elsewhere.
    ///
    /// # Safety
    /// Every pointer in `table` must implement the matching host entry point
    /// and stay callable for as long as the returned `Host` (or any clone) lives.
    pub unsafe fn from_table(table: HostTable) -> Self {
        Self {
            table,
            _library: None,
        }
    }

    /// Resolve the entry points from the library named in `cfg`, or from the
    /// running process when none is configured.
    pub fn load(cfg: &HostCfg) -> ScriptResult<Self> {
        let library = library::open(cfg.host_library.as_deref())?;
        let table = library::resolve(&library)?;
        info!(
            library = cfg.host_library.as_deref().unwrap_or("<current process>"),
            "resolved host entry points"
        );
        Ok(Self {
            table,
            _library: Some(Arc::new(library)),
        })
    }

    /// Forward to `createBookmarkV1`.
    pub fn create_bookmark(
        &self,
        address: u64,
        size: u64,
        color: u32,
        name: &CStr,
        description: &CStr,
    ) {
        debug!(address, size, color, "createBookmarkV1");
        unsafe {
            (self.table.create_bookmark)(
                address,
                size,
                color,
                name.as_ptr(),
                description.as_ptr(),
            );
        }
    }

    /// Forward to `readMemoryV1`; the host fills all of `buffer`.
    pub fn read_memory(&self, address: u64, buffer: &mut [u8]) {
        debug!(address, size = buffer.len(), "readMemoryV1");
        unsafe {
            (self.table.read_memory)(address, buffer.len() as u64, buffer.as_mut_ptr().cast());
        }
    }

    /// Forward to `writeMemoryV1`.
    pub fn write_memory(&self, address: u64, data: &[u8]) {
        debug!(address, size = data.len(), "writeMemoryV1");
        unsafe {
            (self.table.write_memory)(address, data.len() as u64, data.as_ptr().cast());
        }
    }

    /// Forward to `getSelectionV1`. Returns the raw `(start, end)` pair, or
    /// `None` when the host reports no selection.
    pub fn get_selection(&self) -> Option<(u64, u64)> {
        let mut start = 0u64;
        let mut end = 0u64;
        let selected = unsafe { (self.table.get_selection)(&mut start, &mut end) };
        debug!(selected, start, end, "getSelectionV1");
        selected.then_some((start, end))
    }

    /// Forward to `registerProviderV1`.
    pub fn register_provider(
        &self,
        type_name: &CStr,
        name: &CStr,
        read: DataAccessFn,
        write: DataAccessFn,
        get_size: GetSizeFn,
    ) {
        debug!(?type_name, ?name, "registerProviderV1");
        unsafe {
            (self.table.register_provider)(
                type_name.as_ptr(),
                name.as_ptr(),
                read,
                write,
                get_size,
            );
        }
    }
}

/// Install the process-wide host. Fails if one is already in place.
pub fn install(host: Host) -> ScriptResult<&'static Host> {
    let mut installed = false;
    let current = CURRENT.get_or_init(|| {
        installed = true;
        host
    });
    if !installed {
        return Err(ScriptError::AlreadyInstalled);
    }
    info!("host installed");
    Ok(current)
}

/// The process-wide host, loading it from the environment on first use.
pub fn current() -> ScriptResult<&'static Host> {
    if let Some(host) = CURRENT.get() {
        return Ok(host);
    }
    connect(&HostCfg::load()?)
}

/// The process-wide host, loading it as described by `cfg` if none is installed yet.
pub fn connect(cfg: &HostCfg) -> ScriptResult<&'static Host> {
    CURRENT.get_or_try_init(|| Host::load(cfg))
}

pub fn is_installed() -> bool {
    CURRENT.get().is_some()
}
