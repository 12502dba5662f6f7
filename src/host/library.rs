//! Symbol resolution for the host entry points via `libloading`.

use libloading::Library;

use crate::common::error::{ScriptError, ScriptResult};

use super::abi::{self, HostTable};

/// Open the library that exports the entry points. `None` opens the running
/// process, which is where the host lives when it loaded this script.
pub(crate) fn open(name: Option<&str>) -> ScriptResult<Library> {
    match name {
        Some(path) => unsafe { Library::new(path) }.map_err(|source| ScriptError::Library {
            name: path.to_string(),
            source,
        }),
        None => open_self(),
    }
}

#[cfg(unix)]
fn open_self() -> ScriptResult<Library> {
    Ok(libloading::os::unix::Library::this().into())
}

#[cfg(windows)]
fn open_self() -> ScriptResult<Library> {
    libloading::os::windows::Library::this()
        .map(Library::from)
        .map_err(|source| ScriptError::Library {
            name: "<current process>".to_string(),
            source,
        })
}

/// Copy a function pointer out of `library`.
///
/// # Safety
/// `T` must match the exported symbol's real signature.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> ScriptResult<T> {
    let mut bytes = Vec::with_capacity(name.len() + 1);
    bytes.extend_from_slice(name.as_bytes());
    bytes.push(0);

    library
        .get::<T>(&bytes)
        .map(|sym| *sym)
        .map_err(|source| ScriptError::MissingSymbol {
            symbol: name,
            source,
        })
}

/// Resolve every entry point of the table, failing on the first missing one.
pub(crate) fn resolve(library: &Library) -> ScriptResult<HostTable> {
    // The aliases in `abi` mirror the host's declarations.
    unsafe {
        Ok(HostTable {
            create_bookmark: symbol(library, abi::CREATE_BOOKMARK)?,
            read_memory: symbol(library, abi::READ_MEMORY)?,
            write_memory: symbol(library, abi::WRITE_MEMORY)?,
            get_selection: symbol(library, abi::GET_SELECTION)?,
            register_provider: symbol(library, abi::REGISTER_PROVIDER)?,
        })
    }
}
