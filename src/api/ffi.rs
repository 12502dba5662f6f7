//! C-compatible API the host may call on a loaded script.

use crate::common::error::{ScriptCode, ScriptError, ScriptResult};
use crate::host::{self, Host, HostTable, ABI_VERSION};

/// ABI version to coordinate with the host's `V1` entry points.
#[no_mangle]
pub extern "C" fn imhex_script_abi_version() -> u32 {
    ABI_VERSION
}

/// Install the host's entry points directly instead of resolving them by name.
///
/// # Safety
/// `table` must be null or point to a [`HostTable`] whose function pointers
/// implement the host entry points for the rest of the process.
#[no_mangle]
pub unsafe extern "C" fn imhex_script_install_host(table: *const HostTable) -> u32 {
    let result = match table.as_ref() {
        Some(table) => host::install(Host::from_table(*table)).map(|_| ()),
        None => Err(ScriptError::NullTable),
    };
    status(result)
}

fn status(result: ScriptResult<()>) -> u32 {
    match result {
        Ok(()) => ScriptCode::Ok as u32,
        Err(err) => {
            tracing::warn!(code = err.code() as u32, "{err}");
            err.code() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock;

    #[test]
    fn reports_v1() {
        assert_eq!(imhex_script_abi_version(), 1);
    }

    #[test]
    fn null_table_is_rejected() {
        let code = unsafe { imhex_script_install_host(std::ptr::null()) };
        assert_eq!(code, ScriptError::NullTable.code() as u32);
        assert_eq!(code, ScriptCode::InvalidInput as u32);
    }

    #[test]
    fn pushed_table_is_installed_once() {
        // The process-wide host is shared by every test in the binary, so this
        // is the only test that installs one.
        let table = mock::table();
        let first = unsafe { imhex_script_install_host(&table) };
        assert_eq!(first, ScriptCode::Ok as u32);
        assert!(host::is_installed());

        let second = unsafe { imhex_script_install_host(&table) };
        assert_eq!(second, ScriptCode::AlreadyInstalled as u32);

        // Calls on the installed host reach the pushed table.
        let installed = host::current().unwrap();
        mock::set_memory(0, &[0x4D, 0x5A]);
        let mut buf = [0u8; 2];
        installed.read_memory(0, &mut buf);
        assert_eq!(&buf, b"MZ");
    }
}
