//! Binary layout of the host's exported function table.
//!
//! Argument order and widths follow the host's `V1` entry points exactly; note
//! that the memory calls take `(address, size, buffer)` while the provider
//! callbacks take `(address, buffer, size)`.

use std::ffi::{c_char, c_void, CString};

use crate::common::error::{ScriptError, ScriptResult};

/// Version suffix shared by every entry point in [`HostTable`].
pub const ABI_VERSION: u32 = 1;

pub const CREATE_BOOKMARK: &str = "createBookmarkV1";
pub const READ_MEMORY: &str = "readMemoryV1";
pub const WRITE_MEMORY: &str = "writeMemoryV1";
pub const GET_SELECTION: &str = "getSelectionV1";
pub const REGISTER_PROVIDER: &str = "registerProviderV1";

pub type CreateBookmarkFn = unsafe extern "C" fn(
    address: u64,
    size: u64,
    color: u32,
    name: *const c_char,
    description: *const c_char,
);
pub type ReadMemoryFn = unsafe extern "C" fn(address: u64, size: u64, buffer: *mut c_void);
pub type WriteMemoryFn = unsafe extern "C" fn(address: u64, size: u64, buffer: *const c_void);
pub type GetSelectionFn = unsafe extern "C" fn(start: *mut u64, end: *mut u64) -> bool;
pub type RegisterProviderFn = unsafe extern "C" fn(
    type_name: *const c_char,
    name: *const c_char,
    read: DataAccessFn,
    write: DataAccessFn,
    get_size: GetSizeFn,
);

/// Callback the host uses to read from or write to a registered provider.
pub type DataAccessFn = unsafe extern "C" fn(address: u64, buffer: *mut c_void, size: u64);
/// Callback the host uses to query a registered provider's size.
pub type GetSizeFn = unsafe extern "C" fn() -> u64;

/// Resolved entry points of the host.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct HostTable {
    pub create_bookmark: CreateBookmarkFn,
    pub read_memory: ReadMemoryFn,
    pub write_memory: WriteMemoryFn,
    pub get_selection: GetSelectionFn,
    pub register_provider: RegisterProviderFn,
}

/// Encode `text` as NUL-terminated UTF-8 for the host.
pub fn to_c_string(field: &'static str, text: &str) -> ScriptResult<CString> {
    CString::new(text).map_err(|err| ScriptError::InteriorNul {
        field,
        offset: err.nul_position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_nul_terminated_utf8() {
        let encoded = to_c_string("name", "Größe").unwrap();
        assert_eq!(encoded.as_bytes_with_nul(), "Größe\0".as_bytes());

        let empty = to_c_string("description", "").unwrap();
        assert_eq!(empty.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = to_c_string("description", "ab\0cd").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::InteriorNul {
                field: "description",
                offset: 2
            }
        ));
    }
}
