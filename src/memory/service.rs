//! Reading, writing and selection queries against the host's open data.

use crate::common::error::{ScriptError, ScriptResult};
use crate::host::Host;

use super::domain::Selection;

/// Read `size` bytes starting at `address`.
pub fn read(host: &Host, address: u64, size: u64) -> ScriptResult<Vec<u8>> {
    let len = usize::try_from(size).map_err(|_| ScriptError::SizeOverflow(size))?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| ScriptError::SizeOverflow(size))?;
    bytes.resize(len, 0);

    read_into(host, address, &mut bytes);
    Ok(bytes)
}

/// Fill `buf` with the bytes starting at `address`.
pub fn read_into(host: &Host, address: u64, buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    host.read_memory(address, buf);
}

/// Overwrite the bytes starting at `address` with `bytes`.
pub fn write(host: &Host, address: u64, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    host.write_memory(address, bytes);
}

/// The current selection, or `None` when nothing is selected.
pub fn selection(host: &Host) -> Option<Selection> {
    host.get_selection()
        .map(|(start, end)| Selection::new(start, end))
}

/// The current selection together with its contents.
pub fn read_selection(host: &Host) -> ScriptResult<Option<(Selection, Vec<u8>)>> {
    let Some(sel) = selection(host) else {
        return Ok(None);
    };
    let bytes = read(host, sel.start, sel.len())?;
    Ok(Some((sel, bytes)))
}
