//! The capability set a script implements to supply memory to the host.

use std::slice;

/// A custom data source the host can open like a file.
///
/// The host drives every method through C callbacks for as long as the
/// process lives. Implementations must not call back into the host's
/// provider machinery for the same instance from inside these methods.
pub trait Provider: Send + 'static {
    /// Fill `data` with the bytes starting at `address`.
    fn read(&mut self, address: u64, data: &mut [u8]);

    /// Store `data` starting at `address`.
    fn write(&mut self, address: u64, data: &[u8]);

    /// Total size of the data in bytes.
    fn size(&self) -> u64;

    /// Identifier of the provider kind, shown by the host.
    fn type_name(&self) -> &str;

    /// Display name of this instance.
    fn name(&self) -> &str;

    /// Entry point for the host's read callback.
    ///
    /// # Safety
    /// `buffer` must be null or valid for writes of `size` bytes. A `size`
    /// beyond the address space is ignored.
    unsafe fn read_raw(&mut self, address: u64, buffer: *mut u8, size: u64) {
        let Ok(len) = usize::try_from(size) else {
            return;
        };
        if buffer.is_null() || len == 0 {
            return;
        }
        let data = slice::from_raw_parts_mut(buffer, len);
        self.read(address, data);
    }

    /// Entry point for the host's write callback.
    ///
    /// # Safety
    /// `buffer` must be null or valid for reads of `size` bytes.
    unsafe fn write_raw(&mut self, address: u64, buffer: *const u8, size: u64) {
        let Ok(len) = usize::try_from(size) else {
            return;
        };
        if buffer.is_null() || len == 0 {
            return;
        }
        let data = slice::from_raw_parts(buffer, len);
        self.write(address, data);
    }
}
