//! Process-wide storage for registered providers and the C callbacks bound to them.
//!
//! The host's provider callbacks carry no context pointer, so each slot gets
//! its own monomorphised set of `extern "C"` trampolines. Slots are claimed
//! once and never released: the host may call back for the rest of the process.

use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::{error, warn};

use crate::common::error::{ScriptError, ScriptResult};
use crate::host::abi::{DataAccessFn, GetSizeFn};

use super::domain::Provider;

/// Number of providers a single script can register.
// TODO: Drop the fixed table once the host offers a registration call whose callbacks carry a context pointer.
pub const MAX_PROVIDERS: usize = 32;

type Slot = OnceCell<Mutex<Box<dyn Provider>>>;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: Slot = OnceCell::new();

static SLOTS: [Slot; MAX_PROVIDERS] = [EMPTY_SLOT; MAX_PROVIDERS];
static NEXT_SLOT: AtomicUsize = AtomicUsize::new(0);

/// Callbacks handed to `registerProviderV1` for one slot.
#[derive(Copy, Clone, Debug)]
pub struct Trampolines {
    pub read: DataAccessFn,
    pub write: DataAccessFn,
    pub get_size: GetSizeFn,
}

macro_rules! trampolines {
    ($($slot:literal)*) => {
        [$(Trampolines {
            read: read_slot::<$slot>,
            write: write_slot::<$slot>,
            get_size: size_slot::<$slot>,
        }),*]
    };
}

static TRAMPOLINES: [Trampolines; MAX_PROVIDERS] = trampolines!(
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
    16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
);

/// Move `provider` into the next free slot and return the slot index.
pub(crate) fn claim(provider: Box<dyn Provider>) -> ScriptResult<usize> {
    let index = NEXT_SLOT.fetch_add(1, Ordering::SeqCst);
    let Some(slot) = SLOTS.get(index) else {
        return Err(ScriptError::ProvidersExhausted(MAX_PROVIDERS));
    };
    if slot.set(Mutex::new(provider)).is_err() {
        // Indices are handed out once, so a filled slot means the counter wrapped.
        return Err(ScriptError::ProvidersExhausted(MAX_PROVIDERS));
    }
    Ok(index)
}

pub(crate) fn trampolines(index: usize) -> Option<Trampolines> {
    TRAMPOLINES.get(index).copied()
}

/// Number of slots currently holding a provider.
pub fn registered() -> usize {
    SLOTS.iter().filter(|slot| slot.get().is_some()).count()
}

/// Run `f` against the provider in `index`, never letting a panic escape.
/// Returns `None` when the slot is empty or the provider panicked.
pub(crate) fn with_slot<R>(
    index: usize,
    op: &'static str,
    f: impl FnOnce(&mut dyn Provider) -> R,
) -> Option<R> {
    let Some(cell) = SLOTS.get(index).and_then(OnceCell::get) else {
        warn!(slot = index, op, "host called an empty provider slot");
        return None;
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut provider = cell.lock();
        f(&mut **provider)
    }));

    match result {
        Ok(value) => Some(value),
        Err(_) => {
            error!(slot = index, op, "provider panicked inside host callback");
            None
        }
    }
}

unsafe extern "C" fn read_slot<const N: usize>(address: u64, buffer: *mut c_void, size: u64) {
    let buffer = buffer.cast::<u8>();
    let served = with_slot(N, "read", |provider| provider.read_raw(address, buffer, size));
    if served.is_some() || buffer.is_null() {
        return;
    }
    if let Ok(len) = usize::try_from(size) {
        std::ptr::write_bytes(buffer, 0, len);
    }
}

unsafe extern "C" fn write_slot<const N: usize>(address: u64, buffer: *mut c_void, size: u64) {
    let buffer = buffer.cast::<u8>().cast_const();
    with_slot(N, "write", |provider| provider.write_raw(address, buffer, size));
}

unsafe extern "C" fn size_slot<const N: usize>() -> u64 {
    with_slot(N, "size", |provider| provider.size()).unwrap_or(0)
}
