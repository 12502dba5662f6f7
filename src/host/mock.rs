//! In-process stand-in for the host, used by the unit tests.
//!
//! The entry points are real `extern "C"` functions, so tests go through the
//! same function-pointer ABI as production. State is thread local: the host
//! calls back synchronously, and parallel tests stay isolated.

use std::cell::RefCell;
use std::ffi::{c_char, c_void, CStr};
use std::slice;

use super::abi::{DataAccessFn, GetSizeFn, HostTable};
use super::Host;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RecordedBookmark {
    pub address: u64,
    pub size: u64,
    pub color: u32,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Copy)]
pub(crate) struct RecordedProvider {
    pub read: DataAccessFn,
    pub write: DataAccessFn,
    pub get_size: GetSizeFn,
}

#[derive(Clone)]
pub(crate) struct RegisteredProvider {
    pub type_name: String,
    pub name: String,
    pub callbacks: RecordedProvider,
}

#[derive(Default)]
struct State {
    base: u64,
    memory: Vec<u8>,
    selection: Option<(u64, u64)>,
    bookmarks: Vec<RecordedBookmark>,
    providers: Vec<RegisteredProvider>,
    calls: Vec<String>,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

fn with_state<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

pub(crate) fn table() -> HostTable {
    HostTable {
        create_bookmark: create_bookmark_v1,
        read_memory: read_memory_v1,
        write_memory: write_memory_v1,
        get_selection: get_selection_v1,
        register_provider: register_provider_v1,
    }
}

/// Fresh host with empty state for the calling thread.
pub(crate) fn host() -> Host {
    with_state(|state| *state = State::default());
    unsafe { Host::from_table(table()) }
}

pub(crate) fn set_memory(base: u64, bytes: &[u8]) {
    with_state(|state| {
        state.base = base;
        state.memory = bytes.to_vec();
    });
}

pub(crate) fn memory() -> Vec<u8> {
    with_state(|state| state.memory.clone())
}

pub(crate) fn set_selection(selection: Option<(u64, u64)>) {
    with_state(|state| state.selection = selection);
}

pub(crate) fn bookmarks() -> Vec<RecordedBookmark> {
    with_state(|state| state.bookmarks.clone())
}

pub(crate) fn providers() -> Vec<RegisteredProvider> {
    with_state(|state| state.providers.clone())
}

pub(crate) fn calls() -> Vec<String> {
    with_state(|state| state.calls.clone())
}

unsafe fn owned(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

unsafe extern "C" fn create_bookmark_v1(
    address: u64,
    size: u64,
    color: u32,
    name: *const c_char,
    description: *const c_char,
) {
    let bookmark = RecordedBookmark {
        address,
        size,
        color,
        name: owned(name),
        description: owned(description),
    };
    with_state(|state| {
        state.calls.push(format!("createBookmarkV1({address}, {size})"));
        state.bookmarks.push(bookmark);
    });
}

unsafe extern "C" fn read_memory_v1(address: u64, size: u64, buffer: *mut c_void) {
    let out = slice::from_raw_parts_mut(buffer.cast::<u8>(), size as usize);
    with_state(|state| {
        state.calls.push(format!("readMemoryV1({address}, {size})"));
        for (offset, byte) in out.iter_mut().enumerate() {
            let index = (address + offset as u64).checked_sub(state.base);
            *byte = index
                .and_then(|i| state.memory.get(i as usize).copied())
                .unwrap_or(0);
        }
    });
}

unsafe extern "C" fn write_memory_v1(address: u64, size: u64, buffer: *const c_void) {
    let data = slice::from_raw_parts(buffer.cast::<u8>(), size as usize);
    with_state(|state| {
        state.calls.push(format!("writeMemoryV1({address}, {size})"));
        for (offset, byte) in data.iter().enumerate() {
            let index = (address + offset as u64).checked_sub(state.base);
            if let Some(slot) = index.and_then(|i| state.memory.get_mut(i as usize)) {
                *slot = *byte;
            }
        }
    });
}

unsafe extern "C" fn get_selection_v1(start: *mut u64, end: *mut u64) -> bool {
    match with_state(|state| state.selection) {
        Some((s, e)) => {
            *start = s;
            *end = e;
            true
        }
        None => false,
    }
}

unsafe extern "C" fn register_provider_v1(
    type_name: *const c_char,
    name: *const c_char,
    read: DataAccessFn,
    write: DataAccessFn,
    get_size: GetSizeFn,
) {
    let provider = RegisteredProvider {
        type_name: owned(type_name),
        name: owned(name),
        callbacks: RecordedProvider {
            read,
            write,
            get_size,
        },
    };
    with_state(|state| {
        state.calls.push("registerProviderV1".to_string());
        state.providers.push(provider);
    });
}
