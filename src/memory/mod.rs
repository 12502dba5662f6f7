//! Memory domain: access to the data currently open in the host.

pub mod domain;
pub mod service;

pub use domain::{Region, Selection};
pub use service::{read, read_into, read_selection, selection, write};
