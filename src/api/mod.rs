//! Public entry points for the host side of the boundary.

pub mod ffi;
