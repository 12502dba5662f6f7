//! Bookmarks domain: highlighted, named regions in the host's view.

pub mod domain;
pub mod service;

pub use domain::{Bookmark, Color, BOOKMARK_ALPHA};
pub use service::{create, create_bookmark};
