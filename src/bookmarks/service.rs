//! Bookmark creation in the host.

use tracing::info;

use crate::common::error::ScriptResult;
use crate::host::abi::to_c_string;
use crate::host::Host;

use super::domain::{Bookmark, Color};

/// Create `bookmark` in the host.
pub fn create_bookmark(host: &Host, bookmark: &Bookmark) -> ScriptResult<()> {
    let name = to_c_string("bookmark name", &bookmark.name)?;
    let description = to_c_string("bookmark description", &bookmark.description)?;

    host.create_bookmark(
        bookmark.region.address,
        bookmark.region.size,
        bookmark.color.to_bookmark_word(),
        &name,
        &description,
    );
    info!(
        address = bookmark.region.address,
        size = bookmark.region.size,
        name = %bookmark.name,
        "bookmark created"
    );
    Ok(())
}

/// Create a bookmark from its parts.
pub fn create(
    host: &Host,
    address: u64,
    size: u64,
    color: Color,
    name: &str,
    description: &str,
) -> ScriptResult<()> {
    let bookmark = Bookmark::new(address, size)
        .color(color)
        .name(name)
        .description(description);
    create_bookmark(host, &bookmark)
}
