//! Level-order search.

use std::collections::VecDeque;
use std::path::Path;

use super::traversal::list_dir;
use crate::error::Result;
use crate::mask::FileNameMask;
use crate::route::DiscoveredRoute;

/// Walk `root` level by level and collect every file accepted by `mask`.
///
/// Matches of one directory keep their listing order; directories found at
/// the same depth are processed in the order their parents listed them.
pub fn breadth_first<M: FileNameMask + ?Sized>(
    root: &Path,
    mask: &M,
) -> Result<Vec<DiscoveredRoute>> {
    let mut pending = VecDeque::from([root.to_path_buf()]);
    let mut results = Vec::new();

    while let Some(dir) = pending.pop_front() {
        let listing = list_dir(&dir, mask)?;
        results.extend(listing.matches);
        pending.extend(listing.subdirs);
    }

    Ok(results)
}
