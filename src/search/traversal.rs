//! Directory listing shared by both search strategies.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Result, RouteFinderError};
use crate::mask::FileNameMask;
use crate::route::DiscoveredRoute;

/// One directory's contribution to a search.
#[derive(Debug, Default)]
pub(crate) struct DirListing {
    /// Sub-directories, in listing order.
    pub subdirs: Vec<PathBuf>,
    /// Matching files of this directory, in listing order.
    pub matches: Vec<DiscoveredRoute>,
}

/// Read `dir`, sort its entries by name and split them into sub-directories
/// and matching files.
///
/// Entry types are resolved with `fs::metadata`, so symbolic links are
/// followed. Entries that are neither files nor directories are skipped.
/// The mask and the route see the name through `to_string_lossy`, so bytes
/// that are not UTF-8 become U+FFFD in the route while the path keeps the
/// original name.
pub(crate) fn list_dir<M: FileNameMask + ?Sized>(dir: &Path, mask: &M) -> Result<DirListing> {
    trace!(dir = %dir.display(), "listing directory");

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| RouteFinderError::filesystem(dir, e))? {
        entries.push(entry.map_err(|e| RouteFinderError::filesystem(dir, e))?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    let mut listing = DirListing::default();
    for entry in entries {
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| RouteFinderError::filesystem(&path, e))?;

        if metadata.is_dir() {
            listing.subdirs.push(path);
        } else if metadata.is_file() {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if mask.is_match(&file_name) {
                listing
                    .matches
                    .push(DiscoveredRoute::from_match(&file_name, path, mask));
            }
        }
    }

    Ok(listing)
}
