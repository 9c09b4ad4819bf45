//! Post-order search: sub-directories first, then the directory's own files.

use std::path::{Path, PathBuf};
use std::vec;

use super::traversal::list_dir;
use crate::error::Result;
use crate::mask::FileNameMask;
use crate::route::DiscoveredRoute;

/// A directory whose sub-directories are still being resolved.
struct Frame {
    pending: vec::IntoIter<PathBuf>,
    matches: Vec<DiscoveredRoute>,
}

impl Frame {
    fn open<M: FileNameMask + ?Sized>(dir: &Path, mask: &M) -> Result<Self> {
        let listing = list_dir(dir, mask)?;
        Ok(Self {
            pending: listing.subdirs.into_iter(),
            matches: listing.matches,
        })
    }
}

/// Walk `root` depth-first and collect every file accepted by `mask`.
///
/// Each sub-directory's subtree is fully emitted, in listing order, before
/// the next sibling; a directory's own matches follow all of its
/// sub-directories' matches.
pub fn depth_first<M: FileNameMask + ?Sized>(
    root: &Path,
    mask: &M,
) -> Result<Vec<DiscoveredRoute>> {
    let mut stack = vec![Frame::open(root, mask)?];
    let mut results = Vec::new();

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.pending.next(),
            None => break,
        };
        match next {
            Some(subdir) => stack.push(Frame::open(&subdir, mask)?),
            None => {
                if let Some(done) = stack.pop() {
                    results.extend(done.matches);
                }
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::default_mask;
    use crate::test_utils::RouteTree;

    fn routes(found: &[DiscoveredRoute]) -> Vec<&str> {
        found.iter().map(|r| r.route()).collect()
    }

    #[test]
    fn test_subtree_matches_precede_own_files() {
        let tree = RouteTree::new();
        tree.add_file("a/deep/one.route.js");
        tree.add_file("a/two.route.js");
        tree.add_file("three.route.js");

        let found = depth_first(tree.path(), &default_mask()).unwrap();
        assert_eq!(routes(&found), vec!["/one", "/two", "/three"]);
    }

    #[test]
    fn test_siblings_fully_resolved_in_order() {
        let tree = RouteTree::new();
        tree.add_file("a/a1.route.js");
        tree.add_file("a/inner/a2.route.js");
        tree.add_file("b/b1.route.js");
        tree.add_file("b/inner/b2.route.js");

        let found = depth_first(tree.path(), &default_mask()).unwrap();
        assert_eq!(routes(&found), vec!["/a2", "/a1", "/b2", "/b1"]);
    }

    #[test]
    fn test_own_files_keep_listing_order_after_subdirs() {
        let tree = RouteTree::new();
        tree.add_file("aa.route.js");
        tree.add_file("m/mid.route.js");
        tree.add_file("zz.route.js");

        let found = depth_first(tree.path(), &default_mask()).unwrap();
        assert_eq!(routes(&found), vec!["/mid", "/aa", "/zz"]);
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let tree = RouteTree::new();
        let deep: Vec<String> = (0..64).map(|i| format!("d{}", i)).collect();
        tree.add_file(&format!("{}/bottom.route.js", deep.join("/")));

        let found = depth_first(tree.path(), &default_mask()).unwrap();
        assert_eq!(routes(&found), vec!["/bottom"]);
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let tree = RouteTree::new();
        let found = depth_first(tree.path(), &default_mask()).unwrap();
        assert!(found.is_empty());
    }
}
