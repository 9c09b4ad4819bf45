//! Directory traversal collecting route handler files
//!
//! Two strategies are provided, selected through [`SearchType`]:
//!
//! - `BreadthFirst`: every match at depth *d* is emitted before any match at depth *d+1*
//! - `DepthFirst`: each sub-directory is fully resolved before the next sibling,
//!   and a directory's own files come after all of its sub-directories
//!
//! Entries of a directory are visited sorted by file name. Any filesystem error
//! aborts the walk.

mod breadth_first;
mod depth_first;
mod search_type;
mod traversal;

pub use breadth_first::breadth_first;
pub use depth_first::depth_first;
pub use search_type::SearchType;
