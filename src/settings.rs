//! Declarative finder settings
//!
//! Hosts that keep their configuration in a file can deserialize
//! [`FinderSettings`] with any serde format and hand it to
//! [`RouteFinder::apply_settings`](crate::RouteFinder::apply_settings).
//! Every field is optional; absent fields leave the finder unchanged.

use std::path::PathBuf;

use serde::Deserialize;

/// Optional overrides for a [`RouteFinder`](crate::RouteFinder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FinderSettings {
    /// Directory to search for route handlers.
    pub root_dir: Option<PathBuf>,
    /// Regex matched case-insensitively against file names.
    pub file_name_pattern: Option<String>,
    /// Glob matched case-insensitively against file names.
    /// Mutually exclusive with `file_name_pattern`.
    pub file_name_glob: Option<String>,
    /// `breadthFirst` or `depthFirst`.
    pub search_type: Option<String>,
}
