//! Search strategy selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{breadth_first, depth_first};
use crate::error::{ConfigError, Result};
use crate::mask::FileNameMask;
use crate::route::DiscoveredRoute;

/// Order in which the route directory tree is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl SearchType {
    /// Canonical names, as accepted by `FromStr` and serde.
    pub const VARIANT_NAMES: &'static [&'static str] = &["breadthFirst", "depthFirst"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::BreadthFirst => "breadthFirst",
            SearchType::DepthFirst => "depthFirst",
        }
    }

    /// Run this strategy from `root`.
    pub fn search<M: FileNameMask + ?Sized>(
        self,
        root: &Path,
        mask: &M,
    ) -> Result<Vec<DiscoveredRoute>> {
        match self {
            SearchType::BreadthFirst => breadth_first(root, mask),
            SearchType::DepthFirst => depth_first(root, mask),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ConfigError;

    /// Case-insensitive; `-` and `_` separators are ignored, so
    /// `breadthFirst`, `breadth-first` and `BREADTH_FIRST` are all accepted.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "breadthfirst" => Ok(SearchType::BreadthFirst),
            "depthfirst" => Ok(SearchType::DepthFirst),
            _ => Err(ConfigError::InvalidSearchType(s.to_string())),
        }
    }
}
