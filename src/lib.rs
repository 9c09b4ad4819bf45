//! Route Finder - discover route handler files and register them on a router
//!
//! Files under a root directory whose names match a mask (by default
//! `*.route.js` / `*.routes.js`, case-insensitive) are turned into route paths
//! and handed to a [`RouteSink`] in breadth-first or depth-first order.

pub mod error;
pub mod finder;
pub mod mask;
pub mod route;
pub mod search;
pub mod settings;
pub mod sink;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, ErrorKind, Result, RouteFinderError};
pub use finder::RouteFinder;
pub use mask::{DEFAULT_PATTERN, FileNameMask, GlobMask, compile_pattern, default_mask};
pub use route::{DiscoveredRoute, map_route};
pub use search::{SearchType, breadth_first, depth_first};
pub use settings::FinderSettings;
pub use sink::RouteSink;
