//! Mapping from route handler file names to route paths

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::mask::FileNameMask;

static DASH_LOWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").expect("DASH_LOWER regex is invalid"));

/// A route handler file paired with the route it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredRoute {
    route: String,
    path: PathBuf,
}

impl DiscoveredRoute {
    pub fn new(route: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            route: route.into(),
            path: path.into(),
        }
    }

    /// Build the entry for a matched file, deriving the route from its base name.
    pub fn from_match<M: FileNameMask + ?Sized>(file_name: &str, path: PathBuf, mask: &M) -> Self {
        Self {
            route: map_route(file_name, mask),
            path,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Convert a matched file name into an absolute route path.
///
/// The mask's footprint and a leading `index` token are removed, dots become
/// path separators, and `-x` becomes `X`:
///
/// ```
/// use route_finder::{default_mask, map_route};
///
/// let mask = default_mask();
/// assert_eq!(map_route("x.api.user-accounts.routes.js", &mask), "/x/api/userAccounts");
/// assert_eq!(map_route("index.routes.js", &mask), "/");
/// ```
pub fn map_route<M: FileNameMask + ?Sized>(file_name: &str, mask: &M) -> String {
    let stripped = strip_footprint(file_name, mask);
    let name = strip_index(&stripped);

    let name = match name.find('.') {
        Some(idx) if idx > 0 => Cow::Owned(name.replace('.', "/")),
        _ => Cow::Borrowed(name),
    };

    let name = DASH_LOWER.replace_all(&name, |caps: &Captures| caps[1].to_uppercase());

    format!("/{}", name)
}

fn strip_footprint<'a, M: FileNameMask + ?Sized>(file_name: &'a str, mask: &M) -> Cow<'a, str> {
    let Some(range) = mask.find(file_name) else {
        return Cow::Borrowed(file_name);
    };
    match (file_name.get(..range.start), file_name.get(range.end..)) {
        (Some(head), Some("")) => Cow::Borrowed(head),
        (Some(head), Some(tail)) => Cow::Owned(format!("{}{}", head, tail)),
        _ => Cow::Borrowed(file_name),
    }
}

fn strip_index(name: &str) -> &str {
    if name == "index" {
        return "";
    }
    name.strip_prefix("index.").unwrap_or(name)
}
