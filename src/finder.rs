//! RouteFinder - configuration and registration entry point

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result, RouteFinderError};
use crate::mask::{FileNameMask, GlobMask, compile_pattern, default_mask};
use crate::route::DiscoveredRoute;
use crate::search::SearchType;
use crate::settings::FinderSettings;
use crate::sink::RouteSink;

/// Finds route handler files under a root directory and registers them on a
/// [`RouteSink`].
///
/// Setters validate their argument immediately and return `&mut Self`, so
/// configuration reads as a chain:
///
/// ```no_run
/// use route_finder::{DiscoveredRoute, RouteFinder, SearchType};
///
/// # fn main() -> route_finder::Result<()> {
/// let mut routes: Vec<DiscoveredRoute> = Vec::new();
/// RouteFinder::new()
///     .set_root_dir("app/routes")?
///     .set_search_type(SearchType::DepthFirst)?
///     .register(Some(&mut routes))?;
/// # Ok(())
/// # }
/// ```
pub struct RouteFinder {
    app_root: Option<PathBuf>,
    root_dir: Option<PathBuf>,
    file_name_mask: Box<dyn FileNameMask>,
    search_type: SearchType,
}

impl RouteFinder {
    /// A finder with no root directory, the default mask and breadth-first search.
    pub fn new() -> Self {
        Self {
            app_root: None,
            root_dir: None,
            file_name_mask: Box::new(default_mask()),
            search_type: SearchType::default(),
        }
    }

    /// A finder whose default root directory is the host application's root.
    ///
    /// The directory is not checked until it is used; [`reset`](Self::reset)
    /// restores it.
    pub fn with_app_root(app_root: impl Into<PathBuf>) -> Self {
        let app_root = app_root.into();
        Self {
            root_dir: Some(app_root.clone()),
            app_root: Some(app_root),
            ..Self::new()
        }
    }

    pub fn app_root(&self) -> Option<&Path> {
        self.app_root.as_deref()
    }

    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    pub fn file_name_mask(&self) -> &dyn FileNameMask {
        self.file_name_mask.as_ref()
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// Set the directory to search. It must exist, be a directory and be readable.
    pub fn set_root_dir(&mut self, root_dir: impl Into<PathBuf>) -> Result<&mut Self> {
        let root_dir = root_dir.into();
        check_root_dir(&root_dir)?;
        debug!("setting root search directory to {}", root_dir.display());
        self.root_dir = Some(root_dir);
        Ok(self)
    }

    pub fn set_file_name_mask(&mut self, mask: impl FileNameMask + 'static) -> Result<&mut Self> {
        debug!("setting file name mask to {}", mask);
        self.file_name_mask = Box::new(mask);
        Ok(self)
    }

    /// Compile `pattern` as a case-insensitive regex and use it as the mask.
    pub fn set_file_name_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        let mask = compile_pattern(pattern)?;
        self.set_file_name_mask(mask)
    }

    /// Use a shell-style glob such as `*.miss.js` as the mask.
    pub fn set_file_name_glob(&mut self, pattern: &str) -> Result<&mut Self> {
        let mask = GlobMask::new(pattern)?;
        self.set_file_name_mask(mask)
    }

    pub fn set_search_type(&mut self, search_type: SearchType) -> Result<&mut Self> {
        debug!("setting search type to {}", search_type);
        self.search_type = search_type;
        Ok(self)
    }

    /// Parse and set the search type. Unknown names are rejected, never
    /// replaced by the default.
    pub fn set_search_type_str(&mut self, search_type: &str) -> Result<&mut Self> {
        let parsed: SearchType = search_type.parse()?;
        self.set_search_type(parsed)
    }

    /// Restore root directory, mask and search type to their defaults.
    pub fn reset(&mut self) -> &mut Self {
        debug!("resetting route finder configuration");
        self.root_dir = self.app_root.clone();
        self.file_name_mask = Box::new(default_mask());
        self.search_type = SearchType::default();
        self
    }

    /// Apply every field present in `settings` through the validating setters.
    pub fn apply_settings(&mut self, settings: &FinderSettings) -> Result<&mut Self> {
        if let Some(root_dir) = &settings.root_dir {
            self.set_root_dir(root_dir)?;
        }
        match (&settings.file_name_pattern, &settings.file_name_glob) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidSetting {
                    key: "fileNameGlob",
                    message: "cannot be combined with fileNamePattern".to_string(),
                }
                .into());
            }
            (Some(pattern), None) => {
                self.set_file_name_pattern(pattern)?;
            }
            (None, Some(glob)) => {
                self.set_file_name_glob(glob)?;
            }
            (None, None) => {}
        }
        if let Some(search_type) = &settings.search_type {
            self.set_search_type_str(search_type)?;
        }
        Ok(self)
    }

    /// Walk the root directory and return the routes that `register` would add.
    pub fn discover(&self) -> Result<Vec<DiscoveredRoute>> {
        let root = self.checked_root_dir()?;
        debug!(
            "searching {} ({}, mask {})",
            root.display(),
            self.search_type,
            self.file_name_mask
        );
        self.search_type.search(root, self.file_name_mask.as_ref())
    }

    /// Discover routes and add each one to `sink`, in traversal order.
    ///
    /// Fails with `MissingDependency` when `sink` is `None`, before any other
    /// check. The whole tree is walked before the first route is added, so a
    /// filesystem error leaves the sink untouched.
    pub fn register<S: RouteSink + ?Sized>(&mut self, sink: Option<&mut S>) -> Result<()> {
        let Some(sink) = sink else {
            return Err(RouteFinderError::MissingDependency("app (router sink)"));
        };

        for entry in self.discover()? {
            debug!("adding route: {}", entry.route());
            sink.add_route(entry.route(), entry.path());
        }

        Ok(())
    }

    fn checked_root_dir(&self) -> Result<&Path> {
        let root = self.root_dir.as_deref().ok_or(ConfigError::RootDirNotSet)?;
        check_root_dir(root)?;
        Ok(root)
    }
}

impl Default for RouteFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RouteFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteFinder")
            .field("app_root", &self.app_root)
            .field("root_dir", &self.root_dir)
            .field("file_name_mask", &self.file_name_mask.to_string())
            .field("search_type", &self.search_type)
            .finish()
    }
}

fn check_root_dir(path: &Path) -> std::result::Result<(), ConfigError> {
    let unreadable = |source: io::Error| ConfigError::RootDirUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(unreadable)?;
    if !metadata.is_dir() {
        return Err(ConfigError::RootDirNotADirectory(path.to_path_buf()));
    }
    fs::read_dir(path).map_err(unreadable)?;
    Ok(())
}
