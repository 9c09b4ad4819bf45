//! Error types for route discovery and registration

use std::io;
use std::path::PathBuf;

use crate::search::SearchType;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteFinderError>;

/// Coarse classification of a [`RouteFinderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The router sink was not supplied.
    MissingDependency,
    /// Root directory, file name mask or search type is invalid.
    InvalidConfiguration,
    /// The filesystem failed while walking the tree.
    FilesystemAccess,
}

/// Errors returned by [`RouteFinder`](crate::RouteFinder) setters and registration.
#[derive(Debug, thiserror::Error)]
pub enum RouteFinderError {
    #[error("route-finder: missing required parameter: {0}")]
    MissingDependency(&'static str),

    #[error("route-finder: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("route-finder: failed to access {}: {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RouteFinderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteFinderError::MissingDependency(_) => ErrorKind::MissingDependency,
            RouteFinderError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            RouteFinderError::FilesystemAccess { .. } => ErrorKind::FilesystemAccess,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RouteFinderError::FilesystemAccess {
            path: path.into(),
            source,
        }
    }
}

/// Invalid configuration detected by a setter or at registration time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("root directory is not defined")]
    RootDirNotSet,

    #[error("root directory {} is not readable: {source}", path.display())]
    RootDirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("root directory {} is not a directory", .0.display())]
    RootDirNotADirectory(PathBuf),

    #[error(
        "invalid search type ({value}), use one of: {}",
        SearchType::VARIANT_NAMES.join(", "),
        value = .0
    )]
    InvalidSearchType(String),

    #[error("invalid file name pattern {pattern:?}: {source}")]
    InvalidFileNamePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid file name glob {pattern:?}: {source}")]
    InvalidGlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid setting {key}: {message}")]
    InvalidSetting { key: &'static str, message: String },
}
