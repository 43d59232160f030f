//! Error types for the shellpath library.
//!
//! This module provides the error hierarchy for the filesystem operations,
//! using `thiserror` for ergonomic error handling. Path-form conversion never
//! fails, so only operations that touch the disk (or the process environment)
//! produce these errors.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a shellpath error.
///
/// # Examples
///
/// ```
/// use shellpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/local".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the shellpath library.
///
/// Every variant that refers to a location carries it in shell form, the same
/// form the caller passed in.
#[derive(Debug, Error)]
pub enum Error {
    /// The target exists but has the wrong type (e.g. a file where a
    /// directory was requested).
    #[error("path exists and is not a directory: {path}")]
    PathConflict {
        /// The conflicting path.
        path: String,
    },

    /// A directory (or one of its parents) could not be created.
    #[error("cannot make directory: {path}: {source}")]
    DirectoryCreationFailed {
        /// The directory that was requested.
        path: String,
        /// The underlying OS failure.
        #[source]
        source: io::Error,
    },

    /// Recursive tree copy stopped at the first failing entry.
    #[error("copying tree: {src} -> {dst}: {source}")]
    TreeCopyFailed {
        /// The source entry being copied when the failure happened.
        src: String,
        /// The destination entry.
        dst: String,
        /// The underlying OS failure.
        #[source]
        source: io::Error,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// The process working directory could not be determined.
    #[error("cannot get current directory: {source}")]
    CurrentDirUnavailable {
        /// The underlying OS failure.
        #[source]
        source: io::Error,
    },

    /// A validation error occurred (configuration values, env overrides).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A symbolic-link conflict met while copying a tree.
///
/// Conflicts are warnings: the destination entry is replaced with a link to
/// the source's target and the copy continues.
///
/// # Examples
///
/// ```
/// use shellpath::LinkConflict;
///
/// let conflict = LinkConflict::NotALink { path: "/out/lib/libc.so".to_string() };
/// assert!(conflict.to_string().contains("destination is not a link"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkConflict {
    /// The destination is a link with a different target.
    TargetMismatch {
        /// The destination link.
        path: String,
        /// The target it pointed at before being replaced.
        existing: String,
        /// The source link's target.
        wanted: String,
    },

    /// The destination exists but is not a link.
    NotALink {
        /// The destination entry that was replaced.
        path: String,
    },
}

impl LinkConflict {
    /// The destination path involved.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::TargetMismatch { path, .. } | Self::NotALink { path } => path,
        }
    }
}

impl std::fmt::Display for LinkConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetMismatch {
                path,
                existing,
                wanted,
            } => write!(
                f,
                "copying tree: update of link does not match: {path} -> {existing} (want {wanted})"
            ),
            Self::NotALink { path } => {
                write!(f, "copying tree: destination is not a link: {path}")
            }
        }
    }
}

impl Error {
    /// Check if the error is a type conflict on an existing path.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::Error;
    ///
    /// let err = Error::PathConflict { path: "/tmp/file".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PathConflict { .. })
    }

    /// Check if the error came from a tree copy.
    #[must_use]
    pub fn is_copy_failure(&self) -> bool {
        matches!(self, Self::TreeCopyFailed { .. })
    }

    /// The underlying I/O error kind, when there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::Error;
    /// use std::io;
    ///
    /// let err = Error::DirectoryCreationFailed {
    ///     path: "/root/x".to_string(),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    /// ```
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::DirectoryCreationFailed { source, .. }
            | Self::TreeCopyFailed { source, .. }
            | Self::CurrentDirUnavailable { source }
            | Self::Io(source) => Some(source.kind()),
            _ => None,
        }
    }
}
