//! Core types for path-form conversion.
//!
//! The host family decides which native syntax the converter targets. It is
//! detected once from the compile target but always travels as a value inside
//! [`PathEnv`], so both behaviors can be exercised side by side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The family of native path syntax used by the host filesystem API.
///
/// # Examples
///
/// ```
/// use shellpath::HostFamily;
///
/// assert_eq!(HostFamily::parse("windows").unwrap(), HostFamily::Windows);
/// assert!(HostFamily::Windows.is_backslash_native());
/// assert!(!HostFamily::Posix.is_backslash_native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostFamily {
    /// Forward-slash separated, single rooted namespace.
    Posix,

    /// Back-slash separated with drive-letter roots (`c:\...`).
    Windows,
}

impl HostFamily {
    /// The family of the platform this crate was compiled for.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether the native separator is `\` and absolute paths start with a
    /// drive letter.
    #[must_use]
    pub const fn is_backslash_native(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Whether `c` separates components in this family's native syntax.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Parses a family name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not `posix` or `windows`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "nt" => Ok(Self::Windows),
            _ => Err(format!("invalid host family: {s}")),
        }
    }
}

impl fmt::Display for HostFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// The path environment every conversion runs in.
///
/// `PathEnv` is a small `Copy` value; construct one per host family you need.
///
/// # Examples
///
/// ```
/// use shellpath::{HostFamily, PathEnv};
///
/// let posix = PathEnv::new(HostFamily::Posix);
/// let windows = PathEnv::new(HostFamily::Windows);
///
/// assert_eq!(posix.to_host("/c/temp"), "/c/temp");
/// assert_eq!(windows.to_host("/c/temp"), "c:\\temp");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathEnv {
    family: HostFamily,
}

impl PathEnv {
    /// Create an environment for an explicit host family.
    #[must_use]
    pub const fn new(family: HostFamily) -> Self {
        Self { family }
    }

    /// Create an environment for the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        Self::new(HostFamily::detect())
    }

    /// The host family of this environment.
    #[must_use]
    pub const fn family(&self) -> HostFamily {
        self.family
    }
}

impl Default for PathEnv {
    fn default() -> Self {
        Self::native()
    }
}
