#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shellpath
//!
//! Shell-form path conversion and filesystem primitives for build tooling.
//!
//! Build scripts handle paths in one canonical *shell form*: `/` separated,
//! no doubled separators, with Windows drives written as `/c/...`. This
//! library converts between that form and the *host form* the operating
//! system expects, and provides the filesystem operations a build needs
//! (directory creation, glob collection, tree copy and tree removal) on
//! shell-form paths.
//!
//! ## Core Types
//!
//! - [`PathEnv`] and [`HostFamily`]: path conversion and component helpers
//! - [`Filesystem`](fs::Filesystem): filesystem operations
//! - [`CopyReport`](fs::CopyReport) and [`RemoveReport`](fs::RemoveReport):
//!   tree operation outcomes
//! - [`Error`] and [`Result`]: Error handling types
//! - [`LogSink`], [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//!
//! ## Examples
//!
//! ```
//! use shellpath::{HostFamily, PathEnv};
//!
//! let windows = PathEnv::new(HostFamily::Windows);
//! assert_eq!(windows.to_host("/c/temp"), "c:\\temp");
//! assert_eq!(windows.to_shell("c:\\temp"), "/c/temp");
//!
//! let posix = PathEnv::new(HostFamily::Posix);
//! assert_eq!(posix.join("/a", &["b", "/c/d"]), "/a/b/c/d");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, LinkConflict, Result};
pub use fs::{CopyReport, Filesystem, RemoveFailure, RemoveReport};
pub use logging::{init_logger, LogLevel, LogSink, Logger, MemoryLog, Severity};
pub use path::{HostFamily, PathEnv};
