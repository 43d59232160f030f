//! Filesystem operations on shell-form paths.
//!
//! Every operation accepts shell-form paths, converts them to host form
//! through the [`PathEnv`] it was built with, performs the native call, and
//! converts returned paths back where applicable.
//!
//! # Failure policy
//!
//! - [`Filesystem::copy_tree`] is fail-fast: the first failing entry aborts
//!   the whole copy with [`Error::TreeCopyFailed`](crate::Error::TreeCopyFailed).
//! - [`Filesystem::remove_all`] is best-effort: per-entry failures are logged
//!   and collected in a [`RemoveReport`] while the walk continues.
//!
//! # Examples
//!
//! ```no_run
//! use shellpath::fs::Filesystem;
//!
//! let fs = Filesystem::native();
//! fs.mkdir("/tmp/stage/lib").unwrap();
//! let report = fs.copy_tree("/opt/sdk/lib", "/tmp/stage/lib").unwrap();
//! println!("{} files copied", report.files_copied);
//!
//! let removed = fs.remove_all("/tmp/stage");
//! assert!(removed.is_complete());
//! ```

mod collect;
mod copy;
mod mkdir;
mod platform;
mod query;
mod remove;

use std::path::PathBuf;
use std::sync::Arc;

use crate::logging::{LogSink, Logger};
use crate::path::PathEnv;

pub use copy::CopyReport;
pub use remove::{RemoveFailure, RemoveReport};

/// Handle for filesystem operations.
///
/// Holds the path environment used for conversions and the sink that
/// receives warnings (link conflicts) and recovered errors (removal
/// failures).
#[derive(Clone)]
pub struct Filesystem {
    env: PathEnv,
    log: Arc<dyn LogSink>,
}

impl std::fmt::Debug for Filesystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filesystem").field("env", &self.env).finish_non_exhaustive()
    }
}

impl Filesystem {
    /// Create a handle for the given environment, logging to stderr at the
    /// normal level.
    #[must_use]
    pub fn new(env: PathEnv) -> Self {
        Self {
            env,
            log: Arc::new(Logger::default()),
        }
    }

    /// Create a handle for the platform this crate was compiled for.
    #[must_use]
    pub fn native() -> Self {
        Self::new(PathEnv::native())
    }

    /// Replace the log sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::fs::Filesystem;
    /// use shellpath::MemoryLog;
    /// use std::sync::Arc;
    ///
    /// let log = Arc::new(MemoryLog::new());
    /// let fs = Filesystem::native().with_logger(log.clone());
    /// ```
    #[must_use]
    pub fn with_logger(mut self, log: Arc<dyn LogSink>) -> Self {
        self.log = log;
        self
    }

    /// The path environment used for conversions.
    #[must_use]
    pub fn env(&self) -> PathEnv {
        self.env
    }

    fn host_path(&self, path: &str) -> PathBuf {
        PathBuf::from(self.env.to_host(path))
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::native()
    }
}
