//! Best-effort recursive removal.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use super::{platform, Filesystem};

/// One entry that could not be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFailure {
    /// The entry, in shell form.
    pub path: String,
    /// The primitive that failed (`lstat`, `read_dir`, `rmdir`, `unlink`).
    pub operation: &'static str,
    /// The kind of the underlying OS error.
    pub kind: io::ErrorKind,
    /// The underlying OS error message.
    pub message: String,
}

impl fmt::Display for RemoveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "removeall error: ({}: {}) {}", self.operation, self.message, self.path)
    }
}

/// Outcome of [`Filesystem::remove_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    /// Number of entries (files, links and directories) removed.
    pub removed: usize,
    /// Entries that could not be removed, in walk order.
    pub failures: Vec<RemoveFailure>,
}

impl RemoveReport {
    /// Whether every entry was removed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Filesystem {
    /// Recursively delete a directory tree, continuing past failures.
    ///
    /// Every entry that cannot be removed is logged at error level and
    /// recorded in the returned report; the walk carries on with the
    /// remaining entries. The operation is not atomic: after a failure the
    /// tree is partially removed. Symbolic links inside the tree are
    /// unlinked, never followed, and a symbolic link given as the root is
    /// refused.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shellpath::fs::Filesystem;
    ///
    /// let fs = Filesystem::native();
    /// let report = fs.remove_all("/tmp/build-tree");
    /// for failure in &report.failures {
    ///     eprintln!("left behind: {}", failure.path);
    /// }
    /// ```
    #[must_use]
    pub fn remove_all(&self, path: &str) -> RemoveReport {
        let mut report = RemoveReport::default();
        let host = self.host_path(path);

        match fs::symlink_metadata(&host) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let err = io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "cannot remove a symbolic link as a tree",
                );
                self.record_failure(&mut report, &host, "islink", &err);
            }
            Ok(meta) if meta.is_dir() => self.remove_dir_entries(&host, &mut report),
            Ok(_) => {
                let err = io::Error::new(io::ErrorKind::InvalidInput, "not a directory");
                self.record_failure(&mut report, &host, "read_dir", &err);
            }
            Err(err) => self.record_failure(&mut report, &host, "lstat", &err),
        }

        report
    }

    /// Remove the contents of `dir`, then `dir` itself.
    fn remove_dir_entries(&self, dir: &Path, report: &mut RemoveReport) {
        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(entry) => self.remove_entry(&entry.path(), report),
                        Err(err) => self.record_failure(report, dir, "read_dir", &err),
                    }
                }
            }
            Err(err) => self.record_failure(report, dir, "read_dir", &err),
        }

        match fs::remove_dir(dir) {
            Ok(()) => report.removed += 1,
            Err(err) => self.record_failure(report, dir, "rmdir", &err),
        }
    }

    fn remove_entry(&self, entry: &Path, report: &mut RemoveReport) {
        let meta = match fs::symlink_metadata(entry) {
            Ok(meta) => meta,
            Err(err) => {
                self.record_failure(report, entry, "lstat", &err);
                return;
            }
        };

        if meta.is_dir() {
            self.remove_dir_entries(entry, report);
            return;
        }

        let removed = if meta.file_type().is_symlink() {
            platform::remove_link(entry)
        } else {
            fs::remove_file(entry)
        };
        match removed {
            Ok(()) => report.removed += 1,
            Err(err) => self.record_failure(report, entry, "unlink", &err),
        }
    }

    fn record_failure(
        &self,
        report: &mut RemoveReport,
        host: &Path,
        operation: &'static str,
        err: &io::Error,
    ) {
        let failure = RemoveFailure {
            path: self.env.to_shell(&host.to_string_lossy()),
            operation,
            kind: err.kind(),
            message: err.to_string(),
        };
        self.log.error(&failure.to_string());
        report.failures.push(failure);
    }
}
