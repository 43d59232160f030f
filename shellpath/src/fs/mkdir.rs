//! Directory creation.

use std::fs;

use super::Filesystem;
use crate::error::{Error, Result};

impl Filesystem {
    /// Create a directory and any missing parents.
    ///
    /// Succeeds silently when the directory already exists.
    ///
    /// # Errors
    ///
    /// - [`Error::PathConflict`] if the path exists and is not a directory.
    /// - [`Error::DirectoryCreationFailed`] if the OS refuses to create it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shellpath::fs::Filesystem;
    ///
    /// let fs = Filesystem::native();
    /// fs.mkdir("/tmp/build/obj/arm").unwrap();
    /// fs.mkdir("/tmp/build/obj/arm").unwrap(); // no-op
    /// ```
    pub fn mkdir(&self, path: &str) -> Result<()> {
        let shell = self.env.to_shell(path);
        let host = self.host_path(&shell);

        match fs::metadata(&host) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(Error::PathConflict { path: shell }),
            Err(_) => {
                log::debug!("creating directory {}", host.display());
                fs::create_dir_all(&host)
                    .map_err(|source| Error::DirectoryCreationFailed { path: shell, source })
            }
        }
    }
}
