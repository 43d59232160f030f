//! Existence and type queries.

use faccess::PathExt;

use super::Filesystem;

impl Filesystem {
    /// Whether the path exists (symlinks are followed).
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.host_path(path).exists()
    }

    /// Existence of each path, in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::fs::Filesystem;
    ///
    /// let fs = Filesystem::native();
    /// let found = fs.exists_all(&["/", "/definitely/not/here"]);
    /// assert_eq!(found, vec![true, false]);
    /// ```
    #[must_use]
    pub fn exists_all<S: AsRef<str>>(&self, paths: &[S]) -> Vec<bool> {
        paths.iter().map(|p| self.exists(p.as_ref())).collect()
    }

    /// Whether the path is a directory (symlinks are followed).
    #[must_use]
    pub fn is_dir(&self, path: &str) -> bool {
        self.host_path(path).is_dir()
    }

    /// Whether the path is a regular file (symlinks are followed).
    #[must_use]
    pub fn is_file(&self, path: &str) -> bool {
        self.host_path(path).is_file()
    }

    /// Whether the shell-form path is absolute. Does not touch the disk.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        self.env.is_absolute(path)
    }

    /// Whether the path exists and the current process may write to it.
    ///
    /// Asks the operating system (`access(2)` with `W_OK` on unix), so
    /// ownership and effective ids are taken into account. No write is
    /// attempted.
    #[must_use]
    pub fn is_writable(&self, path: &str) -> bool {
        self.host_path(path).writable()
    }

    /// Whether a path could be written, judged by its nearest existing
    /// ancestor (or the path itself if it exists).
    ///
    /// Returns `false` for an empty path or when no ancestor exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shellpath::fs::Filesystem;
    ///
    /// let fs = Filesystem::native();
    /// // /tmp exists, so a file deep below it is writable if /tmp is.
    /// assert!(fs.is_path_writable("/tmp/not/yet/created.txt"));
    /// ```
    #[must_use]
    pub fn is_path_writable(&self, path: &str) -> bool {
        let mut current = self.env.to_shell(path);
        loop {
            if current.is_empty() {
                return false;
            }
            if self.exists(&current) {
                return self.is_writable(&current);
            }
            let parent = self.env.dirname(&current);
            if parent == current {
                return false;
            }
            current = parent;
        }
    }
}
