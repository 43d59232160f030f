//! Joining and expanding shell-form paths.

use crate::path::types::PathEnv;

impl PathEnv {
    /// Join segments onto a base path, producing shell form.
    ///
    /// Each segment is converted to shell form and appended with a single
    /// `/`. Absolute segments do not reset the path. Empty segments are
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let env = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(env.join("/a", &["b", "/c/d"]), "/a/b/c/d");
    /// assert_eq!(env.join("", &["x", "y"]), "x/y");
    ///
    /// let windows = PathEnv::new(HostFamily::Windows);
    /// assert_eq!(windows.join("s:/d/", &["/g", "/tyty/fgfg"]), "/s/d/g/tyty/fgfg");
    /// ```
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, base: &str, segments: &[S]) -> String {
        let mut path = self.to_shell(base);
        for segment in segments {
            let segment = self.to_shell(segment.as_ref());
            if segment.is_empty() {
                continue;
            }
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(&segment);
        }
        self.to_shell(&path)
    }

    /// Join `name` onto each of `paths`, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let env = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(
    ///     env.expand("lib", &["/usr", "/opt/local/"]),
    ///     vec!["/usr/lib".to_string(), "/opt/local/lib".to_string()]
    /// );
    /// ```
    #[must_use]
    pub fn expand<S: AsRef<str>>(&self, name: &str, paths: &[S]) -> Vec<String> {
        paths
            .iter()
            .map(|p| self.join(p.as_ref(), &[name]))
            .collect()
    }

    /// Whether a shell-form path is absolute.
    ///
    /// This is a string check; the filesystem is not consulted.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
    }
}
