//! Lexical normalization and absolute-path resolution.
//!
//! This module provides:
//! - Resolution of `.` and `..` components on shell-form strings
//! - Conversion of relative paths to absolute using the working directory

use std::env;

use crate::error::{Error, Result};
use crate::path::types::PathEnv;

impl PathEnv {
    /// Length of the root prefix of a shell-form path.
    ///
    /// `/` on every host; on a back-slash-native host a drive (`/c` or `/c/`)
    /// is part of the root so `..` can never climb above it.
    fn root_len(&self, path: &str) -> usize {
        let b = path.as_bytes();
        if b.first() != Some(&b'/') {
            return 0;
        }
        if self.family().is_backslash_native()
            && b.len() >= 2
            && b[1].is_ascii_alphabetic()
            && (b.len() == 2 || b[2] == b'/')
        {
            return b.len().min(3);
        }
        1
    }

    /// Resolve `.` and `..` components of a shell-form path lexically.
    ///
    /// `..` at the root of an absolute path is dropped, as the native
    /// normalizer does. Leading `..` of a relative path are kept. An empty
    /// relative result becomes `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let env = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(env.resolve_components("/a/./b/../c"), "/a/c");
    /// assert_eq!(env.resolve_components("/a/../../c"), "/c");
    /// assert_eq!(env.resolve_components("../x/./y/.."), "../x");
    /// ```
    #[must_use]
    pub fn resolve_components(&self, path: &str) -> String {
        let path = self.to_shell(path);
        let root_len = self.root_len(&path);
        let (root, rest) = path.split_at(root_len);
        let mut parts: Vec<&str> = Vec::new();

        for component in rest.split('/') {
            match component {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    // Can't go above the root of an absolute path.
                    _ if !root.is_empty() => {}
                    _ => parts.push(".."),
                },
                c => parts.push(c),
            }
        }

        let joined = parts.join("/");
        if root.is_empty() {
            if joined.is_empty() {
                ".".to_string()
            } else {
                joined
            }
        } else if root.ends_with('/') || joined.is_empty() {
            format!("{root}{joined}")
        } else {
            format!("{root}/{joined}")
        }
    }

    /// Resolve a path to an absolute shell-form path.
    ///
    /// Relative paths are joined to the process working directory, then `.`
    /// and `..` are resolved lexically (symlinks are not followed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirUnavailable`] if the path is relative and
    /// the working directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let env = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(env.abspath("/a/./b/../c").unwrap(), "/a/c");
    /// assert!(env.abspath("relative").unwrap().starts_with('/'));
    /// ```
    pub fn abspath(&self, path: &str) -> Result<String> {
        let shell = self.to_shell(path);
        let absolute = if self.is_absolute(&shell) {
            shell
        } else {
            let cwd = env::current_dir().map_err(|source| Error::CurrentDirUnavailable { source })?;
            let cwd = self.to_shell(&cwd.to_string_lossy());
            self.join(&cwd, &[shell.as_str()])
        };
        Ok(self.resolve_components(&absolute))
    }
}
