//! Shell form <-> host form conversion.
//!
//! Shell form uses `/` as its only separator and never contains `//`. On a
//! back-slash-native host a drive is written `/c/...` in shell form and
//! `c:\...` in host form.

use crate::path::types::PathEnv;

/// Replace every run of `/` with a single `/`.
///
/// # Examples
///
/// ```
/// use shellpath::path::convert::collapse_separators;
///
/// assert_eq!(collapse_separators("//a/b//c/d-e-f"), "/a/b/c/d-e-f");
/// assert_eq!(collapse_separators("a/b"), "a/b");
/// ```
#[must_use]
pub fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

/// The drive letter of a shell-form `/X/...` path.
fn shell_drive(path: &str) -> Option<char> {
    let b = path.as_bytes();
    if b.len() > 2 && b[0] == b'/' && b[2] == b'/' && b[1].is_ascii_alphabetic() {
        Some(char::from(b[1]))
    } else {
        None
    }
}

/// The drive letter of a host-form `X:...` path.
fn host_drive(path: &str) -> Option<char> {
    let b = path.as_bytes();
    if b.len() > 1 && b[1] == b':' && b[0].is_ascii_alphabetic() {
        Some(char::from(b[0]))
    } else {
        None
    }
}

impl PathEnv {
    /// Convert a shell-form path to the host's native form.
    ///
    /// Repeated separators are always collapsed. On a back-slash-native host,
    /// `/<letter>/rest` becomes `<letter>:\rest`; every other path keeps its
    /// forward slashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let windows = PathEnv::new(HostFamily::Windows);
    /// assert_eq!(windows.to_host("/c/temp"), "c:\\temp");
    /// assert_eq!(windows.to_host("//a/b//c/d-e-f"), "a:\\b\\c\\d-e-f");
    /// assert_eq!(windows.to_host("/temp/x"), "/temp/x");
    ///
    /// let posix = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(posix.to_host("//a/b//c"), "/a/b/c");
    /// ```
    #[must_use]
    pub fn to_host(&self, path: &str) -> String {
        let path = collapse_separators(path);
        if !self.family().is_backslash_native() {
            return path;
        }
        match shell_drive(&path) {
            Some(drive) => format!("{drive}:{}", &path[2..]).replace('/', "\\"),
            None => path,
        }
    }

    /// Convert a host-form path to shell form.
    ///
    /// On a back-slash-native host, `<letter>:rest` becomes `/<letter>rest`
    /// and back-slashes become forward slashes. Repeated separators are
    /// collapsed afterwards on every host.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let windows = PathEnv::new(HostFamily::Windows);
    /// assert_eq!(windows.to_shell("c:\\temp"), "/c/temp");
    /// assert_eq!(windows.to_shell("w:/x/y/z"), "/w/x/y/z");
    ///
    /// let posix = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(posix.to_shell("/w/x//y/z"), "/w/x/y/z");
    /// ```
    #[must_use]
    pub fn to_shell(&self, path: &str) -> String {
        if !self.family().is_backslash_native() {
            return collapse_separators(path);
        }
        let rewritten = match host_drive(path) {
            Some(drive) => format!("/{drive}{}", &path[2..]),
            None => path.to_string(),
        };
        collapse_separators(&rewritten.replace('\\', "/"))
    }

    /// [`to_host`](Self::to_host) with absent paths passed through.
    #[must_use]
    pub fn to_host_opt(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| self.to_host(p))
    }

    /// [`to_shell`](Self::to_shell) with absent paths passed through.
    #[must_use]
    pub fn to_shell_opt(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| self.to_shell(p))
    }
}
