//! Component helpers: basename, dirname, extension splitting.
//!
//! Each helper converts to host form, applies the host family's native split
//! rules, and converts the result back to shell form. The native rules are
//! implemented on strings rather than through `std::path` so a `PathEnv` for
//! either family behaves the same on every build target.

use crate::path::types::{HostFamily, PathEnv};

/// Split a host-form path into drive and remainder.
///
/// Only the back-slash-native family has drives; the drive keeps its colon.
fn split_drive(family: HostFamily, path: &str) -> (&str, &str) {
    let b = path.as_bytes();
    if family.is_backslash_native() && b.len() >= 2 && b[1] == b':' && b[0].is_ascii() {
        path.split_at(2)
    } else {
        ("", path)
    }
}

/// Split a host-form path into `(head, tail)` with native semantics.
///
/// `tail` is everything after the last separator. Trailing separators are
/// stripped from `head` unless `head` consists only of separators.
fn split_host(family: HostFamily, path: &str) -> (String, String) {
    let (drive, rest) = split_drive(family, path);
    let cut = rest
        .char_indices()
        .filter(|&(_, c)| family.is_separator(c))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let (head, tail) = rest.split_at(cut);
    let trimmed = head.trim_end_matches(|c: char| family.is_separator(c));
    let head = if trimmed.is_empty() { head } else { trimmed };
    (format!("{drive}{head}"), tail.to_string())
}

/// Split a host-form path at the extension of its final component.
fn split_ext_host(family: HostFamily, path: &str) -> (String, String) {
    let name_start = path
        .char_indices()
        .filter(|&(_, c)| family.is_separator(c))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let name = &path[name_start..];
    if let Some(dot) = name.rfind('.') {
        // A name made only of leading dots up to here has no extension.
        if name[..dot].chars().any(|c| c != '.') {
            let at = name_start + dot;
            return (path[..at].to_string(), path[at..].to_string());
        }
    }
    (path.to_string(), String::new())
}

impl PathEnv {
    /// Final component of a path, in shell form.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let env = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(env.basename("/as/sd/df/fg/me.txt"), "me.txt");
    /// assert_eq!(env.basename("/as/sd/"), "");
    /// ```
    #[must_use]
    pub fn basename(&self, path: &str) -> String {
        let host = self.to_host(path);
        let (_, tail) = split_host(self.family(), &host);
        self.to_shell(&tail)
    }

    /// Everything but the final component of a path, in shell form.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let posix = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(posix.dirname("/as/sd/df/fg/me.txt"), "/as/sd/df/fg");
    ///
    /// let windows = PathEnv::new(HostFamily::Windows);
    /// assert_eq!(windows.dirname("x:/sd/df/fg/me.txt"), "/x/sd/df/fg");
    /// ```
    #[must_use]
    pub fn dirname(&self, path: &str) -> String {
        let host = self.to_host(path);
        let (head, _) = split_host(self.family(), &host);
        self.to_shell(&head)
    }

    /// Split a path into `(root, extension)`.
    ///
    /// The extension includes its leading dot, or is empty. A leading dot in
    /// the final component does not start an extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::{HostFamily, PathEnv};
    ///
    /// let env = PathEnv::new(HostFamily::Posix);
    /// assert_eq!(env.splitext("/src/main.c"), ("/src/main".to_string(), ".c".to_string()));
    /// assert_eq!(env.splitext("/home/.profile"), ("/home/.profile".to_string(), String::new()));
    /// ```
    #[must_use]
    pub fn splitext(&self, path: &str) -> (String, String) {
        let host = self.to_host(path);
        let (root, ext) = split_ext_host(self.family(), &host);
        (self.to_shell(&root), ext)
    }
}
