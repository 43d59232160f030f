//! Glob-based file collection.

use glob::MatchOptions;

use super::Filesystem;
use crate::error::{Error, Result};

/// Separator between search roots in the directory part of a pattern.
pub const SEARCH_ROOT_SEPARATOR: char = ':';

impl Filesystem {
    /// Collect the files matching a pattern.
    ///
    /// If the pattern contains `*` or `?`, its directory part may list several
    /// search roots separated by `:`; the final component is matched in each
    /// root in turn (an empty final component matches everything). Results
    /// are host-form paths, sorted; matches from overlapping roots are not
    /// de-duplicated. Leading dots must be matched literally.
    ///
    /// A pattern without wildcards is returned as a single host-form path
    /// whether or not it exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a root's pattern cannot be
    /// compiled (e.g. an unclosed `[`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shellpath::fs::Filesystem;
    ///
    /// let fs = Filesystem::native();
    /// let sources = fs.collect_files("/src/kernel:/src/drivers/*.c").unwrap();
    /// let literal = fs.collect_files("/src/main.c").unwrap();
    /// assert_eq!(literal, vec!["/src/main.c".to_string()]);
    /// ```
    pub fn collect_files(&self, pattern: &str) -> Result<Vec<String>> {
        let pattern = self.env.to_shell(pattern);
        if !pattern.contains(['*', '?']) {
            return Ok(vec![self.env.to_host(&pattern)]);
        }

        let dir = self.env.dirname(&pattern);
        let mut base = self.env.basename(&pattern);
        if base.is_empty() {
            base = "*".to_string();
        }

        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut files = Vec::new();
        for root in dir.split(SEARCH_ROOT_SEPARATOR) {
            let host_pattern = self.host_join(&self.env.to_host(root), &base);
            let entries = glob::glob_with(&host_pattern, options).map_err(|e| Error::InvalidPattern {
                pattern: host_pattern.clone(),
                reason: e.msg.to_string(),
            })?;
            for entry in entries {
                match entry {
                    Ok(found) => files.push(self.env.to_host(&found.to_string_lossy())),
                    Err(e) => log::debug!("skipping unreadable glob entry: {e}"),
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Join a file name onto a host-form directory using the native separator.
    fn host_join(&self, dir: &str, name: &str) -> String {
        if dir.is_empty() {
            return name.to_string();
        }
        let family = self.env.family();
        if dir.ends_with(|c: char| family.is_separator(c)) {
            format!("{dir}{name}")
        } else if family.is_backslash_native() {
            format!("{dir}\\{name}")
        } else {
            format!("{dir}/{name}")
        }
    }
}
