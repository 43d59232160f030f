//! Recursive tree copy that mirrors symbolic links.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{platform, Filesystem};
use crate::error::{Error, LinkConflict, Result};
use crate::path::HostFamily;

/// Outcome of [`Filesystem::copy_tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Regular files copied (including overwrites).
    pub files_copied: usize,
    /// Destination directories that had to be created.
    pub directories_created: usize,
    /// Links created or recreated in the destination.
    pub links_created: usize,
    /// Destination links already pointing at the right target.
    pub links_unchanged: usize,
    /// Conflicting destination entries that were replaced.
    pub conflicts: Vec<LinkConflict>,
}

impl CopyReport {
    /// Whether the copy ran without replacing any conflicting entry.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

impl Filesystem {
    /// Recursively copy the contents of `src` into `dst`.
    ///
    /// `dst` is created if it is not already a directory; its parent must
    /// exist. Regular files are copied with their permission bits and
    /// timestamps, overwriting the destination. Symbolic links are recreated
    /// with their verbatim target; a destination link with a different
    /// target, or a destination entry that is not a link, is replaced with a
    /// warning and recorded in [`CopyReport::conflicts`]. Finally the
    /// metadata of each source directory is copied onto its destination.
    ///
    /// A missing `src` copies nothing.
    ///
    /// # Errors
    ///
    /// Stops at the first failing entry and returns
    /// [`Error::TreeCopyFailed`] naming the entry pair. Entries handled
    /// before the failure stay in place.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shellpath::fs::Filesystem;
    ///
    /// let fs = Filesystem::native();
    /// let report = fs.copy_tree("/opt/sdk/include", "/tmp/stage/include").unwrap();
    /// for conflict in &report.conflicts {
    ///     println!("replaced {}", conflict.path());
    /// }
    /// ```
    pub fn copy_tree(&self, src: &str, dst: &str) -> Result<CopyReport> {
        let mut report = CopyReport::default();
        self.copy_tree_into(&self.host_path(src), &self.host_path(dst), &mut report)?;
        Ok(report)
    }

    fn copy_tree_into(&self, src: &Path, dst: &Path, report: &mut CopyReport) -> Result<()> {
        let src_exists = src.exists();
        let names = if src_exists {
            sorted_entries(src).map_err(|e| self.copy_failed(src, dst, e))?
        } else {
            log::debug!("copy source missing, nothing to copy: {}", src.display());
            Vec::new()
        };

        if !dst.is_dir() {
            fs::create_dir(dst).map_err(|e| self.copy_failed(src, dst, e))?;
            report.directories_created += 1;
        }

        for name in names {
            let src_entry = src.join(&name);
            let dst_entry = dst.join(&name);
            let file_type = fs::symlink_metadata(&src_entry)
                .map_err(|e| self.copy_failed(&src_entry, &dst_entry, e))?
                .file_type();

            if file_type.is_symlink() {
                self.sync_link(&src_entry, &dst_entry, report)
                    .map_err(|e| self.copy_failed(&src_entry, &dst_entry, e))?;
            } else if file_type.is_dir() {
                self.copy_tree_into(&src_entry, &dst_entry, report)?;
            } else if file_type.is_file() {
                platform::copy_file(&src_entry, &dst_entry)
                    .map_err(|e| self.copy_failed(&src_entry, &dst_entry, e))?;
                report.files_copied += 1;
            } else {
                log::debug!("skipping special file: {}", src_entry.display());
            }
        }

        if src_exists {
            if let Err(e) = platform::copy_metadata(src, dst) {
                if tolerates_metadata_error(self.env.family(), &e) {
                    log::debug!("metadata copy unsupported for {}: {e}", dst.display());
                } else {
                    return Err(self.copy_failed(src, dst, e));
                }
            }
        }

        Ok(())
    }

    /// Make `dst` a link with the same target as the link `src`.
    fn sync_link(&self, src: &Path, dst: &Path, report: &mut CopyReport) -> io::Result<()> {
        let target = fs::read_link(src)?;

        match fs::symlink_metadata(dst) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let existing = fs::read_link(dst)?;
                if existing == target {
                    report.links_unchanged += 1;
                    return Ok(());
                }
                self.note_conflict(
                    report,
                    LinkConflict::TargetMismatch {
                        path: self.shell_of(dst),
                        existing: existing.to_string_lossy().into_owned(),
                        wanted: target.to_string_lossy().into_owned(),
                    },
                );
                platform::remove_link(dst)?;
            }
            Ok(meta) => {
                self.note_conflict(
                    report,
                    LinkConflict::NotALink {
                        path: self.shell_of(dst),
                    },
                );
                if meta.is_dir() {
                    fs::remove_dir_all(dst)?;
                } else {
                    fs::remove_file(dst)?;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        platform::symlink(&target, src, dst)?;
        report.links_created += 1;
        Ok(())
    }

    fn note_conflict(&self, report: &mut CopyReport, conflict: LinkConflict) {
        self.log.warn(&conflict.to_string());
        report.conflicts.push(conflict);
    }

    fn shell_of(&self, host: &Path) -> String {
        self.env.to_shell(&host.to_string_lossy())
    }

    fn copy_failed(&self, src: &Path, dst: &Path, source: io::Error) -> Error {
        Error::TreeCopyFailed {
            src: self.shell_of(src),
            dst: self.shell_of(dst),
            source,
        }
    }
}

/// Whether a failed directory metadata copy can be ignored. Only
/// back-slash-native hosts may lack support for it.
fn tolerates_metadata_error(family: HostFamily, err: &io::Error) -> bool {
    family.is_backslash_native() && platform::is_unsupported(err)
}

/// Entry names of a directory, sorted.
fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| PathBuf::from(e.file_name())))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
