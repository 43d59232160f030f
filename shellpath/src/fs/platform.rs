//! Platform-specific primitives used by tree copy and removal.

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// Windows `ERROR_NOT_SUPPORTED`.
#[cfg(windows)]
const ERROR_NOT_SUPPORTED: i32 = 50;

/// Create a symbolic link at `link` pointing at `target` verbatim.
///
/// `source_link` is the link being mirrored; on Windows it decides whether a
/// directory or a file link is created.
pub(crate) fn symlink(target: &Path, source_link: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        let _ = source_link;
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        let points_at_dir = fs::metadata(source_link).is_ok_and(|m| m.is_dir());
        if points_at_dir {
            std::os::windows::fs::symlink_dir(target, link)
        } else {
            std::os::windows::fs::symlink_file(target, link)
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = (target, source_link, link);
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symbolic links are not supported on this platform",
        ))
    }
}

/// Remove a symbolic link without following it.
pub(crate) fn remove_link(link: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::remove_file(link) {
            Ok(()) => Ok(()),
            // Directory symlinks and junctions need remove_dir.
            Err(remove_file_err) => fs::remove_dir(link).map_err(|_| remove_file_err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::remove_file(link)
    }
}

/// Copy access and modification times from one entry to another.
fn copy_times(meta: &fs::Metadata, dst: &Path) -> io::Result<()> {
    let atime = FileTime::from_last_access_time(meta);
    let mtime = FileTime::from_last_modification_time(meta);
    filetime::set_file_times(dst, atime, mtime)
}

/// Copy permission bits and timestamps from `src` onto `dst`.
pub(crate) fn copy_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    fs::set_permissions(dst, meta.permissions())?;
    copy_times(&meta, dst)
}

/// Copy a regular file's content, permission bits and timestamps,
/// overwriting the destination. Returns the number of bytes copied.
///
/// A read-only regular file left at `dst` by an earlier copy is replaced.
pub(crate) fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let bytes = match fs::copy(src, dst) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied && is_regular_file(dst) => {
            log::debug!("replacing unwritable {}: {e}", dst.display());
            fs::remove_file(dst).map_err(|_| e)?;
            fs::copy(src, dst)?
        }
        Err(e) => return Err(e),
    };
    copy_times(&fs::metadata(src)?, dst)?;
    Ok(bytes)
}

fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_file())
}

/// Whether an error means the operation is not supported by the filesystem.
pub(crate) fn is_unsupported(err: &io::Error) -> bool {
    #[cfg(windows)]
    {
        if err.raw_os_error() == Some(ERROR_NOT_SUPPORTED) {
            return true;
        }
    }
    err.kind() == io::ErrorKind::Unsupported
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_preserves_mtime() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let dst = dir.path().join("dst.bin");
        fs::write(&src, b"payload").unwrap();
        let stamp = FileTime::from_unix_time(1_000_000_000, 0);
        filetime::set_file_mtime(&src, stamp).unwrap();

        assert_eq!(copy_file(&src, &dst).unwrap(), 7);
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
        let copied = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(copied, stamp);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_over_read_only_copy() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let src = dir.path().join("ro.h");
        let dst = dir.path().join("copy.h");
        fs::write(&src, b"v1").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o444)).unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(fs::metadata(&dst).unwrap().permissions().mode() & 0o777, 0o444);

        fs::set_permissions(&src, fs::Permissions::from_mode(0o644)).unwrap();
        fs::write(&src, b"version2").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o444)).unwrap();

        assert_eq!(copy_file(&src, &dst).unwrap(), 8);
        assert_eq!(fs::read(&dst).unwrap(), b"version2");
        assert_eq!(fs::metadata(&dst).unwrap().permissions().mode() & 0o777, 0o444);
    }

    #[test]
    fn test_copy_metadata_onto_directory() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a");
        let dst = dir.path().join("b");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();
        let stamp = FileTime::from_unix_time(1_200_000_000, 0);
        filetime::set_file_times(&src, stamp, stamp).unwrap();

        copy_metadata(&src, &dst).unwrap();
        let copied = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(copied, stamp);
    }

    #[test]
    fn test_copy_metadata_missing_source() {
        let dir = tempdir().unwrap();
        let err = copy_metadata(&dir.path().join("missing"), dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_is_unsupported() {
        assert!(is_unsupported(&io::Error::from(io::ErrorKind::Unsupported)));
        assert!(!is_unsupported(&io::Error::from(io::ErrorKind::PermissionDenied)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_and_remove_link() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        symlink(Path::new("../somewhere"), &dir.path().join("unused"), &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), Path::new("../somewhere"));

        remove_link(&link).unwrap();
        assert!(fs::symlink_metadata(&link).is_err());
    }
}
