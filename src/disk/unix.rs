//! Disk usage for Unix-like systems, based on `statvfs(3)`.

use std::{ffi::CString, io, mem, os::unix::ffi::OsStrExt, path::Path};

use super::Usage;

/// Returns the [`Usage`] of the filesystem `path` lives on.
pub(super) fn usage(path: &Path) -> io::Result<Usage> {
    let path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains a nul byte"))?;

    let mut vfs = mem::MaybeUninit::<libc::statvfs>::uninit();

    // SAFETY: libc call, `path` is a valid C string and `vfs` is a valid pointer
    // to write to.
    let result = unsafe { libc::statvfs(path.as_ptr(), vfs.as_mut_ptr()) };

    if result == 0 {
        // SAFETY: If result is 0, it succeeded, and vfs should be populated.
        let vfs = unsafe { vfs.assume_init() };
        Ok(Usage::from(vfs))
    } else {
        Err(io::Error::last_os_error())
    }
}
