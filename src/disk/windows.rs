//! Disk usage for Windows, based on `GetDiskFreeSpaceExW`.

use std::{io, os::windows::prelude::OsStrExt, path::Path};

use ::windows::{core::PCWSTR, Win32::Storage::FileSystem::GetDiskFreeSpaceExW};

use super::Usage;

/// Returns the [`Usage`] of the volume `path` lives on.
///
/// Windows reports byte counts directly, so the returned usage has a block
/// size of one byte.
pub(super) fn usage(path: &Path) -> io::Result<Usage> {
    let wide_path = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect::<Vec<_>>();

    if wide_path[..wide_path.len() - 1].contains(&0) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path contains a nul character",
        ));
    }

    let mut available = 0u64;
    let mut total = 0u64;
    let mut free = 0u64;

    // SAFETY: API call, `wide_path` is nul-terminated and the out pointers are
    // valid for writes.
    unsafe {
        GetDiskFreeSpaceExW(
            PCWSTR(wide_path.as_ptr()),
            Some(&mut available as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free as *mut u64),
        )
    }
    .map_err(|_| io::Error::last_os_error())?;

    Ok(Usage::new(available, free, total, 1))
}
