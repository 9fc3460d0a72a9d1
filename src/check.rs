//! Checks whether a directory has room for an install or an update.

use std::path::Path;

use thiserror::Error;

use crate::disk::{self, QueryError};

/// Extra headroom demanded on top of the payload itself: 20 MiB.
pub const DEFAULT_RESERVE: u64 = 20 * 1024 * 1024;

/// What is about to be written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskRequirement {
    /// A full content package of `size` bytes.
    Content { size: u64 },
    /// A diff package of `size` bytes, which rewrites files no larger than
    /// `biggest_file_size` bytes.
    Diff { size: u64, biggest_file_size: u64 },
}

impl DiskRequirement {
    /// Returns how many bytes must be free before writing this, with `reserve`
    /// bytes of headroom.
    ///
    /// The package is counted twice, once for the download and once for its
    /// unpacked form. A diff additionally needs room for a temporary copy of
    /// the biggest file it patches.
    pub fn required_bytes(&self, reserve: u64) -> u64 {
        match *self {
            DiskRequirement::Content { size } => size.saturating_mul(2).saturating_add(reserve),
            DiskRequirement::Diff {
                size,
                biggest_file_size,
            } => size
                .saturating_mul(2)
                .saturating_add(biggest_file_size)
                .saturating_add(reserve),
        }
    }
}

/// A successful [`check_disk_space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sufficient {
    pub available: u64,
    pub required: u64,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(
        "not enough disk space to install or update, available free space {available} < required disk space {required}"
    )]
    NotEnoughDiskSpace { available: u64, required: u64 },
}

/// Checks that the filesystem holding the directory `path` has enough space
/// available for `requirement`, plus `reserve` bytes.
pub fn check_disk_space<P: AsRef<Path>>(
    path: P, requirement: DiskRequirement, reserve: u64,
) -> Result<Sufficient, CheckError> {
    let available = disk::query_free_space(path)?;

    check_available(available, requirement, reserve)
}

/// Checks an already-known number of `available` bytes against
/// `requirement`, plus `reserve` bytes.
pub fn check_available(
    available: u64, requirement: DiskRequirement, reserve: u64,
) -> Result<Sufficient, CheckError> {
    let required = requirement.required_bytes(reserve);

    if available >= required {
        crate::debug!("Available free space {available} >= required disk space {required}");
        Ok(Sufficient {
            available,
            required,
        })
    } else {
        crate::debug!("Available free space {available} < required disk space {required}");
        Err(CheckError::NotEnoughDiskSpace {
            available,
            required,
        })
    }
}
