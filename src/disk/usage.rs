/// Block statistics for the filesystem a path lives on.
///
/// Every count is widened to [`u64`] on construction, so byte values derived
/// from them never truncate on targets with narrower native fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    available_blocks: u64,
    free_blocks: u64,
    total_blocks: u64,
    block_size: u64,
}

impl Usage {
    pub(crate) fn new(
        available_blocks: u64, free_blocks: u64, total_blocks: u64, block_size: u64,
    ) -> Self {
        Self {
            available_blocks,
            free_blocks,
            total_blocks,
            block_size,
        }
    }

    /// Returns the number of blocks an unprivileged user may still consume.
    #[inline]
    pub fn available_blocks(&self) -> u64 {
        self.available_blocks
    }

    /// Returns the number of free blocks, including any reserved for root.
    #[inline]
    pub fn free_blocks(&self) -> u64 {
        self.free_blocks
    }

    #[inline]
    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// Returns the size of one block in bytes.
    #[inline]
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Returns the total number of bytes on the filesystem.
    pub fn total(&self) -> u64 {
        self.total_blocks.saturating_mul(self.block_size)
    }

    /// Returns the number of free bytes, including space reserved for root.
    /// Note this is not necessarily the same as [`Usage::available`].
    pub fn free(&self) -> u64 {
        self.free_blocks.saturating_mul(self.block_size)
    }

    /// Returns the number of bytes available to the calling user. This is the
    /// value reported by [`query_free_space`](crate::disk::query_free_space).
    pub fn available(&self) -> u64 {
        self.available_blocks.saturating_mul(self.block_size)
    }
}

// Note that x86 returns `u32` values while x86-64 returns `u64`s, so we convert
// everything to `u64` for consistency.
#[cfg(unix)]
#[allow(clippy::useless_conversion)]
impl From<libc::statvfs> for Usage {
    fn from(vfs: libc::statvfs) -> Self {
        // Some older systems leave the fragment size unset.
        let block_size = if vfs.f_frsize != 0 {
            u64::from(vfs.f_frsize)
        } else {
            u64::from(vfs.f_bsize)
        };

        Self::new(
            u64::from(vfs.f_bavail),
            u64::from(vfs.f_bfree),
            u64::from(vfs.f_blocks),
            block_size,
        )
    }
}
