//! Free disk space queries.
//!
//! Every query is a single, blocking call into the OS filesystem statistics
//! facility. Nothing is cached, retried or logged, and no state is shared
//! between calls, so these are safe to call from any number of threads.

mod error;
mod usage;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        use self::unix as sys;
    } else if #[cfg(target_os = "windows")] {
        mod windows;
        use self::windows as sys;
    } else {
        mod other;
        use self::other as sys;
    }
}

use std::path::Path;

pub use error::{QueryError, QueryResult};
pub use usage::Usage;

/// Returns the [`Usage`] of the filesystem that `path` lives on.
pub fn query_usage<P: AsRef<Path>>(path: P) -> QueryResult<Usage> {
    let path = path.as_ref();
    sys::usage(path).map_err(|err| QueryError::query_failed(path, err))
}

/// Returns the number of bytes available to the calling user on the
/// filesystem that `path` lives on.
///
/// This is the filesystem's available block count multiplied by its block
/// size. Space reserved for privileged users is not included.
///
/// ```no_run
/// let free = diskspace::disk::query_free_space("/").unwrap();
/// println!("{free} bytes free");
/// ```
pub fn query_free_space<P: AsRef<Path>>(path: P) -> QueryResult<u64> {
    query_usage(path).map(|usage| usage.available())
}

/// Like [`query_usage`], but treats `path` as the location of a file (which
/// need not exist yet) and queries the directory that would contain it.
pub fn query_usage_for_file<P: AsRef<Path>>(path: P) -> QueryResult<Usage> {
    query_usage(containing_dir(path.as_ref()))
}

/// Like [`query_free_space`], but treats `path` as the location of a file
/// (which need not exist yet) and queries the directory that would contain it.
pub fn query_free_space_for_file<P: AsRef<Path>>(path: P) -> QueryResult<u64> {
    query_usage_for_file(path).map(|usage| usage.available())
}

/// Returns the directory containing `path`. A bare file name resolves to the
/// current directory, and a root resolves to itself.
fn containing_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => path,
    }
}
