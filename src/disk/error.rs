use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// A type alias for the result of a disk space query.
pub type QueryResult<T> = Result<T, QueryError>;

/// The reason a disk space query failed.
///
/// There is a single kind of failure: the filesystem statistics call did not
/// succeed for the path. The underlying OS error is kept as the
/// [`source`](std::error::Error::source) for callers that want to report it.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unable to query free space for '{}'", .path.display())]
    QueryFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QueryError {
    pub(crate) fn query_failed(path: &Path, source: io::Error) -> Self {
        QueryError::QueryFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the path that was queried.
    pub fn path(&self) -> &Path {
        match self {
            QueryError::QueryFailed { path, .. } => path,
        }
    }

    /// Returns the OS error that caused the failure.
    pub fn io_error(&self) -> &io::Error {
        match self {
            QueryError::QueryFailed { source, .. } => source,
        }
    }

    /// Returns the raw OS error code, if the failure came from the OS call
    /// itself rather than from converting the path.
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }
}
