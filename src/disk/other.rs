//! Fallback for platforms without a supported filesystem statistics call.

use std::{io, path::Path};

use super::Usage;

pub(super) fn usage(_path: &Path) -> io::Result<Usage> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "disk space queries are not supported on this platform",
    ))
}
