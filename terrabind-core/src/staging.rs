//! Scoped staging directories.

use std::{io, path::Path};

use tempfile::TempDir;

/// An exclusively-owned temporary working directory.
///
/// The directory and everything staged into it are deleted when the
/// value is dropped, on every exit path. Each per-provider iteration
/// owns exactly one staging directory, so no iteration leaks
/// intermediate state into the next.
pub struct StagingDir {
    dir: TempDir,
}

impl StagingDir {
    /// Create a fresh staging directory with the given name prefix.
    pub fn new(prefix: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(Self { dir })
    }

    /// Path of the staging directory root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
