use std::path::Path;

use crate::shared::Result;

/// LockfileReader port for loading the lockfile text
///
/// This port abstracts where the lockfile comes from (file system in
/// production, in-memory content in tests).
pub trait LockfileReader {
    /// Reads the full lockfile text
    ///
    /// # Arguments
    /// * `path` - Path to the lockfile
    ///
    /// # Errors
    /// Returns an error if the lockfile does not exist (the fatal startup
    /// precondition) or cannot be read
    fn read_lockfile(&self, path: &Path) -> Result<String>;
}
