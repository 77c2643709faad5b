use std::path::PathBuf;

/// ConvertRequest - Internal request DTO for the audit conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path to the yarn lockfile backing the location index
    pub lockfile_path: PathBuf,
}

impl ConvertRequest {
    pub fn new(lockfile_path: PathBuf) -> Self {
        Self { lockfile_path }
    }
}
