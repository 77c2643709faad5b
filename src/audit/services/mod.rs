pub mod lockfile_index;
pub mod processor;

pub use lockfile_index::LockfileIndex;
pub use processor::AdvisoryProcessor;
