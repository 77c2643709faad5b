/// Mock implementations for testing
mod mock_lockfile_reader;
mod mock_summary_reporter;

pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_summary_reporter::MockSummaryReporter;
