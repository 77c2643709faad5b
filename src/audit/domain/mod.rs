pub mod advisory;
pub mod location;
pub mod report;
pub mod severity;
pub mod statistics;

pub use advisory::{Advisory, AdvisoryData, AdvisoryFinding, AdvisoryId, AuditEvent, Resolution};
pub use location::SourceLocation;
pub use report::IssueRecord;
pub use severity::Severity;
pub use statistics::RunStatistics;
