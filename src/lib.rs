//! yarn-audit-sonar - Convert `yarn audit --json` output into SonarQube
//! generic issue reports
//!
//! This library turns the newline-delimited JSON event stream emitted by
//! `yarn audit --json`, together with the project's `yarn.lock`, into a
//! structured vulnerability report whose issues point at the exact
//! lockfile lines pinning the affected versions.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Core** (`audit`): Domain models, the lockfile position index, and
//!   the advisory stream processor
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use yarn_audit_sonar::prelude::*;
//! use std::io::{self, Write};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let lockfile_reader = FileSystemReader::new();
//! let summary_reporter = StderrSummaryReporter::new();
//!
//! // Create use case
//! let use_case = ConvertAuditUseCase::new(lockfile_reader, summary_reporter);
//!
//! // Execute over stdin, writing the report to stdout
//! let sink: Box<dyn Write> = Box::new(io::stdout().lock());
//! let mut writer = SonarReportWriter::new(sink, "yarn.lock".to_string());
//! let request = ConvertRequest::new(PathBuf::from("yarn.lock"));
//! let stdin = io::stdin();
//! let response = use_case.execute(&request, stdin.lock(), &mut writer)?;
//! eprintln!("{} unique advisories", response.statistics.total());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrSummaryReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::writers::{IssuesReportWriter, SonarReportWriter};
    pub use crate::application::dto::{ConvertRequest, ConvertResponse};
    pub use crate::application::use_cases::ConvertAuditUseCase;
    pub use crate::audit::domain::{
        Advisory, AuditEvent, IssueRecord, RunStatistics, Severity, SourceLocation,
    };
    pub use crate::audit::services::{AdvisoryProcessor, LockfileIndex};
    pub use crate::ports::outbound::{LockfileReader, ReportWriter, SummaryReporter};
    pub use crate::shared::Result;
}
