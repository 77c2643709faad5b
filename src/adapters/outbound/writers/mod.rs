/// Report writers - The two structured output document shapes
///
/// `SonarReportWriter` buffers rule descriptors and issues and emits one
/// `{"rules":[...],"issues":[...]}` document at close. `IssuesReportWriter`
/// emits `{"issues":[...]}` incrementally, one issue per advisory as it is
/// processed.
mod issues_report_writer;
mod sonar_report_writer;

use serde::Serialize;

use crate::audit::domain::SourceLocation;

pub use issues_report_writer::IssuesReportWriter;
pub use sonar_report_writer::SonarReportWriter;

/// Engine identity stamped on every rule and issue.
pub(crate) const ENGINE_ID: &str = "yarn-audit";

/// An issue location pointing into the lockfile.
#[derive(Debug, Serialize)]
pub(crate) struct Location {
    pub message: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "textRange")]
    pub text_range: SourceLocation,
}

impl Location {
    pub(crate) fn new(message: &str, file_path: &str, text_range: SourceLocation) -> Self {
        Self {
            message: message.to_string(),
            file_path: file_path.to_string(),
            text_range,
        }
    }
}
