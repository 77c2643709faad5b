use std::io::Write;

use serde::Serialize;

use crate::adapters::outbound::writers::{Location, ENGINE_ID};
use crate::audit::domain::IssueRecord;
use crate::ports::outbound::ReportWriter;
use crate::shared::Result;

#[derive(Debug, Serialize)]
struct Issue {
    #[serde(rename = "engineId")]
    engine_id: &'static str,
    #[serde(rename = "ruleId")]
    rule_id: String,
    severity: &'static str,
    #[serde(rename = "type")]
    issue_type: &'static str,
    // Field name as consumed by SonarQube's generic issue import.
    #[serde(rename = "efforMinutes")]
    effor_minutes: u32,
    #[serde(rename = "primaryLocation")]
    primary_location: Location,
    #[serde(rename = "secondaryLocations")]
    secondary_locations: Vec<Location>,
}

/// IssuesReportWriter adapter for the incremental issues document
///
/// Writes `{"issues":[` before the first input record is consumed, appends
/// each issue comma-separated as it is produced, and closes the document
/// with `]}` at end-of-stream. Nothing is buffered, so arbitrarily long
/// streams write in constant memory. Issue messages carry the advisory
/// overview text.
pub struct IssuesReportWriter<W: Write> {
    sink: W,
    lockfile_path: String,
    written: usize,
}

impl<W: Write> IssuesReportWriter<W> {
    pub fn new(sink: W, lockfile_path: String) -> Self {
        Self {
            sink,
            lockfile_path,
            written: 0,
        }
    }
}

impl<W: Write> ReportWriter for IssuesReportWriter<W> {
    fn open(&mut self) -> Result<()> {
        write!(self.sink, "{{\"issues\":[")?;
        Ok(())
    }

    fn write_issue(&mut self, issue: &IssueRecord) -> Result<()> {
        let shaped = Issue {
            engine_id: ENGINE_ID,
            rule_id: issue.rule_id.clone(),
            severity: issue.severity.issue_severity(),
            issue_type: "VULNERABILITY",
            effor_minutes: 0,
            primary_location: Location::new(
                &issue.overview,
                &self.lockfile_path,
                issue.primary_location.clone(),
            ),
            secondary_locations: issue
                .secondary_locations
                .iter()
                .map(|range| Location::new(&issue.overview, &self.lockfile_path, range.clone()))
                .collect(),
        };

        if self.written > 0 {
            write!(self.sink, ",")?;
        }
        serde_json::to_writer(&mut self.sink, &shaped)?;
        self.written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        writeln!(self.sink, "]}}")?;
        self.sink.flush()?;
        Ok(())
    }
}
