use std::io::Write;

use serde::Serialize;

use crate::adapters::outbound::writers::{Location, ENGINE_ID};
use crate::audit::domain::IssueRecord;
use crate::ports::outbound::ReportWriter;
use crate::shared::Result;

#[derive(Debug, Serialize)]
struct Report {
    rules: Vec<Rule>,
    issues: Vec<Issue>,
}

#[derive(Debug, Serialize)]
struct Rule {
    id: String,
    name: String,
    description: String,
    #[serde(rename = "cleanCodeAttribute")]
    clean_code_attribute: &'static str,
    #[serde(rename = "engineId")]
    engine_id: &'static str,
    impacts: Vec<Impact>,
}

#[derive(Debug, Serialize)]
struct Impact {
    #[serde(rename = "softwareQuality")]
    software_quality: &'static str,
    severity: &'static str,
}

#[derive(Debug, Serialize)]
struct Issue {
    #[serde(rename = "ruleId")]
    rule_id: String,
    // Field name as consumed by SonarQube's generic issue import.
    #[serde(rename = "efforMinutes")]
    effor_minutes: u32,
    #[serde(rename = "primaryLocation")]
    primary_location: Location,
    #[serde(rename = "secondaryLocations")]
    secondary_locations: Vec<Location>,
}

/// SonarReportWriter adapter for the rules-and-issues document
///
/// Buffers one rule descriptor and one issue per advisory, then emits the
/// whole `{"rules":[...],"issues":[...]}` document at close. Issue
/// messages carry the advisory title; the rule description is an HTML
/// block assembled from title, overview and references.
pub struct SonarReportWriter<W: Write> {
    sink: W,
    lockfile_path: String,
    rules: Vec<Rule>,
    issues: Vec<Issue>,
}

impl<W: Write> SonarReportWriter<W> {
    pub fn new(sink: W, lockfile_path: String) -> Self {
        Self {
            sink,
            lockfile_path,
            rules: Vec::new(),
            issues: Vec::new(),
        }
    }

    fn describe(record: &IssueRecord) -> String {
        format!(
            "<h1>{} {}</h1>\n<h2>{}</h2>\n\nOverview:\n<pre>\n{}\n</pre>\n\nReferences:\n<pre>\n{}\n</pre>\n",
            record.module_name,
            record.vulnerable_versions,
            record.title,
            record.overview,
            record.references
        )
    }
}

impl<W: Write> ReportWriter for SonarReportWriter<W> {
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_issue(&mut self, issue: &IssueRecord) -> Result<()> {
        self.rules.push(Rule {
            id: issue.rule_id.clone(),
            name: issue.rule_name.clone(),
            description: Self::describe(issue),
            clean_code_attribute: "TRUSTWORTHY",
            engine_id: ENGINE_ID,
            impacts: vec![Impact {
                software_quality: "SECURITY",
                severity: issue.severity.impact(),
            }],
        });
        self.issues.push(Issue {
            rule_id: issue.rule_id.clone(),
            effor_minutes: 0,
            primary_location: Location::new(
                &issue.title,
                &self.lockfile_path,
                issue.primary_location.clone(),
            ),
            secondary_locations: issue
                .secondary_locations
                .iter()
                .map(|range| Location::new(&issue.title, &self.lockfile_path, range.clone()))
                .collect(),
        });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let report = Report {
            rules: std::mem::take(&mut self.rules),
            issues: std::mem::take(&mut self.issues),
        };
        serde_json::to_writer(&mut self.sink, &report)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}
