use std::collections::HashSet;

use crate::audit::domain::{
    AdvisoryData, AuditEvent, IssueRecord, RunStatistics, Severity, SourceLocation,
};
use crate::audit::services::LockfileIndex;
use crate::shared::error::AuditError;
use crate::shared::Result;

/// Single-pass converter from raw audit stream lines to issue records.
///
/// Owns the only mutable state of a run: the set of already-seen
/// resolution identities and the severity statistics. One processor is
/// constructed per run and consumed when the stream ends.
pub struct AdvisoryProcessor<'a> {
    index: &'a LockfileIndex,
    seen: HashSet<String>,
    statistics: RunStatistics,
}

impl<'a> AdvisoryProcessor<'a> {
    pub fn new(index: &'a LockfileIndex) -> Self {
        Self {
            index,
            seen: HashSet::new(),
            statistics: RunStatistics::new(),
        }
    }

    /// Decodes one input line (`number` is 1-based, for diagnostics).
    ///
    /// Returns `Ok(None)` for record types other than `auditAdvisory` and
    /// for duplicate advisories. A line that does not decode is a fatal
    /// [`AuditError::MalformedRecord`]; skipping it could hide a real
    /// advisory.
    pub fn process_line(&mut self, line: &str, number: usize) -> Result<Option<IssueRecord>> {
        let event: AuditEvent =
            serde_json::from_str(line).map_err(|source| AuditError::MalformedRecord {
                line: number,
                details: source.to_string(),
            })?;

        match event {
            AuditEvent::Advisory { data } => Ok(self.process_advisory(data)),
            AuditEvent::Other => Ok(None),
        }
    }

    /// Statistics accumulated so far.
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Consumes the processor at end-of-stream.
    pub fn into_statistics(self) -> RunStatistics {
        self.statistics
    }

    fn process_advisory(&mut self, data: AdvisoryData) -> Option<IssueRecord> {
        let rule_id = data.resolution.id.canonical();
        if !self.seen.insert(rule_id.clone()) {
            return None;
        }

        let advisory = data.advisory;
        let severity = advisory
            .severity
            .as_deref()
            .and_then(Severity::parse)
            .unwrap_or_default();
        self.statistics.record(severity);

        let versions = advisory.distinct_versions();
        let primary_location = match versions.first() {
            Some(version) => self.index.locate(&advisory.module_name, version),
            // An advisory without findings still gets reported; it just has
            // no version to anchor on.
            None => SourceLocation::fallback(),
        };
        let secondary_locations = versions
            .iter()
            .skip(1)
            .map(|version| self.index.locate(&advisory.module_name, version))
            .collect();

        Some(IssueRecord {
            rule_name: advisory.rule_name(&rule_id),
            rule_id,
            module_name: advisory.module_name,
            vulnerable_versions: advisory.vulnerable_versions.unwrap_or_default(),
            title: advisory.title.unwrap_or_default(),
            overview: advisory.overview.unwrap_or_default(),
            references: advisory.references.unwrap_or_default(),
            severity,
            primary_location,
            secondary_locations,
        })
    }
}
