use crate::audit::domain::{Severity, SourceLocation};

/// One deduplicated advisory, resolved against the lockfile and ready to
/// be shaped by a report writer.
///
/// This is the profile-agnostic unit flowing from the stream processor to
/// the writers; the two output profiles pick their own severity vocabulary
/// and message field from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Canonical resolution identity; doubles as the rule id.
    pub rule_id: String,
    /// Preferred advisory id, or a synthesized `rule_<id>` name.
    pub rule_name: String,
    pub module_name: String,
    pub vulnerable_versions: String,
    pub title: String,
    pub overview: String,
    pub references: String,
    pub severity: Severity,
    /// Location of the main affected version's declaration.
    pub primary_location: SourceLocation,
    /// Locations of the other affected versions, in finding order.
    pub secondary_locations: Vec<SourceLocation>,
}
