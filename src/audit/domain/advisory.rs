use std::fmt;

use serde::Deserialize;

/// One newline-delimited record from the `yarn audit --json` event stream.
///
/// The stream interleaves several record types (`auditSummary`,
/// `auditAction`, ...); only `auditAdvisory` records carry vulnerability
/// data. Every other type is matched by the catch-all variant and skipped,
/// whatever its shape.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum AuditEvent {
    #[serde(rename = "auditAdvisory")]
    Advisory { data: AdvisoryData },
    #[serde(other)]
    Other,
}

/// Payload of an `auditAdvisory` record.
#[derive(Debug, Deserialize)]
pub struct AdvisoryData {
    pub advisory: Advisory,
    pub resolution: Resolution,
}

/// The audit tool's resolution of an advisory to a dependency-graph
/// position. The same advisory is resolved (and reported) once per
/// position, so `id` is the deduplication key.
#[derive(Debug, Deserialize)]
pub struct Resolution {
    pub id: AdvisoryId,
}

/// An advisory identifier as it appears on the wire: npm assigns numeric
/// ids, GitHub assigns string ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdvisoryId {
    Number(i64),
    Text(String),
}

impl AdvisoryId {
    /// Canonical string form used for deduplication and rule identity.
    pub fn canonical(&self) -> String {
        match self {
            AdvisoryId::Number(value) => value.to_string(),
            AdvisoryId::Text(value) => value.clone(),
        }
    }
}

impl fmt::Display for AdvisoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryId::Number(value) => write!(f, "{}", value),
            AdvisoryId::Text(value) => write!(f, "{}", value),
        }
    }
}

/// A published vulnerability affecting a named module.
#[derive(Debug, Deserialize)]
pub struct Advisory {
    pub module_name: String,
    #[serde(default)]
    pub vulnerable_versions: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub references: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub findings: Vec<AdvisoryFinding>,
    #[serde(default)]
    pub github_advisory_id: Option<String>,
    #[serde(default)]
    pub npm_advisory_id: Option<AdvisoryId>,
}

/// One occurrence of the vulnerable module in the dependency tree.
#[derive(Debug, Deserialize)]
pub struct AdvisoryFinding {
    pub version: String,
}

impl Advisory {
    /// Distinct finding versions in first-occurrence order. The head is
    /// the main version; the tail feeds the secondary locations.
    pub fn distinct_versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for finding in &self.findings {
            if !versions.contains(&finding.version.as_str()) {
                versions.push(&finding.version);
            }
        }
        versions
    }

    /// Human-readable rule name: the GitHub advisory id when present, else
    /// the npm advisory id, else a name synthesized from the rule id.
    /// Empty ids count as absent.
    pub fn rule_name(&self, rule_id: &str) -> String {
        if let Some(id) = self.github_advisory_id.as_deref() {
            if !id.is_empty() {
                return id.to_string();
            }
        }
        if let Some(id) = &self.npm_advisory_id {
            let canonical = id.canonical();
            if !canonical.is_empty() {
                return canonical;
            }
        }
        format!("rule_{}", rule_id)
    }
}
