use std::fmt;

/// Advisory severity levels as reported by `yarn audit`, ordered from
/// least to most severe.
///
/// The default is `Info`: a record carrying a severity outside this
/// vocabulary is normalized to the lowest rank instead of failing the run,
/// which also gives it the lowest-rank value in both output vocabularies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    #[default]
    Info,
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    /// All levels in ascending rank order.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Critical,
    ];

    /// Parses a raw severity label. Returns `None` for anything outside
    /// the fixed vocabulary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "info" => Some(Severity::Info),
            "low" => Some(Severity::Low),
            "moderate" => Some(Severity::Moderate),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// The raw label as it appears in audit records and the run summary.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Impact severity for rule descriptors in the rules-and-issues report.
    pub fn impact(self) -> &'static str {
        match self {
            Severity::Info | Severity::Low => "LOW",
            Severity::Moderate | Severity::High => "MEDIUM",
            Severity::Critical => "HIGH",
        }
    }

    /// Issue severity for the incremental issues report.
    pub fn issue_severity(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Low | Severity::Moderate => "MINOR",
            Severity::High => "CRITICAL",
            Severity::Critical => "BLOCKER",
        }
    }

    /// Position in the ascending rank order, starting at 0.
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
