use owo_colors::OwoColorize;

use crate::audit::domain::{RunStatistics, Severity};
use crate::ports::outbound::SummaryReporter;

/// StderrSummaryReporter adapter for the end-of-run summary
///
/// Writes the human-readable totals to stderr so they never mix with the
/// structured report on stdout. Colors honor the NO_COLOR convention.
pub struct StderrSummaryReporter {
    color: bool,
}

impl StderrSummaryReporter {
    pub fn new() -> Self {
        Self {
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Builds one `<count> <severity>` breakdown entry.
    fn breakdown_entry(&self, severity: Severity, count: usize) -> String {
        if !self.color {
            return format!("{} {}", count, severity.label());
        }
        let label = match severity {
            Severity::Critical => severity.label().red().bold().to_string(),
            Severity::High => severity.label().red().to_string(),
            Severity::Moderate => severity.label().yellow().to_string(),
            Severity::Low | Severity::Info => severity.label().blue().to_string(),
        };
        format!("{} {}", count, label)
    }
}

impl Default for StderrSummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryReporter for StderrSummaryReporter {
    fn report_summary(&self, statistics: &RunStatistics) {
        eprintln!("yarn audit:");
        eprintln!("  {} vulnerabilities found", statistics.total());
        if statistics.total() > 0 {
            let entries: Vec<String> = statistics
                .breakdown()
                .into_iter()
                .map(|(severity, count)| self.breakdown_entry(severity, count))
                .collect();
            eprintln!("  Severity: {}", entries.join(" | "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_entry_without_color() {
        let reporter = StderrSummaryReporter { color: false };
        assert_eq!(
            reporter.breakdown_entry(Severity::Critical, 3),
            "3 critical"
        );
    }

    #[test]
    fn test_report_summary_does_not_panic() {
        let reporter = StderrSummaryReporter::new();
        let mut statistics = RunStatistics::new();
        reporter.report_summary(&statistics);

        statistics.record(Severity::High);
        reporter.report_summary(&statistics);
    }
}
