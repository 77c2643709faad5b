use crate::audit::domain::RunStatistics;

/// SummaryReporter port for the human-readable end-of-run summary
///
/// The summary goes to a side channel (stderr in production) so consumers
/// of the structured report are not polluted by prose.
pub trait SummaryReporter {
    /// Reports the end-of-run totals
    fn report_summary(&self, statistics: &RunStatistics);
}
