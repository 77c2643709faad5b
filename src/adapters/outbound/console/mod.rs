/// Console adapters for stderr reporting
mod summary_reporter;

pub use summary_reporter::StderrSummaryReporter;
