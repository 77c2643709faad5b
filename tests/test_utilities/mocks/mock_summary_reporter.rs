use std::cell::RefCell;
use yarn_audit_sonar::prelude::*;

/// Mock SummaryReporter that records every reported statistics snapshot
pub struct MockSummaryReporter {
    pub reported: RefCell<Vec<RunStatistics>>,
}

impl MockSummaryReporter {
    pub fn new() -> Self {
        Self {
            reported: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MockSummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryReporter for MockSummaryReporter {
    fn report_summary(&self, statistics: &RunStatistics) {
        self.reported.borrow_mut().push(statistics.clone());
    }
}
