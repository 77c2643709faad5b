use std::io::BufRead;

use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::audit::services::{AdvisoryProcessor, LockfileIndex};
use crate::ports::outbound::{LockfileReader, ReportWriter, SummaryReporter};
use crate::shared::Result;

/// ConvertAuditUseCase - Core use case for audit report conversion
///
/// Orchestrates the whole run: build the lockfile index, stream the audit
/// records through the processor into the report writer, then report the
/// run summary. Infrastructure is injected through generic port
/// parameters.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `SR` - SummaryReporter implementation
pub struct ConvertAuditUseCase<LR, SR> {
    lockfile_reader: LR,
    summary_reporter: SR,
}

impl<LR, SR> ConvertAuditUseCase<LR, SR>
where
    LR: LockfileReader,
    SR: SummaryReporter,
{
    /// Creates a new ConvertAuditUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, summary_reporter: SR) -> Self {
        Self {
            lockfile_reader,
            summary_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// The lockfile is read and indexed in full before the first input
    /// line is consumed; the input stream is then processed exactly once,
    /// in order. The writer sees `open` before any input is read, one
    /// `write_issue` per unique advisory, and `close` at end-of-stream.
    ///
    /// # Arguments
    /// * `request` - Conversion request naming the lockfile
    /// * `input` - The `yarn audit --json` event stream
    /// * `writer` - Report writer for the selected output document
    ///
    /// # Returns
    /// ConvertResponse carrying the run statistics
    ///
    /// # Errors
    /// Returns an error if the lockfile is missing or unreadable, if an
    /// input line is malformed, or if the report sink fails
    pub fn execute<R: BufRead>(
        &self,
        request: &ConvertRequest,
        input: R,
        writer: &mut dyn ReportWriter,
    ) -> Result<ConvertResponse> {
        let content = self.lockfile_reader.read_lockfile(&request.lockfile_path)?;
        let index = LockfileIndex::parse(&content);
        let mut processor = AdvisoryProcessor::new(&index);

        writer.open()?;
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            if let Some(issue) = processor.process_line(&line, number + 1)? {
                writer.write_issue(&issue)?;
            }
        }
        writer.close()?;

        let statistics = processor.into_statistics();
        self.summary_reporter.report_summary(&statistics);
        Ok(ConvertResponse::new(statistics))
    }
}
