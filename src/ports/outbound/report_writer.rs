use crate::audit::domain::IssueRecord;
use crate::shared::Result;

/// ReportWriter port for emitting the structured report document
///
/// The three phases make the enclosing-document invariants explicit:
/// `open` before any input is consumed, one `write_issue` per unique
/// advisory in stream order, `close` exactly once at end-of-stream.
/// Whether issues are written out immediately or buffered until `close`
/// is up to the implementation.
pub trait ReportWriter {
    /// Starts the report document
    fn open(&mut self) -> Result<()>;

    /// Appends one issue to the report
    ///
    /// # Arguments
    /// * `issue` - The resolved, deduplicated advisory to append
    fn write_issue(&mut self, issue: &IssueRecord) -> Result<()>;

    /// Finishes the report document and flushes the sink
    fn close(&mut self) -> Result<()>;
}
