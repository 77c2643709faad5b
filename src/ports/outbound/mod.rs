/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, report sinks).
pub mod lockfile_reader;
pub mod report_writer;
pub mod summary_reporter;

pub use lockfile_reader::LockfileReader;
pub use report_writer::ReportWriter;
pub use summary_reporter::SummaryReporter;
