mod adapters;
mod application;
mod audit;
mod cli;
mod ports;
mod shared;

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use adapters::outbound::console::StderrSummaryReporter;
use adapters::outbound::filesystem::FileSystemReader;
use application::dto::ConvertRequest;
use application::use_cases::ConvertAuditUseCase;
use shared::error::{AuditError, ExitCode};
use shared::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<AuditError>() {
        Some(AuditError::LockfileNotFound { .. }) => ExitCode::LockfileMissing,
        _ => ExitCode::ApplicationError,
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Args::parse_args();

    // Create adapters (Dependency Injection)
    let lockfile_reader = FileSystemReader::new();
    let summary_reporter = StderrSummaryReporter::new();

    // Create use case with injected dependencies
    let use_case = ConvertAuditUseCase::new(lockfile_reader, summary_reporter);

    // Select the report sink
    let sink: Box<dyn Write> = match args.output.as_deref() {
        Some(path) => Box::new(File::create(path).map_err(|e| AuditError::FileWriteError {
            path: PathBuf::from(path),
            details: e.to_string(),
        })?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = args.format.create_writer(sink, &args.lockfile);

    // Execute use case over the stdin event stream
    let request = ConvertRequest::new(PathBuf::from(&args.lockfile));
    let stdin = io::stdin();
    use_case.execute(&request, stdin.lock(), writer.as_mut())?;

    Ok(())
}
