use std::io::Write;

use clap::Parser;

use crate::adapters::outbound::writers::{IssuesReportWriter, SonarReportWriter};
use crate::ports::outbound::ReportWriter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Sonar,
    Issues,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sonar" => Ok(OutputFormat::Sonar),
            "issues" => Ok(OutputFormat::Issues),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'sonar' or 'issues'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a report writer for the specified output format
    ///
    /// # Arguments
    /// * `sink` - Where the structured document is written
    /// * `lockfile_path` - Path stamped into every issue location
    ///
    /// # Returns
    /// A boxed ReportWriter trait object appropriate for this format
    pub fn create_writer(
        &self,
        sink: Box<dyn Write>,
        lockfile_path: &str,
    ) -> Box<dyn ReportWriter> {
        match self {
            OutputFormat::Sonar => {
                Box::new(SonarReportWriter::new(sink, lockfile_path.to_string()))
            }
            OutputFormat::Issues => {
                Box::new(IssuesReportWriter::new(sink, lockfile_path.to_string()))
            }
        }
    }
}

/// Convert `yarn audit --json` output into SonarQube generic issue reports
#[derive(Parser, Debug)]
#[command(name = "yarn-audit-sonar")]
#[command(version)]
#[command(
    about = "Convert `yarn audit --json` output into SonarQube generic issue reports",
    long_about = None
)]
pub struct Args {
    /// Output format: sonar (rules and issues document) or issues
    /// (incremental issues array)
    #[arg(short, long, default_value = "sonar")]
    pub format: OutputFormat,

    /// Path to the yarn lockfile; also used as the filePath of every
    /// reported location
    #[arg(short, long, default_value = "yarn.lock")]
    pub lockfile: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_sonar() {
        let format = OutputFormat::from_str("sonar").unwrap();
        assert!(matches!(format, OutputFormat::Sonar));
    }

    #[test]
    fn test_output_format_from_str_issues() {
        let format = OutputFormat::from_str("issues").unwrap();
        assert!(matches!(format, OutputFormat::Issues));
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        let format = OutputFormat::from_str("SONAR").unwrap();
        assert!(matches!(format, OutputFormat::Sonar));

        let format = OutputFormat::from_str("Issues").unwrap();
        assert!(matches!(format, OutputFormat::Issues));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("sarif");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("sarif"));
        assert!(error.contains("sonar"));
        assert!(error.contains("issues"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        let result = OutputFormat::from_str("");
        assert!(result.is_err());
    }
}
