use serde::Serialize;

/// A 1-based span in the lockfile text.
///
/// Serialized as a SonarQube `textRange`; optional bounds are omitted
/// entirely rather than emitted as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
}

impl SourceLocation {
    /// A span covering one full lockfile line. `width` is the character
    /// length of the line text, untrimmed.
    pub fn line_span(line: usize, width: usize) -> Self {
        Self {
            start_line: line,
            end_line: Some(line),
            start_column: Some(1),
            end_column: Some(width),
        }
    }

    /// The degraded location used when a (module, version) pair has no
    /// entry in the lockfile: the start of the file, nothing else known.
    pub fn fallback() -> Self {
        Self {
            start_line: 1,
            end_line: None,
            start_column: None,
            end_column: None,
        }
    }
}
