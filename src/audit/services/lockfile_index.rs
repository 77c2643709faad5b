use std::collections::HashMap;

use crate::audit::domain::SourceLocation;

/// Position index over a yarn.lock text: module name → version string →
/// location of the version declaration line.
///
/// yarn.lock is an informal, indentation-sensitive format. An unindented
/// non-empty line declares a module block (`lodash@^4.17.0, lodash@^4.17.4:`)
/// and every indented `version "..."` line below it pins one resolved
/// version. The index is built in a single pass and is immutable afterwards.
pub struct LockfileIndex {
    entries: HashMap<String, HashMap<String, SourceLocation>>,
}

impl LockfileIndex {
    /// Scans the full lockfile text into an index. Lines are numbered from
    /// 1. Duplicate (module, version) pairs keep the last occurrence.
    pub fn parse(content: &str) -> Self {
        let mut entries: HashMap<String, HashMap<String, SourceLocation>> = HashMap::new();
        let mut current_module = String::new();

        for (index, line) in content.split('\n').enumerate() {
            let number = index + 1;
            if !line.is_empty() && !line.starts_with(' ') {
                current_module = declared_module(line);
            }
            if let Some(version) = quoted_version(line) {
                entries.entry(current_module.clone()).or_default().insert(
                    version.to_string(),
                    SourceLocation::line_span(number, line.chars().count()),
                );
            }
        }

        Self { entries }
    }

    /// Looks up the declaration span for a (module, version) pair.
    ///
    /// Never fails: pairs absent from the lockfile (transitive resolutions,
    /// range mismatches) degrade to the start-of-file fallback.
    pub fn locate(&self, module: &str, version: &str) -> SourceLocation {
        self.entries
            .get(module)
            .and_then(|versions| versions.get(version))
            .cloned()
            .unwrap_or_else(SourceLocation::fallback)
    }

    /// Number of distinct module names indexed.
    pub fn module_count(&self) -> usize {
        self.entries.len()
    }
}

/// Extracts the module name from an unindented declaration line: quote
/// characters are dropped, then the key is cut at the first `@` past the
/// leading character, so scoped names like `@babel/core@^7.0.0` keep their
/// leading `@`. A line without a version spec is kept whole.
fn declared_module(line: &str) -> String {
    let cleaned: String = line.chars().filter(|&c| c != '"').collect();
    match cleaned.char_indices().find(|&(at, c)| at > 0 && c == '@') {
        Some((at, _)) => cleaned[..at].to_string(),
        None => cleaned,
    }
}

/// Matches an indented `version "<value>"` line and returns the quoted
/// value. The value runs to the last quote on the line.
fn quoted_version(line: &str) -> Option<&str> {
    let indented = line.trim_start();
    if indented.len() == line.len() {
        return None;
    }
    let value = indented.strip_prefix("version ")?.strip_prefix('"')?;
    let end = value.rfind('"')?;
    Some(&value[..end])
}
