//! Conversion warnings and the fixed advisory texts.

use std::fmt;

use serde_json::Value;

/// Advisory emitted for every migrated `httpHeaders` group.
pub const SECRET_HEADERS_ADVISORY: &str = "Migrated an 'httpHeaders' entry. IMPORTANT: Review for sensitive data (e.g., API tokens). \
     Replace these with environment variable placeholders (e.g., '${MY_TOKEN}') \
     in '.linkspector.yml' and store actual values in GitHub Secrets.";

/// Trailing advisory about HTML comment ignore directives.
pub const HTML_COMMENT_ADVISORY: &str = "MANUAL REVIEW REQUIRED: HTML comment ignores \
     (e.g., <!-- markdown-link-check-disable -->) are NOT automatically converted. \
     Add them as 'ignorePatterns' in the YAML.";

/// Trailing advisory about legacy GitHub Action workflow inputs.
pub const WORKFLOW_INPUTS_ADVISORY: &str = "MANUAL REVIEW REQUIRED: Workflow inputs like \
     'check-modified-files-only', 'file-path', 'max-depth' need manual translation to \
     '.linkspector.yml' fields (e.g., 'modifiedFilesOnly', 'files') or to the new \
     GitHub Action's inputs.";

/// A non-fatal, human-readable note about something that was skipped,
/// defaulted, or needs manual review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning(String);

impl Warning {
    /// Create a warning from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Warning for an item of a pattern list that could not be recognized.
    pub(crate) fn unrecognized_item(field: &str, item: &Value) -> Self {
        Self(format!(
            "Skipping unrecognized item in '{}': {}",
            field,
            render(item)
        ))
    }

    /// Warning for a list-valued field that held something else.
    pub(crate) fn not_a_list(field: &str, value: &Value) -> Self {
        Self(format!(
            "Skipping '{}': expected a list, found {}",
            field,
            render(value)
        ))
    }

    /// Warning for a header group without a usable `urls`/`url` list.
    pub(crate) fn missing_urls(group: &Value) -> Self {
        Self(format!(
            "Skipping httpHeader group due to missing/invalid 'urls' or 'url' key: {}",
            render(group)
        ))
    }

    /// Warning for a header group without a usable `headers` mapping.
    pub(crate) fn missing_headers(group: &Value) -> Self {
        Self(format!(
            "Skipping httpHeader group due to missing or invalid 'headers' key: {}",
            render(group)
        ))
    }

    /// The warning text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Compact JSON keeps offending values on one line of the report.
fn render(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}
