//! Translation of markdown-link-check configuration into linkspector configuration.
//!
//! [`translate`] is a single pass over the source object. Every field it
//! knows is mapped into a fresh [`LinkspectorConfig`]; every item it can't
//! map is dropped and described by a [`Warning`]. Nothing here fails: the
//! worst case is a default config plus a list of warnings.
//!
//! # Field Mapping
//!
//! | markdown-link-check   | linkspector           |
//! |-----------------------|-----------------------|
//! | `aliveStatusCodes`    | `aliveStatusCodes`    |
//! | `ignorePatterns`      | `ignorePatterns`      |
//! | `replacementPatterns` | `replacementPatterns` |
//! | `httpHeaders[].urls`  | `httpHeaders[].url`   |
//! | `folder-path`         | `dirs`                |
//! | (none)                | `useGitIgnore: true`  |

mod warning;

pub use warning::{
    HTML_COMMENT_ADVISORY, SECRET_HEADERS_ADVISORY, WORKFLOW_INPUTS_ADVISORY, Warning,
};

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{HttpHeaderGroup, IgnorePattern, LinkspectorConfig, ReplacementPattern};

/// Source key for alive status codes.
pub const ALIVE_STATUS_CODES: &str = "aliveStatusCodes";
/// Source key for ignore patterns.
pub const IGNORE_PATTERNS: &str = "ignorePatterns";
/// Source key for replacement patterns.
pub const REPLACEMENT_PATTERNS: &str = "replacementPatterns";
/// Source key for header groups.
pub const HTTP_HEADERS: &str = "httpHeaders";
/// Non-standard source key some workflows use for the directories to check.
pub const FOLDER_PATH: &str = "folder-path";

/// Convert a decoded `mlc_config.json` object into linkspector configuration.
///
/// Returns the new configuration and the warnings collected along the way, in
/// the order they were raised. The last two warnings are always
/// [`HTML_COMMENT_ADVISORY`] and [`WORKFLOW_INPUTS_ADVISORY`].
pub fn translate(source: &Map<String, Value>) -> (LinkspectorConfig, Vec<Warning>) {
    let mut translator = Translator::default();

    translator.alive_status_codes(source);
    translator.ignore_patterns(source);
    translator.replacement_patterns(source);
    translator.http_headers(source);
    translator.dirs(source);
    translator.use_git_ignore();
    translator.advisories();

    debug!(
        "Translated config with {} warnings",
        translator.warnings.len()
    );
    (translator.config, translator.warnings)
}

#[derive(Default)]
struct Translator {
    config: LinkspectorConfig,
    warnings: Vec<Warning>,
}

impl Translator {
    fn warn(&mut self, warning: Warning) {
        debug!("{}", warning);
        self.warnings.push(warning);
    }

    /// Items of a list-valued source field; a non-list is warned and yields nothing.
    fn list_items<'a>(&mut self, field: &str, value: &'a Value) -> &'a [Value] {
        match value {
            Value::Array(items) => items.as_slice(),
            other => {
                self.warn(Warning::not_a_list(field, other));
                &[]
            }
        }
    }

    fn alive_status_codes(&mut self, source: &Map<String, Value>) {
        if let Some(codes) = source.get(ALIVE_STATUS_CODES) {
            self.config.alive_status_codes = Some(codes.clone());
        }
    }

    fn ignore_patterns(&mut self, source: &Map<String, Value>) {
        let Some(value) = source.get(IGNORE_PATTERNS) else {
            return;
        };

        let mut patterns = Vec::new();
        for item in self.list_items(IGNORE_PATTERNS, value) {
            match item {
                Value::String(_) => patterns.push(IgnorePattern {
                    pattern: item.clone(),
                }),
                Value::Object(map) if map.contains_key("pattern") => {
                    patterns.push(IgnorePattern {
                        pattern: map["pattern"].clone(),
                    })
                }
                other => self.warn(Warning::unrecognized_item(IGNORE_PATTERNS, other)),
            }
        }

        debug!("Migrated {} ignore patterns", patterns.len());
        self.config.ignore_patterns = Some(patterns);
    }

    fn replacement_patterns(&mut self, source: &Map<String, Value>) {
        let Some(value) = source.get(REPLACEMENT_PATTERNS) else {
            return;
        };

        let mut patterns = Vec::new();
        for item in self.list_items(REPLACEMENT_PATTERNS, value) {
            match item {
                Value::Object(map)
                    if map.contains_key("pattern") && map.contains_key("replacement") =>
                {
                    patterns.push(ReplacementPattern {
                        pattern: map["pattern"].clone(),
                        replacement: map["replacement"].clone(),
                    })
                }
                other => self.warn(Warning::unrecognized_item(REPLACEMENT_PATTERNS, other)),
            }
        }

        debug!("Migrated {} replacement patterns", patterns.len());
        self.config.replacement_patterns = Some(patterns);
    }

    fn http_headers(&mut self, source: &Map<String, Value>) {
        let Some(value) = source.get(HTTP_HEADERS) else {
            return;
        };

        let mut groups = Vec::new();
        for group in self.list_items(HTTP_HEADERS, value) {
            // `urls` is the markdown-link-check key; `url` shows up in
            // configs that were already partially migrated.
            let Some(url) = list_field(group, "urls").or_else(|| list_field(group, "url")) else {
                self.warn(Warning::missing_urls(group));
                continue;
            };

            let Some(headers) = group.get("headers").and_then(Value::as_object) else {
                self.warn(Warning::missing_headers(group));
                continue;
            };

            self.warn(Warning::new(SECRET_HEADERS_ADVISORY));
            groups.push(HttpHeaderGroup {
                url: url.to_vec(),
                headers: headers.clone(),
            });
        }

        debug!("Migrated {} header groups", groups.len());
        // An empty list would read as "no headers configured", so drop the key.
        if !groups.is_empty() {
            self.config.http_headers = Some(groups);
        }
    }

    fn dirs(&mut self, source: &Map<String, Value>) {
        if self.config.has_targets() {
            return;
        }

        let (dirs, warning) = match source.get(FOLDER_PATH) {
            Some(Value::String(paths)) => (
                paths
                    .split(',')
                    .map(|p| Value::String(p.trim().to_string()))
                    .collect(),
                "Used 'folder-path' from JSON for 'dirs'. Review for correctness.",
            ),
            Some(Value::Array(paths)) => (
                paths.clone(),
                "Used 'folder-path' (list) from JSON for 'dirs'. Review for correctness.",
            ),
            Some(_) => (
                LinkspectorConfig::default_dirs(),
                "Added default 'dirs: [.]'. 'folder-path' in JSON was invalid.",
            ),
            None => (
                LinkspectorConfig::default_dirs(),
                "Added default 'dirs: [.]' as no 'dirs', 'files', or 'folder-path' found.",
            ),
        };

        self.config.dirs = Some(dirs);
        self.warn(Warning::new(warning));
    }

    fn use_git_ignore(&mut self) {
        if self.config.use_git_ignore.is_none() {
            self.config.use_git_ignore = Some(true);
        }
    }

    fn advisories(&mut self) {
        self.warn(Warning::new(HTML_COMMENT_ADVISORY));
        self.warn(Warning::new(WORKFLOW_INPUTS_ADVISORY));
    }
}

fn list_field<'a>(group: &'a Value, key: &str) -> Option<&'a [Value]> {
    group.get(key).and_then(Value::as_array).map(Vec::as_slice)
}
