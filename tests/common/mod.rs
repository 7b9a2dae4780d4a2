// Shared test helpers for trac2markdown.

use std::fs;
use std::path::Path;

/// A fixture's raw input, expected Markdown and parameters.
pub struct Fixture {
    pub input: String,
    pub expected_md: String,
    pub params: serde_json::Value,
}

impl Fixture {
    /// A string parameter from `index.json`, if present.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(|v| v.as_str())
    }

    /// The `ticket` number parameter. Panics if missing.
    pub fn ticket(&self) -> u32 {
        self.params
            .get("ticket")
            .and_then(|v| v.as_u64())
            .map(|n| n as u32)
            .expect("fixture needs a numeric `ticket` in index.json")
    }

    /// The `authors` list parameter, empty if missing.
    pub fn authors(&self) -> Vec<String> {
        self.params
            .get("authors")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Load a test fixture's input, expected Markdown, and parameters.
///
/// Fixture directories contain `index.<ext>`, `index.md`, and optionally `index.json`.
pub fn load_fixture(name: &str, ext: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let input = fs::read_to_string(base.join(format!("index.{}", ext)))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.{}", name, ext));
    let expected_md = fs::read_to_string(base.join("index.md"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.md", name));

    let params = fs::read_to_string(base.join("index.json"))
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or(serde_json::Value::Null);

    Fixture { input, expected_md, params }
}
