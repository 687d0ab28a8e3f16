//! Image analysis and listing copy returned by `POST /analyze`
//!
//! The backend passes the language model's JSON through without a schema, so
//! any field may be null, a list, an object or missing. Both halves are kept
//! as raw JSON: the summary renders whatever is there, and `POST /draft`
//! gets the values back exactly as they arrived.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{analysis, listing}` pair produced by one analyze call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub analysis: Value,
    pub listing: Value,
}

impl AnalysisResult {
    /// Fixed, ordered text summary. Bullets and tags keep backend order.
    pub fn summary(&self) -> String {
        let a = &self.analysis;
        let l = &self.listing;
        let bullets = items(l, "bullets")
            .iter()
            .map(|b| format!("• {b}"))
            .collect::<Vec<_>>()
            .join("\n");

        [
            format!("THEME:\n{}", text(a, "theme")),
            format!("STYLE:\n{}", text(a, "style")),
            format!("MOOD:\n{}", text(a, "mood")),
            format!("AUDIENCE:\n{}", text(a, "target_audience")),
            format!("CAPTION:\n{}", text(a, "caption")),
            format!("TITLE:\n{}", text(l, "title")),
            format!("BULLETS:\n{bullets}"),
            format!("TAGS:\n{}", items(l, "tags").join(", ")),
            format!("DESCRIPTION:\n{}", text(l, "description")),
        ]
        .join("\n\n")
    }
}

/// Display text of `record[key]`: strings verbatim, null or missing as empty,
/// anything else as compact JSON.
pub fn text(record: &Value, key: &str) -> String {
    record.get(key).map(display).unwrap_or_default()
}

/// Display items of `record[key]`: each list element through [`text`] rules,
/// a lone scalar as a single item, null or missing as none.
pub fn items(record: &Value, key: &str) -> Vec<String> {
    match record.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(values)) => values.iter().map(display).collect(),
        Some(other) => vec![display(other)],
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
