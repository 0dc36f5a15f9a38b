use serde::Serialize;
use serde_json::Value;

/// Aggregate counters of the normalized report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: i64,
    pub comments: i64,
    pub critical: i64,
    pub warning: i64,
    pub info: i64,
}

/// One normalized review comment. `severity` is an opaque code, not an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub file: String,
    pub line: Option<i64>,
    pub severity: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub session_id: String,
    pub summary: Summary,
    pub reviews: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub error: String,
}

/// Result of normalizing one input document. Serializes untagged, so the
/// driver prints whichever variant it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    Report(Report),
    Failure(ParseFailure),
}

/// Normalize raw review-run JSON into the agent-facing shape.
///
/// Malformed text is converted into a `{"error": ...}` record, never
/// propagated as a fault.
pub fn normalize(input: &str) -> Normalized {
    match serde_json::from_str::<Value>(input) {
        Ok(data) => Normalized::Report(project(&data)),
        Err(e) => Normalized::Failure(ParseFailure {
            error: format!("Invalid JSON: {e}"),
        }),
    }
}

/// Project a parsed document into the output record. Missing or wrong-typed
/// fields take their defaults; a non-object top level yields the all-defaults
/// report.
fn project(data: &Value) -> Report {
    let stats = data.get("stats");
    Report {
        session_id: string_field(data.get("session_id"), "unknown"),
        summary: Summary {
            files: count_field(stats, "files_reviewed"),
            comments: count_field(stats, "total_comments"),
            critical: count_field(stats, "critical"),
            warning: count_field(stats, "warning"),
            info: count_field(stats, "info"),
        },
        reviews: data
            .get("reviews")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(project_entry).collect())
            .unwrap_or_default(),
    }
}

fn project_entry(entry: &Value) -> ReviewEntry {
    ReviewEntry {
        file: string_field(entry.get("file"), ""),
        line: entry.get("line").and_then(Value::as_i64),
        severity: string_field(entry.get("sev"), "i"),
        content: string_field(entry.get("content"), ""),
    }
}

fn string_field(value: Option<&Value>, default: &str) -> String {
    value.and_then(Value::as_str).unwrap_or(default).to_string()
}

fn count_field(stats: Option<&Value>, key: &str) -> i64 {
    stats
        .and_then(|s| s.get(key))
        .and_then(Value::as_i64)
        .unwrap_or(0)
}
