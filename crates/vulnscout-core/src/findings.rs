//! Critical-finding counting over scanner JSON output.
//!
//! # Wire format
//!
//! The reply formats are byte-specified because the host compares and
//! logs them verbatim:
//!
//! - success: `{"critical_findings": N}` (single space after the colon)
//! - parse failure: `{"error": "Invalid JSON"}`
//!
//! `serde_json::to_string` emits compact JSON with no space after the
//! colon, so the replies are rendered by construction instead; parsing
//! still goes through serde_json.
//!
//! # Shape tolerance
//!
//! Only one failure is recognised: input that is not valid JSON. Every
//! structural deviation after a successful parse (non-array root,
//! non-object elements, missing `info`, non-string `severity`) counts
//! as zero matches, not as an error. Scanners routinely interleave
//! partial records into their output and the host wants a best-effort
//! count, not a validation report.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// The severity class counted by the summarizer.
///
/// Matched byte-exact and case-sensitive: `Critical`, `CRITICAL`, and
/// `critical ` (trailing space) are all different strings and do not
/// count.
pub const SEVERITY_CRITICAL: &str = "critical";

/// The in-band reply for input that is not valid JSON.
pub const INVALID_JSON: &str = "{\"error\": \"Invalid JSON\"}";

/// Summary of one scanner document.
///
/// The counter is `i32` to match the width the host expects; a scan
/// with more than two billion critical findings is not a plausible
/// input and overflow is not handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSummary {
    /// Number of top-level elements whose `info.severity` is `critical`.
    pub critical_findings: i32,
}

impl FindingSummary {
    /// Renders the exact wire string, e.g. `{"critical_findings": 3}`.
    pub fn to_json(&self) -> String {
        format!("{{\"critical_findings\": {}}}", self.critical_findings)
    }
}

/// Counts top-level array elements whose `info.severity` equals
/// [`SEVERITY_CRITICAL`].
///
/// A non-array root returns 0. `Value::get` returns `None` on
/// non-object values, so non-object elements and a non-object `info`
/// fall through the same path as a missing field.
pub fn count_critical(root: &Value) -> i32 {
    let Some(items) = root.as_array() else {
        return 0;
    };

    items
        .iter()
        .filter(|item| {
            item.get("info")
                .and_then(|info| info.get("severity"))
                .and_then(Value::as_str)
                == Some(SEVERITY_CRITICAL)
        })
        .count() as i32
}

/// Summarizes one scanner document.
///
/// Parses `input` as JSON and returns the wire-format reply:
/// `{"critical_findings": N}` on a successful parse, or the
/// [`INVALID_JSON`] payload if the bytes are not valid JSON (including
/// invalid UTF-8). The result is always a freshly owned `String`, so
/// both outcomes share one allocation convention.
pub fn summarize(input: &[u8]) -> String {
    let root: Value = match serde_json::from_slice(input) {
        Ok(value) => value,
        Err(e) => {
            debug!("scanner output is not valid JSON: {e}");
            return INVALID_JSON.to_string();
        }
    };

    let summary = FindingSummary {
        critical_findings: count_critical(&root),
    };
    debug!(critical_findings = summary.critical_findings, "summarized scanner output");
    summary.to_json()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
