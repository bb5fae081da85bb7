//! # vulnscout-core
//!
//! Domain logic for summarizing vulnerability-scanner output.
//!
//! This crate is consumed by the host-facing `vulnscout-native` boundary
//! crate. It has zero dependencies on OS APIs, display servers, or the C
//! ABI: everything here is pure CPU work over byte buffers, which keeps
//! it trivially reentrant and testable on any platform.
//!
//! # What does the summarizer do? (for beginners)
//!
//! Vulnerability scanners such as nuclei emit their findings as a JSON
//! array. Each element is one finding, and its metadata lives in a
//! nested `info` object:
//!
//! ```json
//! [
//!   {"template-id": "cve-2021-44228", "info": {"severity": "critical"}},
//!   {"template-id": "tech-detect",    "info": {"severity": "info"}}
//! ]
//! ```
//!
//! The host only needs one number out of this document: how many
//! findings are `critical`. The [`summarize`] function parses the
//! document, counts the critical entries, and renders a one-field JSON
//! reply the host can consume without parsing the full scan itself.

pub mod findings;

// Re-export the most-used items at the crate root so callers can write
// `vulnscout_core::summarize` instead of `vulnscout_core::findings::summarize`.
pub use findings::{count_critical, summarize, FindingSummary, INVALID_JSON, SEVERITY_CRITICAL};
