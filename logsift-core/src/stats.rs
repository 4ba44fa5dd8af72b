use serde::{Deserialize, Serialize};

use crate::detector::extract_levels;

const ERROR_LEVELS: [&str; 3] = ["ERROR", "CRITICAL", "FATAL"];
const WARNING_LEVELS: [&str; 2] = ["WARN", "WARNING"];

/// Line and severity counts over the full (non-blank) line set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "lines")]
    pub line_count: usize,
    #[serde(rename = "errors")]
    pub error_count: usize,
    #[serde(rename = "warnings")]
    pub warning_count: usize,
}

/// Count lines and severity-level occurrences. Unlike detection, this runs
/// over every line with no sampling cap.
pub fn collect_stats(lines: &[String]) -> Stats {
    let levels = extract_levels(lines);
    Stats {
        line_count: lines.len(),
        error_count: levels
            .iter()
            .filter(|l| ERROR_LEVELS.contains(&l.as_str()))
            .count(),
        warning_count: levels
            .iter()
            .filter(|l| WARNING_LEVELS.contains(&l.as_str()))
            .count(),
    }
}
