use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default number of leading lines sampled for format detection.
pub const DEFAULT_SAMPLE_LINES: usize = 200;

lazy_static! {
    static ref SYSLOG_RE: Regex = Regex::new(
        r"^(?P<ts>[A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2})\s+(?P<host>\S+)\s+(?P<proc>[^:]+):\s+(?P<msg>.*)$"
    )
    .unwrap();
    static ref ISO_TS_RE: Regex = Regex::new(
        r"^(?P<ts>\d{4}-\d{2}-\d{2}[T\s]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?)"
    )
    .unwrap();
    static ref NGINX_RE: Regex = Regex::new(
        r#"^(?P<ip>\d{1,3}(?:\.\d{1,3}){3})\s+-\s+\S+\s+\[(?P<ts>[^\]]+)\]\s+"(?P<method>\S+)\s+(?P<path>[^\s]+)\s+\S+"\s+(?P<status>\d{3})\s+(?P<size>\d+|-)(?:\s+"(?P<referrer>[^"]*)"\s+"(?P<agent>[^"]*)")?.*$"#
    )
    .unwrap();
    static ref APACHE_COMBINED_RE: Regex = Regex::new(
        r#"^(?P<ip>\d{1,3}(?:\.\d{1,3}){3})\s+\S+\s+\S+\s+\[(?P<ts>[^\]]+)\]\s+"(?P<method>\S+)\s+(?P<path>[^\s]+)\s+\S+"\s+(?P<status>\d{3})\s+(?P<size>\d+|-)\s+"(?P<referrer>[^"]*)"\s+"(?P<agent>[^"]*)".*$"#
    )
    .unwrap();
    static ref WINDOWS_EVENT_RE: Regex = Regex::new(
        r"(?i)^\s*(?P<level>Information|Warning|Error|Critical)\s+\d{1,2}/\d{1,2}/\d{4}\s+\d{1,2}:\d{2}:\d{2}\s+(?P<source>.+?)\s+Event\s+ID\s+(?P<id>\d+)\s+.*$"
    )
    .unwrap();
    static ref LEVEL_RE: Regex =
        Regex::new(r"(?i)\b(INFO|WARN|WARNING|ERROR|CRITICAL|FATAL|DEBUG|TRACE)\b").unwrap();
}

/// The fixed set of log dialects the detector can recognize.
///
/// `IsoTimestamped` is a deliberate superset check: many lines of the more
/// specific formats also begin with an ISO timestamp, so it often scores high
/// alongside them. The detector reports every plausible format with a score
/// rather than forcing a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Syslog,
    NginxAccess,
    ApacheAccess,
    WindowsEvent,
    IsoTimestamped,
}

impl LogFormat {
    /// Candidate order. Ties in confidence keep this order after ranking.
    pub const ALL: [LogFormat; 5] = [
        LogFormat::Syslog,
        LogFormat::NginxAccess,
        LogFormat::ApacheAccess,
        LogFormat::WindowsEvent,
        LogFormat::IsoTimestamped,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LogFormat::Syslog => "syslog",
            LogFormat::NginxAccess => "nginx_access",
            LogFormat::ApacheAccess => "apache_access",
            LogFormat::WindowsEvent => "windows_event",
            LogFormat::IsoTimestamped => "iso_timestamped",
        }
    }

    pub fn matcher(&self) -> &'static Regex {
        match self {
            LogFormat::Syslog => &SYSLOG_RE,
            LogFormat::NginxAccess => &NGINX_RE,
            LogFormat::ApacheAccess => &APACHE_COMBINED_RE,
            LogFormat::WindowsEvent => &WINDOWS_EVENT_RE,
            LogFormat::IsoTimestamped => &ISO_TS_RE,
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.matcher().is_match(line)
    }
}

/// One format that matched at least one sampled line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedFormat {
    pub name: String,
    pub confidence: f64,
    pub sample: String,
}

fn confidence(match_count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (match_count as f64 / total as f64).min(1.0)
}

/// Detect plausible log formats from the first [`DEFAULT_SAMPLE_LINES`] lines.
pub fn detect_log_types(lines: &[String]) -> Vec<DetectedFormat> {
    detect_log_types_sampled(lines, DEFAULT_SAMPLE_LINES)
}

/// Detect plausible log formats, sampling non-blank lines within the first
/// `max_lines` lines of input. Returns an empty list when the sample is empty.
pub fn detect_log_types_sampled(lines: &[String], max_lines: usize) -> Vec<DetectedFormat> {
    let sample: Vec<&str> = lines
        .iter()
        .take(max_lines)
        .map(|l| l.as_str())
        .filter(|l| !l.trim().is_empty())
        .collect();
    let total = sample.len();
    if total == 0 {
        return vec![];
    }

    let mut detected: Vec<DetectedFormat> = Vec::new();
    for format in LogFormat::ALL {
        let matcher = format.matcher();
        let count = sample.iter().filter(|l| matcher.is_match(l)).count();
        if count == 0 {
            continue;
        }
        detected.push(DetectedFormat {
            name: format.name().to_string(),
            confidence: confidence(count, total),
            sample: sample_for(format, &sample),
        });
    }

    // Stable sort keeps candidate order for equal confidences.
    detected.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    detected
}

fn sample_for(format: LogFormat, sample: &[&str]) -> String {
    let matcher = format.matcher();
    sample
        .iter()
        .find(|l| matcher.is_match(l))
        .or_else(|| sample.first())
        .map(|l| l.to_string())
        .unwrap_or_default()
}

/// Extract the severity level of each line that carries one, uppercased.
/// At most one level per line; the first whole-word match wins.
pub fn extract_levels(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| LEVEL_RE.captures(line))
        .map(|caps| caps[1].to_uppercase())
        .collect()
}

/// Parse ISO-8601-style timestamps at the start of the first `max_lines`
/// lines. A trailing `Z` is treated as UTC; captures that fail to parse as a
/// valid calendar timestamp are skipped.
pub fn extract_timestamps(lines: &[String], max_lines: usize) -> Vec<DateTime<Utc>> {
    lines
        .iter()
        .take(max_lines)
        .filter_map(|line| ISO_TS_RE.captures(line))
        .filter_map(|caps| parse_iso_timestamp(&caps["ts"]))
        .collect()
}

fn parse_iso_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let normalized = if let Some(stripped) = raw.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        raw.to_string()
    };

    // %#z accepts offsets with or without a colon; %.f an optional fraction.
    const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(dt.and_utc());
        }
    }
    None
}
