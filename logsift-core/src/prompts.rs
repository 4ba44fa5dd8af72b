use crate::stats::Stats;

/// Fixed role instruction sent with every chat request.
pub const SYSTEM_PROMPT: &str = "You are a security log analysis assistant for a SIEM lab. \
    Analyze logs for anomalies, errors, security events, and operational issues. \
    Return concise bullet points with evidence (timestamps, IPs, users, event IDs).";

/// One-line stats summary shared by every request in an analysis.
pub fn stats_context(stats: &Stats) -> String {
    format!(
        "Total lines: {}. Errors: {}. Warnings: {}.",
        stats.line_count, stats.error_count, stats.warning_count
    )
}

/// User prompt for a single chunk analysis request.
pub fn chunk_prompt(
    type_context: &str,
    stats_context: &str,
    index: usize,
    total: usize,
    chunk: &str,
) -> String {
    format!(
        "Log type: {}\nStats: {}\nChunk {}/{}:\n{}\n\n\
         Identify issues, anomalies, or suspicious patterns. \
         If you see likely causes, call them out with short reasoning.",
        type_context, stats_context, index, total, chunk
    )
}

/// User prompt for the final synthesis request combining all chunk summaries.
pub fn synthesis_prompt(type_context: &str, stats_context: &str, summaries: &[String]) -> String {
    format!(
        "Log type: {}\nStats: {}\n\
         Combine the chunk analyses into a single report with sections: \n\
         1) High-priority findings\n2) Notable anomalies\n3) Operational issues\n4) Suggested next steps\n\
         Chunk analyses:\n{}",
        type_context,
        stats_context,
        summaries.join("\n\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_prompt_carries_index_and_total() {
        let prompt = chunk_prompt("syslog", "Total lines: 3. Errors: 1. Warnings: 0.", 2, 5, "payload");
        assert!(prompt.contains("Chunk 2/5:"));
        assert!(prompt.contains("Log type: syslog"));
        assert!(prompt.contains("payload"));
    }

    #[test]
    fn test_synthesis_prompt_joins_summaries_in_order() {
        let summaries = vec!["first".to_string(), "second".to_string()];
        let prompt = synthesis_prompt("unknown", "Total lines: 0. Errors: 0. Warnings: 0.", &summaries);
        assert!(prompt.contains("first\n\nsecond"));
        assert!(prompt.contains("High-priority findings"));
    }
}
