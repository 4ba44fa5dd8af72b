use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chat::{ChatMessage, ChatProvider};
use crate::chunker::chunk_text;
use crate::detector::{detect_log_types, DetectedFormat};
use crate::fingerprint::fingerprint;
use crate::prompts;
use crate::stats::{collect_stats, Stats};

/// Chunking and sampling policy for one analysis request. Immutable once
/// selected from the mode name.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub chunk_size: usize,
    pub overlap: usize,
    pub max_chunks: usize,
    pub temperature: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chunk_size: 2000,
            overlap: 200,
            max_chunks: 8,
            temperature: 0.2,
        }
    }
}

impl AnalysisConfig {
    /// Map a mode name to its preset. Unknown modes (including "standard")
    /// get the default policy.
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "quick" => Self {
                chunk_size: 2500,
                overlap: 200,
                max_chunks: 3,
                ..Self::default()
            },
            "deep" => Self {
                chunk_size: 1500,
                overlap: 300,
                max_chunks: 12,
                temperature: 0.1,
            },
            _ => Self::default(),
        }
    }
}

/// Full result of one analysis request. Request-scoped; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub mode: String,
    pub detected_types: Vec<DetectedFormat>,
    pub stats: Stats,
    pub chunk_count: usize,
    pub report: String,
    pub chunk_summaries: Vec<String>,
}

/// Drives the detection, chunking and chat pipeline for raw log text.
pub struct Analyzer {
    provider: Box<dyn ChatProvider>,
}

impl Analyzer {
    pub fn new(provider: Box<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Run the full pipeline: detect formats and stats over the non-blank
    /// lines, chunk the raw text under the mode's policy, request one summary
    /// per chunk in order, then synthesize a single report.
    ///
    /// Any chat-service failure aborts the whole request; summaries already
    /// collected are discarded.
    pub async fn analyze(
        &self,
        text: &str,
        log_type_hint: Option<&str>,
        mode: &str,
    ) -> Result<AnalysisResult> {
        // Detection and stats see the filtered non-blank lines; chunking
        // below runs over the raw original text. Intentional asymmetry.
        let lines: Vec<String> = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.to_string())
            .collect();

        let detected = detect_log_types(&lines);
        let stats = collect_stats(&lines);
        info!(
            "Analyzing {} non-blank lines, mode={}, detected {} candidate formats",
            stats.line_count,
            mode,
            detected.len()
        );

        let config = AnalysisConfig::for_mode(mode);
        let mut chunks = chunk_text(text, config.chunk_size, config.overlap);
        chunks.truncate(config.max_chunks);
        debug!("Segmented input into {} chunks", chunks.len());

        let type_context = log_type_hint
            .map(|h| h.to_string())
            .or_else(|| detected.first().map(|d| d.name.clone()))
            .unwrap_or_else(|| "unknown".to_string());
        let stats_context = prompts::stats_context(&stats);

        let mut chunk_summaries = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            let messages = vec![
                ChatMessage::system(prompts::SYSTEM_PROMPT),
                ChatMessage::user(prompts::chunk_prompt(
                    &type_context,
                    &stats_context,
                    idx + 1,
                    chunks.len(),
                    chunk,
                )),
            ];
            debug!("Requesting summary for chunk {}/{}", idx + 1, chunks.len());
            let summary = self.provider.chat(&messages, config.temperature).await?;
            chunk_summaries.push(summary.trim().to_string());
        }

        let synthesis_messages = vec![
            ChatMessage::system(prompts::SYSTEM_PROMPT),
            ChatMessage::user(prompts::synthesis_prompt(
                &type_context,
                &stats_context,
                &chunk_summaries,
            )),
        ];
        let report = self
            .provider
            .chat(&synthesis_messages, config.temperature)
            .await?;
        info!("Analysis complete: {} chunk summaries", chunk_summaries.len());

        Ok(AnalysisResult {
            id: fingerprint(text),
            mode: mode.to_string(),
            detected_types: detected,
            stats,
            chunk_count: chunks.len(),
            report: report.trim().to_string(),
            chunk_summaries,
        })
    }
}
