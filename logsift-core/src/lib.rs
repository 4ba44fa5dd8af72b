// Logsift Library - Core log analysis functionality
//
// Detects the format of raw log text, computes line/severity statistics,
// splits the text into bounded overlapping chunks, and orchestrates an
// external chat-completion service into a single analysis report.

pub mod analyzer;
pub mod chat;
pub mod chunker;
pub mod config;
pub mod detector;
pub mod fingerprint;
pub mod input;
pub mod prompts;
pub mod stats;

pub use analyzer::{AnalysisConfig, AnalysisResult, Analyzer};
pub use chat::{ChatError, ChatMessage, ChatProvider, OllamaClient};
pub use chunker::chunk_text;
pub use config::ChatConfig;
pub use detector::{
    detect_log_types, detect_log_types_sampled, extract_levels, extract_timestamps,
    DetectedFormat, LogFormat, DEFAULT_SAMPLE_LINES,
};
pub use fingerprint::fingerprint;
pub use input::decode_log_bytes;
pub use stats::{collect_stats, Stats};
