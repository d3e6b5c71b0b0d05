//! Summarizer adapter implementations.
//!
//! Two renderers back the summarizer port: a plain-text excerpt list and a
//! template-driven variant for hosts that control presentation.

mod plain;
mod template;

pub use plain::PlainSummarizer;
pub use template::TemplateSummarizer;

/// Cuts content at a character boundary, never mid-character.
fn excerpt(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}
