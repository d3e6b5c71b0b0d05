//! Summarizer port for rendering question collections as display text.

use crate::question::domain::Question;
use std::sync::Arc;
use thiserror::Error;

/// Result type for summary rendering operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Port for rendering a collection of questions into a single summary
/// string.
///
/// Implementations render one line per question and join the lines with the
/// configured separator. An empty collection renders as the empty string.
pub trait QuestionSummarizer: Send + Sync {
    /// Renders the given questions as a single summary string.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Render`] when the rendering backend fails,
    /// for example on a malformed template.
    fn formatted_list(&self, questions: &[Question]) -> SummaryResult<String>;
}

/// Errors returned by summarizer implementations.
#[derive(Debug, Clone, Error)]
pub enum SummaryError {
    /// Rendering-backend failure.
    #[error("summary rendering error: {0}")]
    Render(Arc<dyn std::error::Error + Send + Sync>),
}

impl SummaryError {
    /// Wraps a rendering error.
    pub fn render(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(err))
    }
}

/// Configuration for summary rendering.
///
/// # Examples
///
/// ```
/// use querent::question::ports::summarizer::SummaryConfig;
///
/// let config = SummaryConfig::default();
/// assert_eq!(config.excerpt_chars, 120);
/// assert_eq!(config.separator, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Maximum number of characters of question content to render per
    /// question. Longer content is cut at a character boundary.
    pub excerpt_chars: usize,
    /// Separator inserted between rendered questions.
    pub separator: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            excerpt_chars: 120,
            separator: "\n".to_owned(),
        }
    }
}
