//! Plain-text summarizer rendering one content excerpt per question.

use super::excerpt;
use crate::question::domain::Question;
use crate::question::ports::{QuestionSummarizer, SummaryConfig, SummaryResult};

/// Summarizer that joins per-question content excerpts with the configured
/// separator.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use querent::question::adapters::summary::PlainSummarizer;
/// use querent::question::domain::{IssueId, Question, QuestionAssignee};
/// use querent::question::ports::QuestionSummarizer;
///
/// let clock = DefaultClock;
/// let issue_id = IssueId::new();
/// let question = Question::open(issue_id, "Which branch?", QuestionAssignee::Anyone, &clock)
///     .expect("valid question");
///
/// let summarizer = PlainSummarizer::new();
/// let summary = summarizer.formatted_list(&[question]).expect("renders");
/// assert_eq!(summary, "Which branch?");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlainSummarizer {
    config: SummaryConfig,
}

impl PlainSummarizer {
    /// Creates a summarizer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a summarizer with the given configuration.
    #[must_use]
    pub const fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }
}

impl QuestionSummarizer for PlainSummarizer {
    fn formatted_list(&self, questions: &[Question]) -> SummaryResult<String> {
        let lines: Vec<String> = questions
            .iter()
            .map(|question| excerpt(question.content(), self.config.excerpt_chars))
            .collect();
        Ok(lines.join(&self.config.separator))
    }
}
