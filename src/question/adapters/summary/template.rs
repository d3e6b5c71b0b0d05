//! Template-driven summarizer backed by minijinja.

use minijinja::Environment;
use serde_json::{Map, Value};

use super::excerpt;
use crate::question::domain::Question;
use crate::question::ports::{QuestionSummarizer, SummaryConfig, SummaryError, SummaryResult};

/// Summarizer that renders each question through a minijinja template.
///
/// The template is rendered once per question with `content`, `excerpt`,
/// `status`, and `assignee` bound; rendered lines are joined with the
/// configured separator.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use querent::question::adapters::summary::TemplateSummarizer;
/// use querent::question::domain::{IssueId, Question, QuestionAssignee};
/// use querent::question::ports::QuestionSummarizer;
///
/// let clock = DefaultClock;
/// let question = Question::open(
///     IssueId::new(),
///     "Which branch?",
///     QuestionAssignee::Anyone,
///     &clock,
/// )
/// .expect("valid question");
///
/// let summarizer = TemplateSummarizer::new("[{{ status }}] {{ excerpt }}");
/// let summary = summarizer.formatted_list(&[question]).expect("renders");
/// assert_eq!(summary, "[open] Which branch?");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateSummarizer {
    template: String,
    config: SummaryConfig,
}

impl TemplateSummarizer {
    /// Creates a summarizer rendering the given template per question.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            config: SummaryConfig::default(),
        }
    }

    /// Creates a summarizer with an explicit configuration.
    #[must_use]
    pub fn with_config(template: impl Into<String>, config: SummaryConfig) -> Self {
        Self {
            template: template.into(),
            config,
        }
    }

    fn render_question(
        &self,
        environment: &Environment<'_>,
        question: &Question,
    ) -> SummaryResult<String> {
        let context = build_question_context(question, self.config.excerpt_chars);
        environment
            .render_str(&self.template, context)
            .map_err(SummaryError::render)
    }
}

impl QuestionSummarizer for TemplateSummarizer {
    fn formatted_list(&self, questions: &[Question]) -> SummaryResult<String> {
        let environment = Environment::new();
        let mut lines = Vec::with_capacity(questions.len());
        for question in questions {
            lines.push(self.render_question(&environment, question)?);
        }
        Ok(lines.join(&self.config.separator))
    }
}

fn build_question_context(question: &Question, excerpt_chars: usize) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert(
        "content".to_owned(),
        Value::String(question.content().to_owned()),
    );
    context.insert(
        "excerpt".to_owned(),
        Value::String(excerpt(question.content(), excerpt_chars)),
    );
    context.insert(
        "status".to_owned(),
        Value::String(question.status().to_string()),
    );
    context.insert(
        "assignee".to_owned(),
        Value::String(question.assignee().to_string()),
    );
    context
}
