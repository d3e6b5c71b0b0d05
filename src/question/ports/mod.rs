//! Port contracts for the question workflow.
//!
//! Ports define infrastructure-agnostic interfaces used by question
//! services: persistence on one side, summary rendering on the other.

pub mod repository;
pub mod summarizer;

pub use repository::{QuestionRepository, QuestionRepositoryError, QuestionRepositoryResult};
pub use summarizer::{QuestionSummarizer, SummaryConfig, SummaryError, SummaryResult};
