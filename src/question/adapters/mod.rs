//! Adapter implementations for the question workflow ports.
//!
//! Concrete implementations of the [`QuestionRepository`] and
//! [`QuestionSummarizer`] ports. Adapters own all infrastructure concerns
//! while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryQuestionRepository`]: Thread-safe in-memory storage
//!   for unit testing
//! - [`postgres::PostgresQuestionRepository`]: `PostgreSQL` persistence
//!   using Diesel ORM
//! - [`summary::PlainSummarizer`] and [`summary::TemplateSummarizer`]:
//!   renderers backing the summarizer port
//!
//! [`QuestionRepository`]: crate::question::ports::repository::QuestionRepository
//! [`QuestionSummarizer`]: crate::question::ports::summarizer::QuestionSummarizer

pub mod memory;
pub mod postgres;
pub mod summary;
