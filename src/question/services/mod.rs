//! Application services for question workflow orchestration.

mod workflow;

pub use workflow::{QuestionWorkflowError, QuestionWorkflowResult, QuestionWorkflowService};
