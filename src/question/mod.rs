//! Question workflow over tracker issues.
//!
//! This module extends a host issue tracker with a question-and-answer
//! workflow: questions are attached to issues, directed at a specific user
//! or at anyone, rendered into issue-level summaries, and closed once the
//! addressed user responds. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
