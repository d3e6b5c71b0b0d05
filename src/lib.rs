//! Querent: question-and-answer workflow for issue trackers.
//!
//! This crate extends a host issue tracker with questions that live on
//! issues: posing them to a specific user or to anyone, summarising them
//! for display on the issue, checking whether a user owes an answer, and
//! closing them once that user responds.
//!
//! # Architecture
//!
//! Querent follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, rendering)
//!
//! # Modules
//!
//! - [`question`]: Question lifecycle, pending checks, and summaries

pub mod question;
