//! Unit tests for the question module.
//!
//! Tests are organised by layer, covering happy paths, error cases, and
//! edge cases for all public APIs.
