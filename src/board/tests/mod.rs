//! Unit tests for the board module.
//!
//! Tests are organised by domain concept, covering happy paths, error cases,
//! and edge cases. Shared clocks, mocks, and builders live in `support`.

mod support;
mod transition_tests;
