//! CLI integration tests.

mod common;
mod plan_tests;
mod sync_tests;
