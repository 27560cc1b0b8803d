//! Response testing.
//!
//! This module provides the test runner that executes assertions against HTTP responses.

mod json_path;
mod runner;

pub use json_path::query as query_json_path;
pub use runner::TestRunner;
