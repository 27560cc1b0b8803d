//! JSON helpers for reports written by the runner.
//!
//! Output is stable across runs: 2-space indentation, struct field order,
//! trailing newline.

mod json;

pub use json::{SerializationError, to_json_stable};
