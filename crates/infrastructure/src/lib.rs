//! Verbs Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus process-level setup.

pub mod adapters;
pub mod logging;
pub mod serialization;

pub use adapters::ReqwestHttpClient;
pub use logging::init_tracing;
pub use serialization::{SerializationError, to_json_stable};
