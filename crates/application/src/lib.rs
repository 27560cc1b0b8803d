//! Verbs Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Request execution and response assertion
//! - The fluent given / when / then chain scenarios are written in

pub mod dsl;
pub mod error;
pub mod execute_request;
pub mod ports;
pub mod testing;

pub use error::{ScenarioError, ScenarioResult};
pub use execute_request::{ExecuteRequest, ExecuteRequestError, ExecuteResult};
pub use ports::{HttpClient, HttpClientError, HttpFuture};
pub use testing::TestRunner;
