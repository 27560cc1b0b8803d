//! Verbs Domain - Core types
//!
//! This crate defines the request, response, assertion and user types
//! shared by the rest of the workspace. All types here are pure Rust with
//! no I/O dependencies.

pub mod error;
pub mod request;
pub mod response;
pub mod testing;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use testing::{
    Assertion, AssertionResult, StatusExpectation, TestResults, TestSuite, ValueMatcher,
};
pub use user::User;
