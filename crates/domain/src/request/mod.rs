//! HTTP Request domain types

mod body;
mod header;
mod method;
mod path;
mod spec;

pub use body::{APPLICATION_JSON, RequestBody, RequestBodyKind};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use path::{PathParam, PathParams};
pub use spec::{DEFAULT_TIMEOUT_MS, RequestSpec};
