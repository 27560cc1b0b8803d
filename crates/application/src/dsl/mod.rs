//! Fluent given / when / then chain.
//!
//! ```ignore
//! let api = Api::new(Arc::new(ReqwestHttpClient::new()?), "https://restapi.wcaquino.me");
//!
//! given()
//!     .log_all()
//!     .content_type("application/json")
//!     .body(r#"{ "name" : "Lucas", "age" : 19 }"#)
//!     .when(&api)
//!     .post("/users")
//!     .await?
//!     .then()
//!     .log_all()
//!     .status_code(201)
//!     .body("id", not_null())
//!     .assert()?;
//! ```

mod api;
mod given;
mod log;
mod matchers;
mod then;
mod verify;

pub use api::Api;
pub use given::{RequestBuilder, Sender, given};
pub use matchers::{equal_to, is, not_null, null_value};
pub use then::{Extractor, ResponseValidator, ValidatableResponse};
pub use verify::{ObjectValidator, verify};
