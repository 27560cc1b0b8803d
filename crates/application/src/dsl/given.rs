//! The `given` / `when` half of the chain: building and sending a request.

use serde::Serialize;
use serde_json::Value;
use verbs_domain::DomainError;
use verbs_domain::request::{Header, Headers, HttpMethod, PathParams, RequestBody, RequestSpec};

use super::api::Api;
use super::log::log_request;
use super::then::ValidatableResponse;
use crate::error::{ScenarioError, ScenarioResult};
use crate::ports::HttpClient;

/// Content type used for raw text bodies when none is set explicitly.
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Starts a request chain.
#[must_use]
pub fn given() -> RequestBuilder {
    RequestBuilder::default()
}

/// Request under construction.
///
/// Body encoding errors are held until the request is sent so the chain
/// stays linear.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    headers: Headers,
    body: RequestBody,
    body_error: Option<DomainError>,
    path_params: PathParams,
    timeout_ms: Option<u64>,
    log: bool,
}

impl RequestBuilder {
    /// Logs the full request when it is sent.
    #[must_use]
    pub const fn log_all(mut self) -> Self {
        self.log = true;
        self
    }

    /// Sets the `Content-Type` header.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.headers.set("Content-Type", content_type);
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Sends `text` verbatim as the body.
    #[must_use]
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body = RequestBody::raw(TEXT_PLAIN, text);
        self.body_error = None;
        self
    }

    /// Sends the key/value pairs as a JSON object.
    #[must_use]
    pub fn body_map<K, I>(self, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        self.with_encoded_body(RequestBody::from_map(entries))
    }

    /// Sends `value` serialized as JSON.
    #[must_use]
    pub fn body_object<T: Serialize + ?Sized>(self, value: &T) -> Self {
        self.with_encoded_body(RequestBody::from_object(value))
    }

    fn with_encoded_body(mut self, body: Result<RequestBody, DomainError>) -> Self {
        match body {
            Ok(body) => {
                self.body = body;
                self.body_error = None;
            }
            Err(e) => self.body_error = Some(e),
        }
        self
    }

    /// Binds a `{name}` placeholder in the path.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.set(name, value.to_string());
        self
    }

    /// Overrides the API's default timeout for this request.
    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Moves to the `when` step against `api`.
    #[must_use]
    pub fn when<C: HttpClient>(self, api: &Api<C>) -> Sender<'_, C> {
        Sender { api, request: self }
    }

    /// Resolves the path and assembles the final request, returning it with the log flag.
    pub(crate) fn build(
        self,
        base: &Api<impl HttpClient>,
        method: HttpMethod,
        path: &str,
        positional: &[&str],
    ) -> Result<(RequestSpec, bool), DomainError> {
        if let Some(e) = self.body_error {
            return Err(e);
        }
        let path = self.path_params.resolve(path, positional)?;

        let mut spec = RequestSpec::new(method, base.url_for(&path));
        spec.headers = self.headers;
        spec.body = self.body;
        spec.timeout_ms = self.timeout_ms.unwrap_or_else(|| base.timeout_ms());
        Ok((spec, self.log))
    }
}

/// The `when` step: picks the verb and sends.
pub struct Sender<'a, C: HttpClient> {
    api: &'a Api<C>,
    request: RequestBuilder,
}

impl<C: HttpClient> Sender<'_, C> {
    /// Sends a GET to `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn get(self, path: &str) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Get, path, &[]).await
    }

    /// Sends a POST to `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn post(self, path: &str) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Post, path, &[]).await
    }

    /// Sends a PUT to `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn put(self, path: &str) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Put, path, &[]).await
    }

    /// Sends a PUT to `path`, filling placeholders from `params` in order.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn put_with(self, path: &str, params: &[&str]) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Put, path, params).await
    }

    /// Sends a GET to `path`, filling placeholders from `params` in order.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn get_with(self, path: &str, params: &[&str]) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Get, path, params).await
    }

    /// Sends a POST to `path`, filling placeholders from `params` in order.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn post_with(self, path: &str, params: &[&str]) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Post, path, params).await
    }

    /// Sends a DELETE to `path`, filling placeholders from `params` in order.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn delete_with(
        self,
        path: &str,
        params: &[&str],
    ) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Delete, path, params).await
    }

    /// Sends a PATCH to `path`, filling placeholders from `params` in order.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn patch_with(self, path: &str, params: &[&str]) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Patch, path, params).await
    }

    /// Sends a PATCH to `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn patch(self, path: &str) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Patch, path, &[]).await
    }

    /// Sends a DELETE to `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn delete(self, path: &str) -> ScenarioResult<ValidatableResponse> {
        self.send(HttpMethod::Delete, path, &[]).await
    }

    /// Builds and sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Request`] if the request cannot be built and
    /// [`ScenarioError::Transport`] if no response is received. Any status
    /// code is a response.
    pub async fn send(
        self,
        method: HttpMethod,
        path: &str,
        positional: &[&str],
    ) -> ScenarioResult<ValidatableResponse> {
        let (spec, log) = self.request.build(self.api, method, path, positional)?;
        if log {
            log_request(&spec);
        }

        let response = self
            .api
            .executor()
            .execute(&spec)
            .await
            .map_err(ScenarioError::from)?;

        Ok(ValidatableResponse::new(spec, response))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::execute_request::tests::MockHttpClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use verbs_domain::User;

    const BASE: &str = "https://restapi.wcaquino.me";

    fn last_sent(client: &MockHttpClient) -> RequestSpec {
        client.last_request().expect("request sent")
    }

    fn mock_api(status: u16, body: &str) -> (Arc<MockHttpClient>, Api<MockHttpClient>) {
        let client = Arc::new(MockHttpClient::json(status, body));
        let api = Api::new(Arc::clone(&client), BASE);
        (client, api)
    }

    #[tokio::test]
    async fn test_raw_body_with_content_type() {
        let (client, api) = mock_api(201, r#"{"id":1,"name":"Lucas","age":19}"#);

        let result = given()
            .log_all()
            .content_type("application/json")
            .body(r#"{ "name" : "Lucas", "age" : 19 }"#)
            .when(&api)
            .post("/users")
            .await;
        assert!(result.is_ok());

        let sent = last_sent(&client);
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://restapi.wcaquino.me/users");
        assert_eq!(sent.content_type(), Some("application/json"));
        assert_eq!(sent.body.content, r#"{ "name" : "Lucas", "age" : 19 }"#);
    }

    #[tokio::test]
    async fn test_raw_body_defaults_to_text() {
        let (client, api) = mock_api(200, "{}");

        let _ = given().body("hello").when(&api).post("/echo").await;

        let sent = last_sent(&client);
        assert_eq!(sent.content_type(), Some(TEXT_PLAIN));
    }

    #[tokio::test]
    async fn test_map_body() {
        let (client, api) = mock_api(201, "{}");

        let _ = given()
            .body_map([("name", json!("Batman Via Map")), ("age", json!(30))])
            .when(&api)
            .post("/users")
            .await;

        let sent = last_sent(&client);
        assert_eq!(sent.body.content, r#"{"name":"Batman Via Map","age":30}"#);
        assert_eq!(sent.content_type(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_object_body() {
        let (client, api) = mock_api(201, "{}");

        let _ = given()
            .body_object(&User::new("Usuário via objeto", 20))
            .when(&api)
            .post("/users")
            .await;

        let sent = last_sent(&client);
        assert_eq!(sent.body.content, r#"{"name":"Usuário via objeto","age":20}"#);
    }

    #[tokio::test]
    async fn test_later_body_replaces_failed_encoding() {
        let (client, api) = mock_api(201, "{}");
        let unencodable: std::collections::BTreeMap<(u8, u8), u8> = [((1, 2), 3)].into();

        let result = given()
            .body_object(&unencodable)
            .body(r#"{ "age" : 19 }"#)
            .when(&api)
            .post("/users")
            .await;

        assert!(result.is_ok());
        let sent = last_sent(&client);
        assert_eq!(sent.body.content, r#"{ "age" : 19 }"#);
    }

    #[tokio::test]
    async fn test_failed_encoding_is_not_sent() {
        let (client, api) = mock_api(201, "{}");
        let unencodable: std::collections::BTreeMap<(u8, u8), u8> = [((1, 2), 3)].into();

        let result = given().body_object(&unencodable).when(&api).post("/users").await;

        assert!(matches!(
            result,
            Err(ScenarioError::Request(DomainError::InvalidBody(_)))
        ));
        assert!(client.last_request().is_none());
    }

    #[tokio::test]
    async fn test_named_path_params() {
        let (client, api) = mock_api(200, "{}");

        let _ = given()
            .path_param("entity", "users")
            .path_param("userId", 1)
            .when(&api)
            .put("/{entity}/{userId}")
            .await;

        let sent = last_sent(&client);
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.url, "https://restapi.wcaquino.me/users/1");
    }

    #[tokio::test]
    async fn test_path_param_cannot_add_segments_or_query() {
        let (client, api) = mock_api(200, "{}");

        let _ = given()
            .path_param("userId", "1/../2?admin=true")
            .when(&api)
            .put("/users/{userId}")
            .await;

        let sent = last_sent(&client);
        assert_eq!(
            sent.url,
            "https://restapi.wcaquino.me/users/1%2F..%2F2%3Fadmin%3Dtrue"
        );
    }

    #[tokio::test]
    async fn test_positional_path_params() {
        let (client, api) = mock_api(200, "{}");

        let _ = given()
            .when(&api)
            .put_with("/{entity}/{userId}", &["users", "1"])
            .await;

        let sent = last_sent(&client);
        assert_eq!(sent.url, "https://restapi.wcaquino.me/users/1");
    }

    #[tokio::test]
    async fn test_unresolved_path_param_is_not_sent() {
        let (client, api) = mock_api(200, "{}");

        let result = given().when(&api).delete("/users/{userId}").await;

        assert!(matches!(
            result,
            Err(ScenarioError::Request(DomainError::UnresolvedPathParam(_)))
        ));
        assert!(client.last_request().is_none());
    }

    #[tokio::test]
    async fn test_named_then_positional_params() {
        let (client, api) = mock_api(204, "");

        let _ = given()
            .path_param("entity", "users")
            .when(&api)
            .delete_with("/{entity}/{userId}", &["999"])
            .await;

        let sent = last_sent(&client);
        assert_eq!(sent.method, HttpMethod::Delete);
        assert_eq!(sent.url, "https://restapi.wcaquino.me/users/999");
    }

    #[tokio::test]
    async fn test_timeout_override() {
        let (client, api) = mock_api(204, "");

        let _ = given().timeout_ms(250).when(&api).delete("/users/1").await;

        let sent = last_sent(&client);
        assert_eq!(sent.timeout_ms, 250);
        assert_eq!(sent.method, HttpMethod::Delete);
    }
}
