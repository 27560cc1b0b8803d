//! In-process fake of the users API.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::{Value, json};
use verbs::scenarios::users::{NAME_REQUIRED, RECORD_NOT_FOUND};
use verbs_application::dsl::Api;
use verbs_infrastructure::ReqwestHttpClient;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// `POST /users`: echoes the user with a fresh id, or rejects a missing name.
pub struct CreateUser {
    next_id: AtomicI64,
}

impl Default for CreateUser {
    fn default() -> Self {
        Self {
            next_id: AtomicI64::new(1_000),
        }
    }
}

impl Respond for CreateUser {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400).set_body_json(json!({ "error": "JSON inválido" }));
        };

        match body.get("name") {
            Some(name) if !name.is_null() => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                ResponseTemplate::new(201).set_body_json(json!({
                    "id": id,
                    "name": name,
                    "age": body.get("age"),
                }))
            }
            _ => ResponseTemplate::new(400).set_body_json(json!({ "error": NAME_REQUIRED })),
        }
    }
}

/// `PUT /users/{id}`: echoes the body under the id from the path.
pub struct UpdateUser;

impl Respond for UpdateUser {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request
            .url
            .path_segments()
            .and_then(Iterator::last)
            .and_then(|segment| segment.parse::<i64>().ok());
        let body = serde_json::from_slice::<Value>(&request.body).unwrap_or(Value::Null);

        ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "name": body.get("name"),
            "age": body.get("age"),
        }))
    }
}

/// Starts a server that honours the users API contract.
pub async fn users_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("content-type", "application/json"))
        .respond_with(CreateUser::default())
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/users/\d+$"))
        .and(header("content-type", "application/json"))
        .respond_with(UpdateUser)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/999"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": RECORD_NOT_FOUND })),
        )
        .mount(&server)
        .await;

    server
}

/// An [`Api`] backed by the real reqwest adapter.
pub fn api_for(base_url: &str) -> Api<ReqwestHttpClient> {
    let client = ReqwestHttpClient::new().expect("reqwest client");
    Api::new(Arc::new(client), base_url)
}
