//! Scenarios against the `/users` resource.

use serde_json::json;
use verbs_application::ScenarioResult;
use verbs_application::dsl::{Api, equal_to, given, is, not_null, null_value, verify};
use verbs_application::ports::HttpClient;
use verbs_domain::User;

/// Collection path.
pub const USERS: &str = "/users";

/// Validation message returned when a user is created without a name.
pub const NAME_REQUIRED: &str = "Name é um atributo obrigatório";

/// Message returned when deleting a user that does not exist.
pub const RECORD_NOT_FOUND: &str = "Registro inexistente";

const LUCAS: &str = r#"{ "name" : "Lucas", "age" : 19 }"#;
const LUCAS_UPDATED: &str = r#"{ "name" : "Lucas Foi Alterado", "age" : 21 }"#;
const JSON: &str = "application/json";

/// POST a valid user; only the status is checked.
pub async fn save_user<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body(LUCAS)
        .when(api)
        .post(USERS)
        .await?
        .then()
        .log_all()
        .status_code(201)
        .assert()?;
    Ok(())
}

/// POST a valid user and check the echoed fields.
pub async fn save_user_and_validate_fields<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body(LUCAS)
        .when(api)
        .post(USERS)
        .await?
        .then()
        .log_all()
        .status_code(201)
        .body("id", not_null())
        .body("name", equal_to("Lucas"))
        .body("age", equal_to(19))
        .assert()?;
    Ok(())
}

/// POST a user without a name; the API rejects it.
pub async fn save_user_without_name_fails<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body(r#"{ "age" : 19 }"#)
        .when(api)
        .post(USERS)
        .await?
        .then()
        .log_all()
        .status_code(400)
        .body("id", null_value())
        .body("error", is(NAME_REQUIRED))
        .assert()?;
    Ok(())
}

/// PUT new values over user 1.
pub async fn update_user<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body(LUCAS_UPDATED)
        .when(api)
        .put("/users/1")
        .await?
        .then()
        .log_all()
        .status_code(200)
        .body("id", is(1))
        .body("name", is("Lucas Foi Alterado"))
        .body("age", is(21))
        .assert()?;
    Ok(())
}

/// Same as [`update_user`], with the path filled from positional values.
pub async fn update_user_with_dynamic_url<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body(LUCAS_UPDATED)
        .when(api)
        .put_with("/{entity}/{userId}", &["users", "1"])
        .await?
        .then()
        .log_all()
        .status_code(200)
        .body("id", is(1))
        .body("name", is("Lucas Foi Alterado"))
        .body("age", is(21))
        .assert()?;
    Ok(())
}

/// Same as [`update_user`], with the path filled from named parameters.
pub async fn update_user_with_path_params<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body(LUCAS_UPDATED)
        .path_param("entity", "users")
        .path_param("userId", 1)
        .when(api)
        .put("/{entity}/{userId}")
        .await?
        .then()
        .log_all()
        .status_code(200)
        .body("id", is(1))
        .body("name", is("Lucas Foi Alterado"))
        .body("age", is(21))
        .assert()?;
    Ok(())
}

/// POST a body assembled from key/value pairs.
pub async fn save_user_from_map<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .content_type(JSON)
        .body_map([("name", json!("Batman Via Map")), ("age", json!(30))])
        .when(api)
        .post(USERS)
        .await?
        .then()
        .log_all()
        .status_code(201)
        .body("id", not_null())
        .body("name", is("Batman Via Map"))
        .body("age", is(30))
        .assert()?;
    Ok(())
}

/// POST a serialized [`User`].
pub async fn save_user_from_object<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    let user = User::new("Usuário via objeto", 20);

    given()
        .log_all()
        .content_type(JSON)
        .body_object(&user)
        .when(api)
        .post(USERS)
        .await?
        .then()
        .log_all()
        .status_code(201)
        .body("id", not_null())
        .body("name", is(user.name()))
        .body("age", is(user.age()))
        .assert()?;
    Ok(())
}

/// POST a serialized [`User`] and read the response back into one.
pub async fn save_user_deserialized<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    let user = User::new("Usuário desserializado", 20);

    let inserted: User = given()
        .log_all()
        .content_type(JSON)
        .body_object(&user)
        .when(api)
        .post(USERS)
        .await?
        .then()
        .log_all()
        .status_code(201)
        .assert()?
        .body_as()?;

    tracing::debug!(id = ?inserted.id(), name = inserted.name(), "user inserted");

    verify("deserialized user", &inserted)?
        .field("id", not_null())
        .field("name", is(user.name()))
        .field("age", is(20))
        .assert()
}

/// DELETE user 1.
pub async fn delete_user<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .when(api)
        .delete("/users/1")
        .await?
        .then()
        .log_all()
        .status_code(204)
        .body_empty()
        .assert()?;
    Ok(())
}

/// DELETE a user that does not exist.
pub async fn delete_missing_user_fails<C: HttpClient>(api: &Api<C>) -> ScenarioResult<()> {
    given()
        .log_all()
        .when(api)
        .delete("/users/999")
        .await?
        .then()
        .log_all()
        .status_code(400)
        .body("error", is(RECORD_NOT_FOUND))
        .assert()?;
    Ok(())
}
