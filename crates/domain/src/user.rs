//! The user record exchanged with the users API.

use serde::{Deserialize, Serialize};

/// A user as sent to and returned by the users API.
///
/// `id` is assigned by the server on creation; a locally built user has none
/// and serializes without the key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    name: String,
    age: i32,
}

impl User {
    /// Creates a user that has not been stored yet.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }

    /// Server-assigned identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_user_serializes_without_id() {
        let user = User::new("Usuário via objeto", 20);
        let json = serde_json::to_string(&user).unwrap_or_default();
        assert_eq!(json, r#"{"name":"Usuário via objeto","age":20}"#);
    }

    #[test]
    fn test_deserialize_server_user() {
        let user: Option<User> =
            serde_json::from_str(r#"{"id": 3, "name": "Lucas", "age": 19}"#).ok();
        let user = user.unwrap_or_default();
        assert_eq!(user.id(), Some(3));
        assert_eq!(user.name(), "Lucas");
        assert_eq!(user.age(), 19);
    }

    #[test]
    fn test_deserialize_without_id() {
        let user: Option<User> = serde_json::from_str(r#"{"name": "Lucas", "age": 19}"#).ok();
        assert_eq!(user, Some(User::new("Lucas", 19)));
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let user = serde_json::from_str::<User>(r#"{"error": "Registro inexistente"}"#);
        assert!(user.is_err());
    }
}
