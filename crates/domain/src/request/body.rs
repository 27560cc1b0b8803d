//! HTTP Request body types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// JSON content type used for every body built from structured data.
pub const APPLICATION_JSON: &str = "application/json";

/// The kind of request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBodyKind {
    /// No body
    #[default]
    None,
    /// Raw text/JSON body, sent verbatim
    Raw {
        /// The content type (e.g., "application/json", "text/plain")
        content_type: String,
    },
}

/// HTTP request body with content and type information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestBody {
    /// The kind of body
    pub kind: RequestBodyKind,
    /// The body content as a string
    #[serde(default)]
    pub content: String,
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: RequestBodyKind::None,
            content: String::new(),
        }
    }

    /// Creates a JSON body from literal JSON text.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self::raw(APPLICATION_JSON, content)
    }

    /// Creates a raw body with an explicit content type.
    #[must_use]
    pub fn raw(content_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: RequestBodyKind::Raw {
                content_type: content_type.into(),
            },
            content: content.into(),
        }
    }

    /// Creates a JSON object body from key/value pairs.
    ///
    /// Keys keep their insertion order in the encoded text.
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be encoded.
    pub fn from_map<K, I>(entries: I) -> DomainResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let map: Map<String, Value> = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::from_object(&Value::Object(map))
    }

    /// Creates a JSON body by serializing a value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn from_object<T: Serialize + ?Sized>(value: &T) -> DomainResult<Self> {
        let content =
            serde_json::to_string(value).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        Ok(Self::json(content))
    }

    /// Returns whether the body is empty or none.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // String::is_empty is not const
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, RequestBodyKind::None) || self.content.is_empty()
    }

    /// Returns the content type if applicable.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match &self.kind {
            RequestBodyKind::None => None,
            RequestBodyKind::Raw { content_type } => Some(content_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(r#"{ "name" : "Lucas", "age" : 19 }"#);
        assert_eq!(body.content_type(), Some(APPLICATION_JSON));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_empty_body() {
        let body = RequestBody::none();
        assert!(body.is_empty());
        assert_eq!(body.content_type(), None);
    }

    #[test]
    fn test_map_body_keeps_order() {
        let body = RequestBody::from_map([("name", json!("Batman Via Map")), ("age", json!(30))])
            .unwrap_or_default();
        assert_eq!(body.content, r#"{"name":"Batman Via Map","age":30}"#);
        assert_eq!(body.content_type(), Some(APPLICATION_JSON));
    }
}
