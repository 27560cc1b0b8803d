//! Path templates with `{name}` placeholders

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A named path parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParam {
    /// Placeholder name, without braces.
    pub name: String,
    /// Replacement value.
    pub value: String,
}

impl PathParam {
    /// Creates a new path parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Named parameters applied to a path template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathParams {
    items: Vec<PathParam>,
}

impl PathParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Sets a parameter, replacing a previous value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let param = PathParam::new(name, value);
        self.items.retain(|p| p.name != param.name);
        self.items.push(param);
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Expands every `{name}` placeholder in `template`.
    ///
    /// Named parameters win; placeholders without a named value consume
    /// `positional` values from left to right. Each value is percent-encoded
    /// as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnresolvedPathParam`] when a placeholder has no
    /// value, and [`DomainError::UnusedPathParams`] when positional values
    /// are left over.
    pub fn resolve(&self, template: &str, positional: &[&str]) -> DomainResult<String> {
        let mut resolved = String::with_capacity(template.len());
        let mut remaining = positional.iter();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            let name = &rest[open + 1..close];
            let value = match self.get(name) {
                Some(value) => value,
                None => remaining
                    .next()
                    .copied()
                    .ok_or_else(|| DomainError::UnresolvedPathParam(name.to_string()))?,
            };
            resolved.push_str(&rest[..open]);
            resolved.push_str(&urlencoding::encode(value));
            rest = &rest[close + 1..];
        }
        resolved.push_str(rest);

        let unused: Vec<&str> = remaining.copied().collect();
        if !unused.is_empty() {
            return Err(DomainError::UnusedPathParams(unused.join(", ")));
        }

        Ok(resolved)
    }
}
