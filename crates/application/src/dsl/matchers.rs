//! Matcher constructors for `ResponseValidator::body`.

use serde_json::Value;
use verbs_domain::ValueMatcher;

/// The field exists and is not `null`.
#[must_use]
pub const fn not_null() -> ValueMatcher {
    ValueMatcher::NotNull
}

/// The field is absent or `null`.
#[must_use]
pub const fn null_value() -> ValueMatcher {
    ValueMatcher::Null
}

/// The field equals `value`.
#[must_use]
pub fn equal_to(value: impl Into<Value>) -> ValueMatcher {
    ValueMatcher::Equals(value.into())
}

/// Alias of [`equal_to`], reading as `body("age", is(21))`.
#[must_use]
pub fn is(value: impl Into<Value>) -> ValueMatcher {
    equal_to(value)
}
