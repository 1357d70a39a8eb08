//! Error types shared by the access and merge channels.

use serde_json::Value;
use thiserror::Error;

/// Crate-wide result alias.
pub type AttrMapResult<T> = Result<T, AttrMapError>;

/// Errors produced by construction, lookup, and merge operations.
///
/// Every failure is synchronous and raised at the call site of the offending
/// operation; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AttrMapError {
    /// A construction or merge operand was not a mapping.
    #[error("expected a mapping, found {found}")]
    UnsupportedType {
        /// Kind of the offending value.
        found: &'static str,
    },

    /// A key-style or dynamic-accessor lookup missed the backing mapping.
    #[error("key '{key}' is not present in the mapping")]
    KeyNotFound {
        /// The key that was requested.
        key: String,
    },

    /// An attribute name resolved to neither a present attribute-safe key
    /// nor a reserved member.
    #[error("no attribute named '{name}'")]
    AttributeNotFound {
        /// The name that failed to resolve.
        name: String,
    },
}

impl AttrMapError {
    /// Build an [`AttrMapError::UnsupportedType`] describing `value`.
    #[must_use]
    pub fn unsupported_type(value: &Value) -> Self {
        Self::UnsupportedType {
            found: value_kind(value),
        }
    }

    /// Build an [`AttrMapError::KeyNotFound`] for `key`.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Build an [`AttrMapError::AttributeNotFound`] for `name`.
    #[must_use]
    pub fn attribute_not_found(name: impl Into<String>) -> Self {
        Self::AttributeNotFound { name: name.into() }
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
