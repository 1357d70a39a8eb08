//! On-read wrapping of nested values.

use serde_json::Value;

use crate::map::AttrMap;

/// A value read through the attribute-style or dynamic-accessor channel.
///
/// Key-style reads hand back raw [`Value`]s; the wrapping channels return
/// this tagged form instead, so nested mappings keep the attribute-access
/// surface. Comparing against a plain [`Value`] with `==` looks through the
/// wrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A nested mapping, wrapped for further attribute access.
    Map(AttrMap),
    /// A sequence whose mapping elements were wrapped recursively.
    Seq(Vec<AttrValue>),
    /// Any other value, passed through unchanged. Mappings and sequences
    /// read through a non-recursive instance also land here.
    Raw(Value),
}

impl AttrValue {
    /// The wrapped mapping, if this is an [`AttrValue::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&AttrMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The wrapped sequence, if this is an [`AttrValue::Seq`].
    #[must_use]
    pub fn as_seq(&self) -> Option<&[AttrValue]> {
        match self {
            Self::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The raw value, if this is an [`AttrValue::Raw`].
    #[must_use]
    pub const fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// Strip the wrapping, rebuilding the plain value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Map(map) => Value::Object(map.into_map()),
            Self::Seq(items) => Value::Array(items.into_iter().map(Self::into_value).collect()),
            Self::Raw(value) => value,
        }
    }
}

impl PartialEq<Value> for AttrValue {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Map(map), Value::Object(object)) => map.as_map() == object,
            (Self::Seq(items), Value::Array(elements)) => {
                items.len() == elements.len()
                    && items
                        .iter()
                        .zip(elements)
                        .all(|(item, element)| item == element)
            }
            (Self::Raw(value), _) => value == other,
            _ => false,
        }
    }
}

impl PartialEq<AttrValue> for Value {
    fn eq(&self, other: &AttrValue) -> bool {
        other == self
    }
}

/// Wrap `value` for a read through a wrapping channel.
///
/// With `recursive` set, mappings become [`AttrValue::Map`] instances
/// carrying the same flag, and sequences are rebuilt with every element
/// passed through the same rule (mappings wrap, nested sequences recurse,
/// scalars pass through). Everything else — and every value when
/// `recursive` is unset — passes through as [`AttrValue::Raw`].
///
/// # Examples
///
/// ```
/// use attrmap::{AttrValue, wrap};
/// use serde_json::json;
///
/// assert!(matches!(wrap(json!({"a": 1}), true), AttrValue::Map(_)));
/// assert!(matches!(wrap(json!({"a": 1}), false), AttrValue::Raw(_)));
/// assert_eq!(wrap(json!("plain"), true), json!("plain"));
/// ```
#[must_use]
pub fn wrap(value: Value, recursive: bool) -> AttrValue {
    if !recursive {
        return AttrValue::Raw(value);
    }
    match value {
        Value::Object(map) => AttrValue::Map(AttrMap::from_map(map)),
        Value::Array(items) => {
            AttrValue::Seq(items.into_iter().map(|item| wrap(item, true)).collect())
        }
        other => AttrValue::Raw(other),
    }
}
