//! The attribute-accessible mapping type and its key-style surface.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{AttrMapError, AttrMapResult};

/// An insertion-ordered mapping with attribute-style access.
///
/// `AttrMap` owns its backing [`Map`] outright; construction moves the map
/// in and never clones it. Reads go through three channels: key-style
/// lookups return raw values, attribute-style access
/// ([`AttrMap::attr`]/[`AttrMap::resolve_attr`]) returns values wrapped for
/// further field access, and the dynamic accessor ([`AttrMap::fetch`])
/// wraps any key regardless of attribute safety.
///
/// The recursion flag, fixed at construction, controls whether the wrapping
/// channels descend into nested containers. It is not part of the value:
/// equality compares backing maps only.
///
/// The backing store has no internal locking; `&mut` exclusivity is the
/// synchronization callers supply when they mutate it.
///
/// # Examples
///
/// ```
/// use attrmap::AttrMap;
/// use serde_json::json;
///
/// let map = AttrMap::try_from_value(json!({"name": "svc", "_internal": true}))?;
/// assert_eq!(map.get("name"), Some(&json!("svc")));
/// assert_eq!(map.attr("name")?, json!("svc"));
/// assert_eq!(map.fetch("_internal")?, json!(true));
/// # Ok::<_, attrmap::AttrMapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AttrMap {
    pub(crate) backing: Map<String, Value>,
    pub(crate) recursive: bool,
}

impl AttrMap {
    /// Create an empty mapping with recursive wrapping enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backing: Map::new(),
            recursive: true,
        }
    }

    /// Wrap `backing` by move, with recursive wrapping enabled.
    #[must_use]
    pub fn from_map(backing: Map<String, Value>) -> Self {
        Self {
            backing,
            recursive: true,
        }
    }

    /// Wrap `backing` by move, with an explicit recursion flag.
    #[must_use]
    pub const fn from_map_with(backing: Map<String, Value>, recursive: bool) -> Self {
        Self { backing, recursive }
    }

    /// Wrap an object-valued `value`.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::UnsupportedType`] when `value` is not an
    /// object.
    pub fn try_from_value(value: Value) -> AttrMapResult<Self> {
        match value {
            Value::Object(backing) => Ok(Self::from_map(backing)),
            other => Err(AttrMapError::unsupported_type(&other)),
        }
    }

    /// Re-wrap an existing mapping, combining recursion flags.
    ///
    /// The result's flag is the AND of this instance's flag and `recursive`,
    /// so a non-recursive ancestor's setting propagates to wrapping going
    /// forward. The backing map moves; nothing is cloned.
    #[must_use]
    pub fn rewrap(self, recursive: bool) -> Self {
        Self {
            recursive: self.recursive && recursive,
            backing: self.backing,
        }
    }

    /// Whether the wrapping channels descend into nested containers.
    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Borrow the live backing map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.backing
    }

    /// Mutably borrow the live backing map.
    ///
    /// Writes land directly in the backing store and are visible through
    /// every subsequent read.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.backing
    }

    /// Unwrap into the backing map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.backing
    }

    /// Key-style lookup, returning the raw stored value.
    ///
    /// Key-style reads never wrap, regardless of the recursion flag.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.backing.get(key)
    }

    /// Key-style lookup with a fallback for absent keys.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.backing.get(key).unwrap_or(default)
    }

    /// Key-style lookup that treats absence as an error.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::KeyNotFound`] when `key` is absent.
    pub fn try_get(&self, key: &str) -> AttrMapResult<&Value> {
        self.backing
            .get(key)
            .ok_or_else(|| AttrMapError::key_not_found(key))
    }

    /// Insert or replace a key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.backing.insert(key.into(), value)
    }

    /// Remove a key, returning its value.
    ///
    /// Remaining entries keep their insertion order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.backing.shift_remove(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.backing.clear();
    }

    /// Whether `key` is present in the backing map.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.backing.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Iterate over keys, in insertion order.
    pub fn keys(&self) -> serde_json::map::Keys<'_> {
        self.backing.keys()
    }

    /// Iterate over raw values, in insertion order.
    ///
    /// Bulk iteration never wraps, consistent with key-style reads.
    pub fn values(&self) -> serde_json::map::Values<'_> {
        self.backing.values()
    }

    /// Iterate over raw entries, in insertion order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.backing.iter()
    }
}

impl Default for AttrMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttrMap {
    /// Render the backing map as JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.backing).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl From<Map<String, Value>> for AttrMap {
    fn from(backing: Map<String, Value>) -> Self {
        Self::from_map(backing)
    }
}

impl From<AttrMap> for Value {
    fn from(map: AttrMap) -> Self {
        Self::Object(map.backing)
    }
}

impl TryFrom<Value> for AttrMap {
    type Error = AttrMapError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl FromIterator<(String, Value)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl Extend<(String, Value)> for AttrMap {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.backing.extend(iter);
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.iter()
    }
}

impl PartialEq for AttrMap {
    /// Equality compares raw backing maps; the recursion flag is not part
    /// of the value.
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl PartialEq<Map<String, Value>> for AttrMap {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        &self.backing == other
    }
}

impl PartialEq<AttrMap> for Map<String, Value> {
    fn eq(&self, other: &AttrMap) -> bool {
        self == &other.backing
    }
}

impl PartialEq<Value> for AttrMap {
    fn eq(&self, other: &Value) -> bool {
        other.as_object().is_some_and(|object| &self.backing == object)
    }
}

impl PartialEq<AttrMap> for Value {
    fn eq(&self, other: &AttrMap) -> bool {
        other == self
    }
}

impl Serialize for AttrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.backing.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}
