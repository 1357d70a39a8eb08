//! Attribute-style and dynamic access resolution.

use serde_json::Value;
use tracing::debug;

use crate::error::{AttrMapError, AttrMapResult};
use crate::map::AttrMap;
use crate::wrap::{AttrValue, wrap};

/// Protocol member names that win attribute resolution over backing keys.
///
/// The set is the identifier-shaped method surface of [`AttrMap`] itself,
/// fixed at compile time and kept sorted so lookups can binary-search it.
pub const RESERVED_MEMBERS: &[&str] = &[
    "as_map",
    "as_map_mut",
    "attr",
    "clear",
    "contains_key",
    "fetch",
    "from_map",
    "from_map_with",
    "get",
    "get_or",
    "insert",
    "into_map",
    "is_empty",
    "is_recursive",
    "iter",
    "keys",
    "len",
    "merge",
    "merge_map",
    "new",
    "remove",
    "remove_attr",
    "resolve_attr",
    "rewrap",
    "set_attr",
    "try_from_value",
    "try_get",
    "try_merge_value",
    "values",
];

fn reserved_member(name: &str) -> Option<&'static str> {
    RESERVED_MEMBERS
        .binary_search(&name)
        .ok()
        .and_then(|index| RESERVED_MEMBERS.get(index).copied())
}

fn is_identifier_shaped(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Whether `name` may be used for attribute-style read access.
///
/// Attribute-safe names are non-empty, start with an ASCII letter, continue
/// with ASCII alphanumerics or underscores, and do not collide with
/// [`RESERVED_MEMBERS`].
#[must_use]
pub fn is_attribute_safe(name: &str) -> bool {
    is_identifier_shaped(name) && reserved_member(name).is_none()
}

/// Outcome of attribute-style resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrResolution {
    /// The name matched an attribute-safe backing key; the value is wrapped.
    Data(AttrValue),
    /// The name matched a reserved protocol member.
    Reserved(&'static str),
}

impl AttrMap {
    /// Resolve `name` through the attribute channel.
    ///
    /// Resolution is two-tier: an attribute-safe name present in the
    /// backing yields [`AttrResolution::Data`] with the value passed through
    /// the wrapping rule; a name in [`RESERVED_MEMBERS`] yields
    /// [`AttrResolution::Reserved`] — the built-in member wins even when the
    /// same key exists in the backing. Names that are not attribute-safe
    /// never reach the backing.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::AttributeNotFound`] when `name` matches
    /// neither tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrmap::{AttrMap, AttrResolution};
    /// use serde_json::json;
    ///
    /// let map = AttrMap::try_from_value(json!({"title": "intro", "keys": [1, 2]}))?;
    /// assert!(matches!(map.resolve_attr("title")?, AttrResolution::Data(_)));
    /// // `keys` is a protocol member; the built-in wins although the key exists.
    /// assert!(matches!(map.resolve_attr("keys")?, AttrResolution::Reserved("keys")));
    /// assert!(map.resolve_attr("missing").is_err());
    /// # Ok::<_, attrmap::AttrMapError>(())
    /// ```
    pub fn resolve_attr(&self, name: &str) -> AttrMapResult<AttrResolution> {
        if is_attribute_safe(name) {
            if let Some(value) = self.backing.get(name) {
                return Ok(AttrResolution::Data(wrap(value.clone(), self.recursive)));
            }
        } else if let Some(member) = reserved_member(name) {
            if self.backing.contains_key(name) {
                debug!(name, "reserved member shadows a backing key");
            }
            return Ok(AttrResolution::Reserved(member));
        }
        Err(AttrMapError::attribute_not_found(name))
    }

    /// Read `name` as a data attribute, wrapped.
    ///
    /// The data-only convenience over [`AttrMap::resolve_attr`]: only an
    /// attribute-safe name present in the backing succeeds. Reserved names
    /// carry no data and are reported as absent; use the dynamic accessor
    /// ([`AttrMap::fetch`]) to read a key that shadows one.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::AttributeNotFound`] when `name` does not
    /// resolve to data.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrmap::{AttrMap, AttrValue};
    /// use serde_json::json;
    ///
    /// let map = AttrMap::try_from_value(json!({"server": {"port": 8080}}))?;
    /// let server = map.attr("server")?;
    /// assert!(matches!(server, AttrValue::Map(_)));
    /// assert_eq!(server, json!({"port": 8080}));
    /// # Ok::<_, attrmap::AttrMapError>(())
    /// ```
    pub fn attr(&self, name: &str) -> AttrMapResult<AttrValue> {
        match self.resolve_attr(name)? {
            AttrResolution::Data(value) => Ok(value),
            AttrResolution::Reserved(_) => Err(AttrMapError::attribute_not_found(name)),
        }
    }

    /// Dynamic accessor: a wrapped read of any key.
    ///
    /// Bypasses the attribute-safety filter entirely and looks `key` up
    /// directly. This is the only sanctioned way to retrieve, wrapped, a key
    /// that is not attribute-safe — one with a leading underscore, or one
    /// colliding with a reserved member.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::KeyNotFound`] when `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrmap::AttrMap;
    /// use serde_json::json;
    ///
    /// let map = AttrMap::try_from_value(json!({"_hidden": {"flag": true}}))?;
    /// assert!(map.attr("_hidden").is_err());
    /// assert_eq!(map.fetch("_hidden")?, json!({"flag": true}));
    /// # Ok::<_, attrmap::AttrMapError>(())
    /// ```
    pub fn fetch(&self, key: &str) -> AttrMapResult<AttrValue> {
        self.backing
            .get(key)
            .map(|value| wrap(value.clone(), self.recursive))
            .ok_or_else(|| AttrMapError::key_not_found(key))
    }

    /// Attribute-style write, routed through key semantics.
    ///
    /// Writes land in the backing map exactly as [`AttrMap::insert`] would.
    /// A name colliding with a reserved member still writes into the
    /// backing: the mapping contract wins over attribute shadowing.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::AttributeNotFound`] when `name` is not
    /// identifier-shaped.
    pub fn set_attr(&mut self, name: &str, value: Value) -> AttrMapResult<Option<Value>> {
        if !is_identifier_shaped(name) {
            return Err(AttrMapError::attribute_not_found(name));
        }
        Ok(self.backing.insert(name.to_owned(), value))
    }

    /// Attribute-style delete, routed through key semantics.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::AttributeNotFound`] when `name` is not
    /// identifier-shaped, and with [`AttrMapError::KeyNotFound`] when the
    /// key is absent.
    pub fn remove_attr(&mut self, name: &str) -> AttrMapResult<Value> {
        if !is_identifier_shaped(name) {
            return Err(AttrMapError::attribute_not_found(name));
        }
        self.backing
            .shift_remove(name)
            .ok_or_else(|| AttrMapError::key_not_found(name))
    }
}
