//! A mapping wrapper that materializes missing entries through a factory.

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value};

use crate::error::{AttrMapError, AttrMapResult};
use crate::map::AttrMap;
use crate::resolve::is_attribute_safe;
use crate::wrap::{AttrValue, wrap};

type Factory = Box<dyn Fn(&str) -> Value + Send + Sync>;

/// An [`AttrMap`] with a default factory for missing keys.
///
/// Lookups through [`AttrDefault::get_or_create`] and
/// [`AttrDefault::attr_or_create`] call the factory with the missing key,
/// insert the produced value into the live backing, and return it. Every
/// other operation derefs to the wrapped [`AttrMap`].
///
/// # Examples
///
/// ```
/// use attrmap::AttrDefault;
/// use serde_json::json;
///
/// let mut counters = AttrDefault::new(|_key| json!(0));
/// assert_eq!(counters.get_or_create("requests"), &json!(0));
/// counters.insert("requests", json!(17));
/// assert_eq!(counters.get_or_create("requests"), &json!(17));
/// ```
pub struct AttrDefault {
    map: AttrMap,
    factory: Factory,
}

impl AttrDefault {
    /// Create an empty mapping with `factory` supplying missing values.
    ///
    /// The factory receives the key being materialized; a factory that
    /// ignores its argument produces the same default for every key.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&str) -> Value + Send + Sync + 'static,
    {
        Self::from_map(factory, Map::new())
    }

    /// Wrap an existing backing map, with `factory` supplying missing
    /// values.
    pub fn from_map<F>(factory: F, backing: Map<String, Value>) -> Self
    where
        F: Fn(&str) -> Value + Send + Sync + 'static,
    {
        Self::from_attr_map(factory, AttrMap::from_map(backing))
    }

    /// Wrap an existing [`AttrMap`], keeping its recursion flag.
    pub fn from_attr_map<F>(factory: F, map: AttrMap) -> Self
    where
        F: Fn(&str) -> Value + Send + Sync + 'static,
    {
        Self {
            map,
            factory: Box::new(factory),
        }
    }

    /// Key-style read that materializes the entry when absent.
    ///
    /// A missing key is filled in from the factory before the raw value is
    /// returned; the new entry persists in the backing map.
    pub fn get_or_create(&mut self, key: &str) -> &Value {
        self.map
            .backing
            .entry(key)
            .or_insert_with(|| (self.factory)(key))
    }

    /// Attribute-style read that materializes attribute-safe names.
    ///
    /// Present entries are returned through the wrapping rule; absent ones
    /// are filled in from the factory first. Names that are not
    /// attribute-safe fail without touching the factory or the backing.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::AttributeNotFound`] when `name` is not
    /// attribute-safe.
    pub fn attr_or_create(&mut self, name: &str) -> AttrMapResult<AttrValue> {
        if !is_attribute_safe(name) {
            return Err(AttrMapError::attribute_not_found(name));
        }
        let recursive = self.map.recursive;
        let value = self
            .map
            .backing
            .entry(name)
            .or_insert_with(|| (self.factory)(name))
            .clone();
        Ok(wrap(value, recursive))
    }

    /// Give up the factory, keeping the accumulated mapping.
    #[must_use]
    pub fn into_attr_map(self) -> AttrMap {
        self.map
    }
}

impl Deref for AttrDefault {
    type Target = AttrMap;

    fn deref(&self) -> &AttrMap {
        &self.map
    }
}

impl DerefMut for AttrDefault {
    fn deref_mut(&mut self) -> &mut AttrMap {
        &mut self.map
    }
}

impl fmt::Debug for AttrDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrDefault")
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}
