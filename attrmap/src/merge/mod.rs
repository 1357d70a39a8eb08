//! Recursive, non-commutative merging of mappings.

use std::ops::Add;

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{AttrMapError, AttrMapResult};
use crate::map::AttrMap;

impl AttrMap {
    /// Merge `right` over this mapping, producing a new instance.
    ///
    /// Neither operand is mutated. The result starts from this mapping's
    /// entries; for each key in `right`, nested mappings on both sides merge
    /// recursively, and every other conflict is overwritten by `right`'s
    /// value. Left-only keys keep their positions, right-only keys are
    /// appended in `right`'s insertion order.
    ///
    /// The merge is deliberately non-commutative: the right operand wins
    /// ties. The result wraps recursively unless either operand opted out.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrmap::AttrMap;
    /// use serde_json::json;
    ///
    /// let left = AttrMap::try_from_value(json!({"x": 1, "sub": {"keep": true}}))?;
    /// let right = AttrMap::try_from_value(json!({"x": 2, "sub": {"add": false}}))?;
    /// assert_eq!(
    ///     left.merge(&right),
    ///     json!({"x": 2, "sub": {"keep": true, "add": false}}),
    /// );
    /// # Ok::<_, attrmap::AttrMapError>(())
    /// ```
    #[must_use]
    pub fn merge(&self, right: &Self) -> Self {
        trace!(
            left = self.backing.len(),
            right = right.backing.len(),
            "merging mappings"
        );
        Self::from_map_with(
            merge_objects(&self.backing, &right.backing),
            self.recursive && right.recursive,
        )
    }

    /// Merge a plain mapping over this one.
    ///
    /// Plain maps carry no recursion flag and are treated as
    /// recursive-compatible: the result keeps this instance's flag.
    #[must_use]
    pub fn merge_map(&self, right: &Map<String, Value>) -> Self {
        Self::from_map_with(merge_objects(&self.backing, right), self.recursive)
    }

    /// Merge any mapping-valued `right` over this one.
    ///
    /// # Errors
    ///
    /// Fails with [`AttrMapError::UnsupportedType`] when `right` is not an
    /// object.
    pub fn try_merge_value(&self, right: &Value) -> AttrMapResult<Self> {
        match right {
            Value::Object(map) => Ok(self.merge_map(map)),
            other => Err(AttrMapError::unsupported_type(other)),
        }
    }
}

fn merge_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = left.clone();
    for (key, incoming) in right {
        let combined = match (merged.get(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(overlay)) => {
                Value::Object(merge_objects(existing, overlay))
            }
            _ => incoming.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}

impl Add<&AttrMap> for &AttrMap {
    type Output = AttrMap;

    fn add(self, rhs: &AttrMap) -> AttrMap {
        self.merge(rhs)
    }
}

impl Add for AttrMap {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.merge(&rhs)
    }
}

impl Add<Map<String, Value>> for AttrMap {
    type Output = Self;

    fn add(self, rhs: Map<String, Value>) -> Self {
        self.merge_map(&rhs)
    }
}

impl Add<&Map<String, Value>> for &AttrMap {
    type Output = AttrMap;

    fn add(self, rhs: &Map<String, Value>) -> AttrMap {
        self.merge_map(rhs)
    }
}

#[cfg(test)]
mod tests;
