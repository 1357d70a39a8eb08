//! Insertion-ordered mappings with attribute-style access and recursive merge.
//!
//! [`AttrMap`] wraps a [`serde_json::Map`] and resolves reads through three
//! channels: explicit key lookup (raw values), attribute-style field access
//! (wrapped values, restricted to attribute-safe names), and a dynamic
//! accessor that wraps any key regardless of its shape. Two mappings combine
//! with a non-commutative recursive merge in which the right operand wins
//! conflicting keys and nested mappings merge key-wise.
//!
//! Mappings usually arrive from parsed configuration data; the type
//! deserializes straight from any serde source.
//!
//! ```
//! use attrmap::AttrMap;
//! use serde_json::json;
//!
//! let base = AttrMap::try_from_value(json!({
//!     "server": {"host": "localhost", "port": 8080},
//!     "log_level": "info",
//! }))?;
//! let overrides = AttrMap::try_from_value(json!({
//!     "server": {"port": 9090},
//! }))?;
//!
//! let merged = &base + &overrides;
//! assert_eq!(merged.attr("server")?, json!({"host": "localhost", "port": 9090}));
//! assert_eq!(merged.get("log_level"), Some(&json!("info")));
//! # Ok::<_, attrmap::AttrMapError>(())
//! ```

mod defaults;
mod error;
mod map;
mod merge;
mod resolve;
mod wrap;

pub use defaults::AttrDefault;
pub use error::{AttrMapError, AttrMapResult};
pub use map::AttrMap;
pub use resolve::{AttrResolution, RESERVED_MEMBERS, is_attribute_safe};
pub use wrap::{AttrValue, wrap};
