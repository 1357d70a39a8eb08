//! The crate root re-exports the whole public surface.

use attrmap::{
    AttrDefault, AttrMap, AttrMapError, AttrMapResult, AttrResolution, AttrValue,
    RESERVED_MEMBERS, is_attribute_safe, wrap,
};
use serde_json::json;

#[test]
fn public_items_are_reachable_from_the_root() {
    let mut map = AttrMap::new();
    map.insert("a", json!(1));

    let result: AttrMapResult<AttrValue> = map.attr("a");
    assert_eq!(result, Ok(AttrValue::Raw(json!(1))));

    assert!(matches!(
        map.resolve_attr("len"),
        Ok(AttrResolution::Reserved("len"))
    ));
    assert!(matches!(
        map.attr("b"),
        Err(AttrMapError::AttributeNotFound { .. })
    ));

    assert!(is_attribute_safe("a"));
    assert!(RESERVED_MEMBERS.contains(&"merge"));
    assert_eq!(wrap(json!(1), true), json!(1));

    let mut with_defaults = AttrDefault::new(|_key| json!(null));
    assert_eq!(with_defaults.get_or_create("missing"), &json!(null));
}
