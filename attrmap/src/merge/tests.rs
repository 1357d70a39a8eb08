//! Unit tests for the recursive merge algorithm and its operators.

use rstest::rstest;
use serde_json::{Map, Value, json};

use crate::error::AttrMapError;
use crate::map::AttrMap;
use crate::wrap::AttrValue;

fn attr_map(value: Value) -> AttrMap {
    AttrMap::try_from_value(value).unwrap_or_else(|err| panic!("fixture: {err}"))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other:?}"),
    }
}

#[rstest]
fn the_right_operand_wins_conflicts() {
    let a = attr_map(json!({"x": 1}));
    let b = attr_map(json!({"x": 2}));
    assert_eq!(a.merge(&b), json!({"x": 2}));
    assert_eq!(b.merge(&a), json!({"x": 1}));
}

#[rstest]
fn nested_mappings_merge_recursively() {
    let left = attr_map(json!({"alpha": {"beta": "a", "a": "a"}, "foo": "bar"}));
    let right = attr_map(json!({"alpha": {"bravo": "b", "a": "b"}, "lorem": "ipsum"}));
    assert_eq!(
        left.merge(&right),
        json!({
            "foo": "bar",
            "lorem": "ipsum",
            "alpha": {"beta": "a", "bravo": "b", "a": "b"},
        })
    );
}

#[rstest]
fn merging_with_empty_is_identity() {
    let populated = attr_map(json!({"foo": "bar", "sub": {"a": 1}}));
    let empty = AttrMap::new();
    assert_eq!(populated.merge(&empty), populated);
    assert_eq!(empty.merge(&populated), populated);
    assert_eq!(empty.merge(&AttrMap::new()), AttrMap::new());
}

#[rstest]
fn disjoint_keys_are_all_retained() {
    let left = attr_map(json!({"only_left": 1}));
    let right = attr_map(json!({"only_right": 2}));
    assert_eq!(
        left.merge(&right),
        json!({"only_left": 1, "only_right": 2})
    );
}

#[rstest]
#[case(json!({"k": {"a": 1}}), json!({"k": 5}), json!({"k": 5}))]
#[case(json!({"k": 5}), json!({"k": {"a": 1}}), json!({"k": {"a": 1}}))]
#[case(json!({"k": [1, 2]}), json!({"k": [3]}), json!({"k": [3]}))]
fn mismatched_kinds_are_overwritten_not_merged(
    #[case] left: Value,
    #[case] right: Value,
    #[case] expected: Value,
) {
    assert_eq!(attr_map(left).merge(&attr_map(right)), expected);
}

#[rstest]
fn operands_are_left_untouched() {
    let left = attr_map(json!({"x": 1, "sub": {"a": 1}}));
    let right = attr_map(json!({"x": 2, "sub": {"b": 2}}));
    let _merged = left.merge(&right);
    assert_eq!(left, json!({"x": 1, "sub": {"a": 1}}));
    assert_eq!(right, json!({"x": 2, "sub": {"b": 2}}));
}

#[rstest]
#[case(true, true, true)]
#[case(true, false, false)]
#[case(false, true, false)]
#[case(false, false, false)]
fn either_operand_can_disable_recursion(
    #[case] left: bool,
    #[case] right: bool,
    #[case] expected: bool,
) {
    let a = AttrMap::from_map_with(Map::new(), left);
    let b = AttrMap::from_map_with(Map::new(), right);
    assert_eq!(a.merge(&b).is_recursive(), expected);
}

#[rstest]
fn plain_mappings_keep_the_left_flag() {
    let flat = AttrMap::from_map_with(Map::new(), false);
    assert!(!flat.merge_map(&object(json!({"a": 1}))).is_recursive());
    assert!(AttrMap::new().merge_map(&Map::new()).is_recursive());
}

#[rstest]
#[case(json!(4), "a number")]
#[case(json!([1]), "an array")]
#[case(json!("no"), "a string")]
fn try_merge_value_rejects_non_mappings(#[case] right: Value, #[case] found: &'static str) {
    assert_eq!(
        AttrMap::new().try_merge_value(&right),
        Err(AttrMapError::UnsupportedType { found })
    );
}

#[rstest]
fn left_order_is_kept_and_new_keys_append() {
    let left = attr_map(json!({"a": 1, "b": 2}));
    let right = attr_map(json!({"b": 9, "z": 8, "a": 7}));
    let merged = left.merge(&right);
    let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "z"]);
    assert_eq!(merged, json!({"a": 7, "b": 9, "z": 8}));
}

#[rstest]
fn merged_nested_mappings_wrap_on_read() {
    let left = attr_map(json!({"sub": {"a": 1}}));
    let right = attr_map(json!({"sub": {"b": 2}}));
    let merged = left.merge(&right);
    let value = merged
        .attr("sub")
        .unwrap_or_else(|err| panic!("sub resolves: {err}"));
    assert!(matches!(value, AttrValue::Map(_)));
    assert_eq!(value, json!({"a": 1, "b": 2}));
}

#[rstest]
fn operators_mirror_the_merge_method() {
    let left = attr_map(json!({"x": 1, "keep": true}));
    let right = attr_map(json!({"x": 2}));
    assert_eq!(&left + &right, json!({"x": 2, "keep": true}));
    assert_eq!(
        left.clone() + right.clone(),
        json!({"x": 2, "keep": true})
    );
    assert_eq!(
        &left + &object(json!({"x": 3})),
        json!({"x": 3, "keep": true})
    );
    assert_eq!(
        left + object(json!({"x": 4})),
        json!({"x": 4, "keep": true})
    );
}

#[rstest]
fn accumulate_and_reassign_builds_new_instances() {
    let mut acc = AttrMap::new();
    for layer in [
        json!({"a": 1, "sub": {"x": 1}}),
        json!({"b": 2, "sub": {"y": 2}}),
        json!({"a": 3}),
    ] {
        acc = acc + attr_map(layer);
    }
    assert_eq!(acc, json!({"a": 3, "b": 2, "sub": {"x": 1, "y": 2}}));
}
