//! Overlaying configuration layers with the merge operator.

use attrmap::AttrMap;
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, PartialEq)]
struct ServerConfig {
    host: String,
    port: u16,
    features: Vec<String>,
}

fn layer(value: Value) -> anyhow::Result<AttrMap> {
    Ok(AttrMap::try_from_value(value)?)
}

#[rstest]
fn defaults_environment_and_cli_overlay_in_order() -> anyhow::Result<()> {
    let defaults = layer(json!({
        "server": {"host": "localhost", "port": 8080, "features": ["http"]},
        "log_level": "info",
    }))?;
    let environment = layer(json!({
        "server": {"port": 9090},
        "log_level": "debug",
    }))?;
    let cli = layer(json!({
        "server": {"features": ["http", "grpc"]},
    }))?;

    let mut merged = AttrMap::new();
    for overlay in [defaults, environment, cli] {
        merged = merged + overlay;
    }

    // Nested mappings union, scalars and arrays take the rightmost value.
    assert_eq!(
        merged,
        json!({
            "server": {"host": "localhost", "port": 9090, "features": ["http", "grpc"]},
            "log_level": "debug",
        })
    );

    // The merged mapping deserializes straight into typed configuration.
    let server: ServerConfig = serde_json::from_value(merged.fetch("server")?.into_value())?;
    assert_eq!(
        server,
        ServerConfig {
            host: "localhost".to_owned(),
            port: 9090,
            features: vec!["http".to_owned(), "grpc".to_owned()],
        }
    );
    Ok(())
}

#[rstest]
fn overlay_order_matters() -> anyhow::Result<()> {
    let base = layer(json!({"retries": 3}))?;
    let patch = layer(json!({"retries": 5}))?;
    assert_eq!(&base + &patch, json!({"retries": 5}));
    assert_eq!(&patch + &base, json!({"retries": 3}));
    Ok(())
}

#[rstest]
fn merging_a_raw_parsed_document_over_a_mapping() -> anyhow::Result<()> {
    let base = layer(json!({"a": {"x": 1}}))?;
    let parsed: Value = serde_json::from_str(r#"{"a": {"y": 2}, "b": true}"#)?;
    let merged = base.try_merge_value(&parsed)?;
    assert_eq!(merged, json!({"a": {"x": 1, "y": 2}, "b": true}));

    // Non-mapping documents are rejected at the boundary.
    assert!(base.try_merge_value(&json!([1, 2])).is_err());
    Ok(())
}

#[rstest]
fn a_non_recursive_layer_poisons_the_result_flag() -> anyhow::Result<()> {
    let recursive = layer(json!({"a": 1}))?;
    let flat = layer(json!({"b": 2}))?.rewrap(false);
    let merged = recursive.merge(&flat);
    assert!(!merged.is_recursive());
    assert_eq!(merged, json!({"a": 1, "b": 2}));
    Ok(())
}
