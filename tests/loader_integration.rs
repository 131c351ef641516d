//! Integration tests for loading appliance catalogs from disk.

mod common;

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use co2_scenarios::domain::UsageMode;
use co2_scenarios::error::LoadError;
use co2_scenarios::loader::load_appliances_from_file;

#[test]
fn valid_file_preserves_order_and_values() {
    let dir = TempDir::new().expect("tempdir");
    let path = common::write_catalog(&dir, common::HOUSE_CATALOG);

    let appliances = load_appliances_from_file(&path).expect("catalog should load");

    let names: Vec<&str> = appliances.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Fridge", "Washing machine", "Router"]);

    let washer = &appliances[1];
    assert_eq!(washer.power_consumption(), 2100.5);
    assert_eq!(washer.embodied_emissions(), 300.0);
    assert_eq!(washer.usage_mode(), UsageMode::OnDemand);
    assert_eq!(washer.parameter("cycles_per_week"), Some(&json!(4)));
    assert_eq!(washer.parameter("eco_mode"), Some(&json!(true)));

    assert!(appliances[0].parameters().is_empty());
    assert!(appliances[2].parameters().is_empty());
}

#[test]
fn every_call_rereads_the_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = common::write_catalog(&dir, common::FRIDGE_CATALOG);
    assert_eq!(load_appliances_from_file(&path).map(|a| a.len()).ok(), Some(1));

    fs::write(&path, common::HOUSE_CATALOG).expect("rewrite catalog");
    assert_eq!(load_appliances_from_file(&path).map(|a| a.len()).ok(), Some(3));
}

#[test]
fn schema_violations_reject_the_whole_catalog() {
    let cases = [
        ("powerConsumption", r#"[{"name":"Fridge","powerConsumption":-1,"embodiedEmissions":50,"usageMode":"ALWAYS_ON"}]"#),
        ("embodiedEmissions", r#"[{"name":"Fridge","powerConsumption":1,"embodiedEmissions":-50,"usageMode":"ALWAYS_ON"}]"#),
        ("usageMode", r#"[{"name":"Fridge","powerConsumption":1,"embodiedEmissions":50,"usageMode":"WEEKENDS"}]"#),
    ];

    for (field, body) in cases {
        let dir = TempDir::new().expect("tempdir");
        let path = common::write_catalog(&dir, body);
        match load_appliances_from_file(&path) {
            Err(LoadError::SchemaValidation { violations }) => {
                assert_eq!(violations.len(), 1, "{field}: {violations:?}");
                assert_eq!(violations[0].path, format!("$[0].{field}"));
            }
            other => panic!("{field}: expected schema error, got {other:?}"),
        }
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = load_appliances_from_file(&dir.path().join("nope.json")).expect_err("must fail");
    assert!(matches!(err, LoadError::FileRead { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = common::write_catalog(&dir, "[{\"name\": \"Fridge\",");
    let err = load_appliances_from_file(&path).expect_err("must fail");
    assert!(matches!(err, LoadError::JsonParse { .. }));
}
