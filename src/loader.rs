//! Appliance catalog loading: read, parse, validate, build.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::{Appliance, UsageMode};
use crate::error::{LoadError, SchemaViolation};

/// One catalog entry as it appears in the file, after validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplianceRecord {
    name: String,
    power_consumption: f64,
    embodied_emissions: f64,
    usage_mode: UsageMode,
    #[serde(default)]
    parameters: BTreeMap<String, Value>,
}

impl From<ApplianceRecord> for Appliance {
    fn from(r: ApplianceRecord) -> Self {
        Appliance::with_parameters(
            r.name.trim(),
            r.power_consumption,
            r.embodied_emissions,
            r.usage_mode,
            r.parameters,
        )
    }
}

/// Reads, validates, and builds the appliance catalog at `path`.
///
/// Every call re-reads the file; nothing is cached.
///
/// # Errors
///
/// - [`LoadError::FileRead`] if the file cannot be read
/// - [`LoadError::JsonParse`] if the content is not JSON
/// - [`LoadError::SchemaValidation`] listing every violated rule
pub fn load_appliances_from_file(path: &Path) -> Result<Vec<Rc<Appliance>>, LoadError> {
    debug!(path = %path.display(), "reading appliance catalog");
    let raw = fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| LoadError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    let appliances = appliances_from_value(value)?;
    info!(path = %path.display(), count = appliances.len(), "loaded appliance catalog");
    Ok(appliances)
}

/// Validates an already-parsed JSON document and builds the catalog from it.
///
/// # Errors
///
/// Returns [`LoadError::SchemaValidation`] if the document breaks any rule.
pub fn appliances_from_value(value: Value) -> Result<Vec<Rc<Appliance>>, LoadError> {
    let violations = validate_catalog(&value);
    if !violations.is_empty() {
        return Err(LoadError::SchemaValidation { violations });
    }
    let records: Vec<ApplianceRecord> =
        serde_json::from_value(value).map_err(|e| LoadError::SchemaValidation {
            violations: vec![SchemaViolation::new("$", e.to_string())],
        })?;
    Ok(records
        .into_iter()
        .map(|r| Rc::new(Appliance::from(r)))
        .collect())
}

/// Checks the catalog shape and returns every violation found.
///
/// Returns an empty vector if the document is valid.
pub fn validate_catalog(value: &Value) -> Vec<SchemaViolation> {
    let Some(entries) = value.as_array() else {
        return vec![SchemaViolation::new(
            "$",
            format!("expected an array of appliances, got {}", kind(value)),
        )];
    };

    let mut violations = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let path = format!("$[{i}]");
        match entry.as_object() {
            Some(obj) => validate_entry(obj, &path, &mut violations),
            None => violations.push(SchemaViolation::new(
                path,
                format!("expected an object, got {}", kind(entry)),
            )),
        }
    }
    violations
}

fn validate_entry(obj: &Map<String, Value>, path: &str, violations: &mut Vec<SchemaViolation>) {
    match obj.get("name") {
        None => violations.push(required(path, "name")),
        Some(Value::String(name)) if name.trim().is_empty() => violations.push(
            SchemaViolation::new(format!("{path}.name"), "must not be empty"),
        ),
        Some(Value::String(_)) => {}
        Some(other) => violations.push(SchemaViolation::new(
            format!("{path}.name"),
            format!("expected a string, got {}", kind(other)),
        )),
    }

    for field in ["powerConsumption", "embodiedEmissions"] {
        match obj.get(field) {
            None => violations.push(required(path, field)),
            Some(Value::Number(n)) => {
                if n.as_f64().is_none_or(|v| v < 0.0) {
                    violations.push(SchemaViolation::new(
                        format!("{path}.{field}"),
                        format!("must be >= 0, got {n}"),
                    ));
                }
            }
            Some(other) => violations.push(SchemaViolation::new(
                format!("{path}.{field}"),
                format!("expected a number, got {}", kind(other)),
            )),
        }
    }

    match obj.get("usageMode") {
        None => violations.push(required(path, "usageMode")),
        Some(Value::String(mode)) => {
            if let Err(message) = mode.parse::<UsageMode>() {
                violations.push(SchemaViolation::new(format!("{path}.usageMode"), message));
            }
        }
        Some(other) => violations.push(SchemaViolation::new(
            format!("{path}.usageMode"),
            format!("expected a string, got {}", kind(other)),
        )),
    }

    if let Some(params) = obj.get("parameters") {
        if !params.is_object() {
            violations.push(SchemaViolation::new(
                format!("{path}.parameters"),
                format!("expected an object, got {}", kind(params)),
            ));
        }
    }
}

fn required(path: &str, field: &str) -> SchemaViolation {
    SchemaViolation::new(format!("{path}.{field}"), "required field is missing")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields_in(violations: &[SchemaViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn valid_catalog_builds_appliances_in_order() {
        let value = json!([
            {"name": "Fridge", "powerConsumption": 150, "embodiedEmissions": 50, "usageMode": "ALWAYS_ON"},
            {"name": "  Kettle ", "powerConsumption": 2000.5, "embodiedEmissions": 0, "usageMode": "ON_DEMAND",
             "parameters": {"volume_l": 1.7, "brand": {"name": "Acme"}}}
        ]);
        let appliances = appliances_from_value(value).expect("catalog should be valid");
        assert_eq!(appliances.len(), 2);
        assert_eq!(appliances[0].name(), "Fridge");
        assert!(appliances[0].parameters().is_empty());
        assert_eq!(appliances[1].name(), "Kettle");
        assert_eq!(appliances[1].power_consumption(), 2000.5);
        assert_eq!(appliances[1].usage_mode(), UsageMode::OnDemand);
        assert_eq!(appliances[1].parameter("volume_l"), Some(&json!(1.7)));
    }

    #[test]
    fn root_must_be_array() {
        let violations = validate_catalog(&json!({"name": "Fridge"}));
        assert_eq!(fields_in(&violations), vec!["$"]);
    }

    #[test]
    fn every_violation_is_reported() {
        let value = json!([
            {"name": " ", "powerConsumption": -1, "embodiedEmissions": "lots", "usageMode": "SOMETIMES"},
            {"powerConsumption": 1, "embodiedEmissions": 1, "usageMode": "ON_DEMAND", "parameters": [1]},
            42
        ]);
        let violations = validate_catalog(&value);
        assert_eq!(
            fields_in(&violations),
            vec![
                "$[0].name",
                "$[0].powerConsumption",
                "$[0].embodiedEmissions",
                "$[0].usageMode",
                "$[1].name",
                "$[1].parameters",
                "$[2]",
            ]
        );
    }

    #[test]
    fn negative_emissions_fail_without_building_anything() {
        let value = json!([
            {"name": "Fridge", "powerConsumption": 150, "embodiedEmissions": -0.5, "usageMode": "ALWAYS_ON"}
        ]);
        let err = appliances_from_value(value).expect_err("must fail");
        match err {
            LoadError::SchemaValidation { violations } => {
                assert_eq!(fields_in(&violations), vec!["$[0].embodiedEmissions"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_array_is_a_valid_empty_catalog() {
        let appliances = appliances_from_value(json!([])).expect("empty catalog is valid");
        assert!(appliances.is_empty());
    }
}
