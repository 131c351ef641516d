//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use co2_scenarios::app::{App, Console};
use co2_scenarios::config::AppConfig;
use co2_scenarios::loader::load_appliances_from_file;

/// App driven by an in-memory input script, writing into a byte buffer.
pub type ScriptedApp = App<Cursor<Vec<u8>>, Vec<u8>>;

/// Single-fridge catalog.
pub const FRIDGE_CATALOG: &str = r#"[
  {"name": "Fridge", "powerConsumption": 150, "embodiedEmissions": 50, "usageMode": "ALWAYS_ON"}
]"#;

/// Three-appliance catalog, one entry carrying parameters.
pub const HOUSE_CATALOG: &str = r#"[
  {"name": "Fridge", "powerConsumption": 150, "embodiedEmissions": 50, "usageMode": "ALWAYS_ON"},
  {"name": "Washing machine", "powerConsumption": 2100.5, "embodiedEmissions": 300, "usageMode": "ON_DEMAND",
   "parameters": {"cycles_per_week": 4, "eco_mode": true}},
  {"name": "Router", "powerConsumption": 12, "embodiedEmissions": 0, "usageMode": "ALWAYS_ON"}
]"#;

/// Writes `json` to `appliances.json` inside `dir` and returns its path.
pub fn write_catalog(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("appliances.json");
    fs::write(&path, json).expect("catalog fixture should be writable");
    path
}

/// Builds an app over the catalog at `path`, fed by `script`, with a fixed seed.
pub fn scripted_app(path: &Path, script: &str) -> ScriptedApp {
    let catalog = load_appliances_from_file(path).expect("catalog fixture should load");
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    App::new(
        catalog,
        AppConfig::default(),
        console,
        StdRng::seed_from_u64(42),
    )
}

/// Everything the app has printed so far.
pub fn output(app: &ScriptedApp) -> String {
    String::from_utf8_lossy(app.console().output()).into_owned()
}
