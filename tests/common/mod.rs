use serde_json::{Map, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory holding the driver's output file.
pub struct OutputDir {
    pub dir: TempDir,
}

impl OutputDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("test.txt")
    }
}

/// Converts a JSON object literal into the map the validator expects.
pub fn config_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}
