use std::path::Path;

use anyhow::{Context, Result};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_OUTPUT_PATH: &str = "data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageRecord {
    pub city: String,
    pub district: String,
    pub neighborhoods: Vec<String>,
    pub description: String,
    pub start: String,
    pub end: String,
}

/// Serialized as `{"count": n, "data": [...]}`; `count` is always taken from `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    data: Vec<OutageRecord>,
}

impl ResultSet {
    pub fn new(data: Vec<OutageRecord>) -> Self {
        Self { data }
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[OutageRecord] {
        &self.data
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ResultSet", 2)?;
        s.serialize_field("count", &self.count())?;
        s.serialize_field("data", &self.data)?;
        s.end()
    }
}

/// Write the result set as indented UTF-8 JSON, creating parent directories as needed.
pub fn write_json(path: &Path, results: &ResultSet) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// ── Tests ──
