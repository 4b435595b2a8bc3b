use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::locator::locator_model::LocatorRecord;

// ============================================================================
// Key-value persistence for the toggle flag and the last session
// ============================================================================

/// Storage key for the recording toggle, read back by the popup UI.
pub const ACTIVE_KEY: &str = "attributeSelectorActive";
/// Storage key for the most recent session handoff.
pub const SESSION_KEY: &str = "allSeleniumLocators";

/// JSON-file key-value store standing in for extension local storage.
/// Reads degrade to defaults and writes only warn on failure; persistence
/// problems must never interrupt a recording.
pub struct LocatorStore {
    path: PathBuf,
}

impl LocatorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LocatorStore { path: path.into() }
    }

    pub fn set_active(&self, active: bool) {
        let mut map = self.read_map();
        map.insert(ACTIVE_KEY.to_string(), Value::Bool(active));
        self.write_map(map);
    }

    pub fn is_active(&self) -> bool {
        self.read_map()
            .get(ACTIVE_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn save_session(&self, records: &[LocatorRecord]) {
        let value = match serde_json::to_value(records) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Warning: failed to serialize session: {}", e);
                return;
            }
        };

        let mut map = self.read_map();
        map.insert(SESSION_KEY.to_string(), value);
        self.write_map(map);
    }

    /// The last persisted session, empty when none was saved or the file
    /// is unreadable.
    pub fn load_session(&self) -> Vec<LocatorRecord> {
        self.read_map()
            .get(SESSION_KEY)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    fn read_map(&self) -> Map<String, Value> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Map::new(),
        }
    }

    fn write_map(&self, map: Map<String, Value>) {
        let json = match serde_json::to_string_pretty(&Value::Object(map)) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize store: {}", e);
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, json) {
            eprintln!(
                "Warning: failed to write store '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}
