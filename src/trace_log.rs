use serde::{Deserialize, Serialize};
use std::fs;

/// One simulation tick as recorded in the trace log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TickRecord {
    pub timestep: i32,
    pub agent_x: i32,
    pub agent_y: i32,
    /// Cells marked on the freshly computed path.
    pub path_len: usize,
    /// Obstacles placed by the schedule this tick.
    pub obstacles: usize,
}

/// Collects per-tick records and writes them out as JSON at end of run.
pub struct TraceLog {
    records: Vec<TickRecord>,
}

impl TraceLog {
    pub fn new() -> Self {
        TraceLog {
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, record: TickRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    /// Save all records to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| format!("Failed to serialize trace log: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write trace log: {}", e))?;

        Ok(())
    }

    /// Load records back from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Vec<TickRecord>, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read trace log: {}", e))?;

        serde_json::from_str(&json).map_err(|e| format!("Failed to parse trace log: {}", e))
    }
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new()
    }
}
