//! Error types for the simulator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Simulator error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Cannot read map file {path}: {source}")]
    MapFile { path: PathBuf, source: io::Error },

    #[error("Cannot read obstacle schedule file {path}: {source}")]
    ScheduleFile { path: PathBuf, source: io::Error },

    #[error("Malformed map definition: {0}")]
    MapParse(String),

    #[error("Malformed obstacle schedule: {0}")]
    ScheduleParse(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

impl SimError {
    /// Process exit status for fatal errors. A missing map file and a
    /// missing schedule file terminate with distinct codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::MapFile { .. } => 1,
            SimError::ScheduleFile { .. } => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
