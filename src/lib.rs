pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod render;
pub mod scenario;
pub mod schedule;
pub mod simulation;
pub mod trace_log;

pub use cell::{Cell, Occupant};
pub use error::{Result, SimError};
pub use grid::GridMap;
pub use schedule::ObstacleSchedule;
pub use simulation::{SimState, SimulationLoop};
