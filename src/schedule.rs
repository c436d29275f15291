use crate::cell::Occupant;
use crate::grid::GridMap;
use log::debug;
use std::collections::HashMap;

/// Timestep-indexed obstacle declarations.
///
/// An entry at timestep t occupies its cells for exactly that tick: applying
/// the schedule at t clears everything declared at t - 1 before placing the
/// entries for t, so a position stays blocked across ticks only when it is
/// re-declared.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSchedule {
    entries: HashMap<i32, Vec<(i32, i32)>>,
}

impl ObstacleSchedule {
    pub fn new() -> Self {
        ObstacleSchedule {
            entries: HashMap::new(),
        }
    }

    /// Declare an obstacle position active at `timestep`.
    pub fn declare(&mut self, timestep: i32, x: i32, y: i32) {
        self.entries.entry(timestep).or_default().push((x, y));
    }

    /// Positions declared for `timestep`, in declaration order. Empty when
    /// nothing is declared for that tick.
    pub fn occupants_at(&self, timestep: i32) -> &[(i32, i32)] {
        self.entries
            .get(&timestep)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of declared positions across all timesteps.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the previous tick's obstacles from the grid, then place this
    /// tick's.
    ///
    /// Clearing is unconditional. Placement overwrites whatever occupies the
    /// listed cell, walls and start/goal included.
    pub fn apply(&self, grid: &mut GridMap, timestep: i32) {
        let previous = self.occupants_at(timestep - 1);
        for &(x, y) in previous {
            grid.clear_occupant(x, y);
        }
        if !previous.is_empty() {
            debug!(
                "cleared {} obstacles from timestep {}",
                previous.len(),
                timestep - 1
            );
        }

        let current = self.occupants_at(timestep);
        for &(x, y) in current {
            grid.set_occupant(x, y, Occupant::Obstacle);
        }
        if !current.is_empty() {
            debug!("placed {} obstacles for timestep {}", current.len(), timestep);
        }
    }
}
