use crate::cell::{Cell, Occupant};
use crate::error::{Result, SimError};

/// The authoritative grid: a flat arena of cells plus start/goal bookkeeping.
///
/// `width` is the x extent and `height` the y extent; cell (x, y) lives at
/// index `x * height + y`. Walls are permanent for the simulation's
/// lifetime, obstacle occupancy is transient and re-applied every tick.
#[derive(Clone, Debug)]
pub struct GridMap {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
    start: (i32, i32),
    goal: (i32, i32),
    /// Set by the pathfinder when a search exhausts its worklist without
    /// reaching the goal. Terminal for the simulation.
    pub path_not_found: bool,
}

impl GridMap {
    /// Build a grid from scenario data. Start, goal, and every wall must lie
    /// within the grid extents.
    pub fn new(
        width: i32,
        height: i32,
        start: (i32, i32),
        goal: (i32, i32),
        walls: &[(i32, i32)],
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidScenario(format!(
                "grid extents must be positive, got {}x{}",
                width, height
            )));
        }

        let mut cells = Vec::with_capacity((width * height) as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(x, y));
            }
        }

        let mut grid = GridMap {
            width,
            height,
            cells,
            start,
            goal,
            path_not_found: false,
        };

        if !grid.in_bounds(start.0, start.1) {
            return Err(SimError::InvalidScenario(format!(
                "start ({}, {}) is outside the {}x{} grid",
                start.0, start.1, width, height
            )));
        }
        if !grid.in_bounds(goal.0, goal.1) {
            return Err(SimError::InvalidScenario(format!(
                "goal ({}, {}) is outside the {}x{} grid",
                goal.0, goal.1, width, height
            )));
        }

        let idx = grid.index(start.0, start.1);
        grid.cells[idx].is_start = true;
        let idx = grid.index(goal.0, goal.1);
        grid.cells[idx].is_goal = true;

        for &(x, y) in walls {
            if !grid.in_bounds(x, y) {
                return Err(SimError::InvalidScenario(format!(
                    "wall ({}, {}) is outside the {}x{} grid",
                    x, y, width, height
                )));
            }
            let idx = grid.index(x, y);
            grid.cells[idx].occupant = Occupant::Wall;
        }

        Ok(grid)
    }

    /// Convert (x, y) coordinates to an index into the cell arena.
    pub fn index(&self, x: i32, y: i32) -> usize {
        (x * self.height + y) as usize
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Borrow the cell at (x, y). Callers check `in_bounds` first.
    pub fn cell(&self, x: i32, y: i32) -> &Cell {
        let idx = self.index(x, y);
        &self.cells[idx]
    }

    /// Mutably borrow the cell at (x, y). Callers check `in_bounds` first.
    pub fn cell_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    pub fn goal(&self) -> (i32, i32) {
        self.goal
    }

    /// True iff the coordinate is in bounds and its occupant is neither a
    /// wall nor an obstacle.
    pub fn is_traversable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cell(x, y).is_traversable()
    }

    /// Set the occupant at (x, y). Out-of-range coordinates are ignored.
    pub fn set_occupant(&mut self, x: i32, y: i32, occupant: Occupant) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx].occupant = occupant;
        }
    }

    /// Clear the occupant at (x, y) back to empty. A no-op on already-empty
    /// cells and on out-of-range coordinates.
    pub fn clear_occupant(&mut self, x: i32, y: i32) {
        self.set_occupant(x, y, Occupant::Empty);
    }

    /// Reset every cell's search metadata to its unset state.
    ///
    /// Must run before each tick's search: a leftover f value from the
    /// previous tick would defeat the admission comparison.
    pub fn reset_search_metadata(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_metadata();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let grid = GridMap::new(5, 3, (0, 0), (4, 2), &[]).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 2));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, 3));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
    }

    #[test]
    fn test_start_goal_flags() {
        let grid = GridMap::new(4, 4, (1, 1), (2, 3), &[]).unwrap();
        assert!(grid.cell(1, 1).is_start);
        assert!(grid.cell(2, 3).is_goal);

        let mut flagged = 0;
        for x in 0..4 {
            for y in 0..4 {
                if grid.cell(x, y).is_start || grid.cell(x, y).is_goal {
                    flagged += 1;
                }
            }
        }
        assert_eq!(flagged, 2);
    }

    #[test]
    fn test_wall_round_trip() {
        let walls = [(1, 0), (1, 1), (3, 2)];
        let grid = GridMap::new(5, 5, (0, 0), (4, 4), &walls).unwrap();

        for x in 0..5 {
            for y in 0..5 {
                let expected = walls.contains(&(x, y));
                assert_eq!(
                    grid.cell(x, y).occupant == Occupant::Wall,
                    expected,
                    "wall mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_scenario_rejected() {
        assert!(GridMap::new(0, 5, (0, 0), (0, 0), &[]).is_err());
        assert!(GridMap::new(5, 5, (5, 0), (4, 4), &[]).is_err());
        assert!(GridMap::new(5, 5, (0, 0), (4, 5), &[]).is_err());
        assert!(GridMap::new(5, 5, (0, 0), (4, 4), &[(7, 7)]).is_err());
    }

    #[test]
    fn test_traversability() {
        let grid = GridMap::new(3, 3, (0, 0), (2, 2), &[(1, 1)]).unwrap();
        assert!(grid.is_traversable(0, 1));
        assert!(!grid.is_traversable(1, 1));
        assert!(!grid.is_traversable(3, 0));
        assert!(!grid.is_traversable(0, -1));
    }

    #[test]
    fn test_occupant_mutation_idempotent() {
        let mut grid = GridMap::new(3, 3, (0, 0), (2, 2), &[]).unwrap();
        grid.set_occupant(1, 1, Occupant::Obstacle);
        assert_eq!(grid.cell(1, 1).occupant, Occupant::Obstacle);

        grid.clear_occupant(1, 1);
        assert_eq!(grid.cell(1, 1).occupant, Occupant::Empty);

        // clearing an already-empty cell is a no-op
        grid.clear_occupant(1, 1);
        assert_eq!(grid.cell(1, 1).occupant, Occupant::Empty);

        // out-of-range mutation is ignored
        grid.set_occupant(9, 9, Occupant::Obstacle);
        grid.clear_occupant(-1, 0);
    }

    #[test]
    fn test_reset_search_metadata() {
        let mut grid = GridMap::new(3, 3, (0, 0), (2, 2), &[]).unwrap();
        grid.cell_mut(1, 2).g = 4;
        grid.cell_mut(1, 2).f = 7;
        grid.cell_mut(1, 2).parent = Some((1, 1));
        grid.cell_mut(1, 2).is_path = true;

        grid.reset_search_metadata();

        let cell = grid.cell(1, 2);
        assert_eq!(cell.g, crate::cell::COST_UNSET);
        assert_eq!(cell.f, crate::cell::COST_UNSET);
        assert!(cell.parent.is_none());
        assert!(!cell.is_path);
    }
}
