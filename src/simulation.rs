//! Timestep-driven simulation: obstacle update, full re-search, one move.

use crate::cell::Occupant;
use crate::grid::GridMap;
use crate::pathfinding::{self, SearchOutcome, NEIGHBOR_ORDER};
use crate::render;
use crate::schedule::ObstacleSchedule;
use crate::trace_log::{TickRecord, TraceLog};
use log::{debug, info};

/// Lifecycle of one simulation run. `GoalReached` and `PathNotFound` are
/// terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Initializing,
    Stepping,
    GoalReached,
    PathNotFound,
}

/// Drives the per-tick cycle: reset search metadata, apply the obstacle
/// schedule, search, mark the path, advance the agent one cell, render.
pub struct SimulationLoop {
    grid: GridMap,
    schedule: ObstacleSchedule,
    agent: (i32, i32),
    timestep: i32,
    state: SimState,
    render_enabled: bool,
    trace: Option<TraceLog>,
}

impl SimulationLoop {
    pub fn new(grid: GridMap, schedule: ObstacleSchedule, render_enabled: bool) -> Self {
        let agent = grid.start();
        SimulationLoop {
            grid,
            schedule,
            agent,
            timestep: 0,
            state: SimState::Initializing,
            render_enabled,
            trace: None,
        }
    }

    /// Start collecting a per-tick trace, saved by the caller at end of run.
    pub fn enable_trace(&mut self) {
        self.trace = Some(TraceLog::new());
    }

    pub fn take_trace(&mut self) -> Option<TraceLog> {
        self.trace.take()
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn agent(&self) -> (i32, i32) {
        self.agent
    }

    pub fn timestep(&self) -> i32 {
        self.timestep
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Place the agent at the start cell, apply the schedule for timestep 0,
    /// and render the initial frame.
    pub fn initialize(&mut self) {
        self.agent = self.grid.start();
        let (ax, ay) = self.agent;
        self.grid.set_occupant(ax, ay, Occupant::Agent);
        self.schedule.apply(&mut self.grid, 0);
        if self.render_enabled {
            render::print_frame(&self.grid, 0);
        }
        self.state = if self.agent == self.grid.goal() {
            SimState::GoalReached
        } else {
            SimState::Stepping
        };
    }

    /// Advance the simulation by one tick. A no-op unless stepping.
    pub fn step(&mut self) -> SimState {
        if self.state != SimState::Stepping {
            return self.state;
        }

        self.timestep += 1;
        self.grid.reset_search_metadata();
        self.schedule.apply(&mut self.grid, self.timestep);

        match pathfinding::search(&mut self.grid, self.agent) {
            SearchOutcome::NoPath => {
                debug!("search failed at timestep {}", self.timestep);
                self.state = SimState::PathNotFound;
            }
            SearchOutcome::GoalFound => {
                let path_len = self.mark_path();
                self.advance_agent();
                if self.render_enabled {
                    render::print_frame(&self.grid, self.timestep);
                }

                if let Some(trace) = &mut self.trace {
                    trace.record(TickRecord {
                        timestep: self.timestep,
                        agent_x: self.agent.0,
                        agent_y: self.agent.1,
                        path_len,
                        obstacles: self.schedule.occupants_at(self.timestep).len(),
                    });
                }

                if self.agent == self.grid.goal() {
                    self.state = SimState::GoalReached;
                }
            }
        }

        self.state
    }

    /// Run to a terminal state and return it.
    pub fn run(&mut self) -> SimState {
        self.initialize();
        while self.state == SimState::Stepping {
            self.step();
        }

        match self.state {
            SimState::GoalReached => {
                info!("goal reached after {} ticks", self.timestep);
            }
            SimState::PathNotFound => {
                println!("NO PATH");
                info!("no path to the goal at timestep {}", self.timestep);
            }
            _ => {}
        }
        self.state
    }

    /// Walk parent back-pointers from the goal, marking each visited cell's
    /// path flag. The agent's own cell has no parent and stays unmarked.
    /// Returns the number of cells marked.
    fn mark_path(&mut self) -> usize {
        let mut marked = 0;
        let (mut x, mut y) = self.grid.goal();
        while let Some((px, py)) = self.grid.cell(x, y).parent {
            self.grid.cell_mut(x, y).is_path = true;
            marked += 1;
            x = px;
            y = py;
        }
        marked
    }

    /// Move the agent one cell into the first in-bounds neighbor (up, down,
    /// right, left order) whose path flag is set. Out-of-bounds directions
    /// are skipped, never fatal.
    fn advance_agent(&mut self) {
        let (ax, ay) = self.agent;
        for &(dx, dy) in &NEIGHBOR_ORDER {
            let (nx, ny) = (ax + dx, ay + dy);
            if !self.grid.in_bounds(nx, ny) {
                continue;
            }
            if self.grid.cell(nx, ny).is_path {
                self.grid.set_occupant(ax, ay, Occupant::Empty);
                self.grid.set_occupant(nx, ny, Occupant::Agent);
                self.agent = (nx, ny);
                return;
            }
        }
        debug!(
            "no path-marked neighbor at ({}, {}); agent holds position",
            ax, ay
        );
    }
}
