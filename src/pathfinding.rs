//! Single-tick shortest-path search over the grid.
//!
//! The search runs from scratch every tick: the open worklist is a plain Vec
//! scanned linearly for the smallest f (ties keep the earliest entry), the
//! closed set is one bool per cell, and all per-cell metadata lives in the
//! grid arena. Which of several equally short paths comes out depends on the
//! scan order and the fixed neighbor order, so neither may change.

use crate::grid::GridMap;
use log::debug;

/// Neighbor offsets in expansion order: up, down, right, left.
pub const NEIGHBOR_ORDER: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Outcome of one search pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    GoalFound,
    NoPath,
}

/// Manhattan distance between two coordinates.
pub fn manhattan(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Run one search from `from` to the grid's goal, writing parent
/// back-pointers into the grid for later path reconstruction.
///
/// The moment a generated neighbor is the goal, its parent is recorded and
/// the search stops without expanding anything further. A non-goal neighbor
/// is admitted to the worklist only while its recorded f is strictly below
/// the candidate f; the unset sentinel of -1 always admits a first visit.
/// An exhausted worklist sets the grid's `path_not_found` flag.
pub fn search(grid: &mut GridMap, from: (i32, i32)) -> SearchOutcome {
    let goal = grid.goal();

    let mut open: Vec<(i32, i32)> = Vec::new();
    let mut closed = vec![false; (grid.width * grid.height) as usize];

    {
        let cell = grid.cell_mut(from.0, from.1);
        cell.g = 0;
        cell.f = 0;
    }
    open.push(from);

    while !open.is_empty() {
        // linear scan; strict < keeps the first occurrence on ties
        let mut best = 0;
        let mut best_f = grid.cell(open[0].0, open[0].1).f;
        for (i, &(x, y)) in open.iter().enumerate().skip(1) {
            let f = grid.cell(x, y).f;
            if f < best_f {
                best = i;
                best_f = f;
            }
        }
        let (qx, qy) = open.remove(best);
        closed[grid.index(qx, qy)] = true;

        for &(dx, dy) in &NEIGHBOR_ORDER {
            let (nx, ny) = (qx + dx, qy + dy);
            if !grid.in_bounds(nx, ny) {
                continue;
            }

            if (nx, ny) == goal {
                debug!("goal generated while expanding ({}, {})", qx, qy);
                let cell = grid.cell_mut(nx, ny);
                cell.parent = Some((qx, qy));
                cell.is_goal = true;
                return SearchOutcome::GoalFound;
            }

            if closed[grid.index(nx, ny)] || !grid.cell(nx, ny).is_traversable() {
                continue;
            }

            let g_new = grid.cell(qx, qy).g + 1;
            let f_new = g_new + manhattan((nx, ny), goal);
            if grid.cell(nx, ny).f < f_new {
                let cell = grid.cell_mut(nx, ny);
                cell.g = g_new;
                cell.f = f_new;
                cell.parent = Some((qx, qy));
                open.push((nx, ny));
            }
        }
    }

    debug!("open worklist exhausted without reaching the goal");
    grid.path_not_found = true;
    SearchOutcome::NoPath
}
