//! Scenario file parsing: map definitions and obstacle schedules.
//!
//! Both formats are plain whitespace-delimited tokens. A map definition is a
//! sequence of records terminated by `E`:
//!
//! ```text
//! M <height> <width>      grid extents (Y extent first)
//! S <y> <x>               start cell
//! G <y> <x>               goal cell
//! W <y> <x>               permanent wall (repeatable)
//! E                       end of definition
//! ```
//!
//! An obstacle schedule is a sequence of `<timestep> <y> <x>` triples,
//! terminated by a timestep of -1. Coordinate arguments are Y before X in
//! both formats.

use crate::error::{Result, SimError};
use crate::grid::GridMap;
use crate::schedule::ObstacleSchedule;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

fn next_int(tokens: &mut SplitWhitespace, what: &str) -> std::result::Result<i32, String> {
    let token = tokens
        .next()
        .ok_or_else(|| format!("unexpected end of input, expected {}", what))?;
    token
        .parse()
        .map_err(|_| format!("expected {} but found {:?}", what, token))
}

/// Parse a map definition into a grid.
pub fn parse_map(input: &str) -> Result<GridMap> {
    let mut tokens = input.split_whitespace();

    let mut extents: Option<(i32, i32)> = None;
    let mut start: Option<(i32, i32)> = None;
    let mut goal: Option<(i32, i32)> = None;
    let mut walls: Vec<(i32, i32)> = Vec::new();

    while let Some(token) = tokens.next() {
        match token {
            "M" => {
                let height = next_int(&mut tokens, "grid height").map_err(SimError::MapParse)?;
                let width = next_int(&mut tokens, "grid width").map_err(SimError::MapParse)?;
                extents = Some((width, height));
            }
            "S" => {
                let y = next_int(&mut tokens, "start y").map_err(SimError::MapParse)?;
                let x = next_int(&mut tokens, "start x").map_err(SimError::MapParse)?;
                start = Some((x, y));
            }
            "G" => {
                let y = next_int(&mut tokens, "goal y").map_err(SimError::MapParse)?;
                let x = next_int(&mut tokens, "goal x").map_err(SimError::MapParse)?;
                goal = Some((x, y));
            }
            "W" => {
                let y = next_int(&mut tokens, "wall y").map_err(SimError::MapParse)?;
                let x = next_int(&mut tokens, "wall x").map_err(SimError::MapParse)?;
                walls.push((x, y));
            }
            "E" => break,
            other => {
                return Err(SimError::MapParse(format!(
                    "unrecognized token {:?}",
                    other
                )));
            }
        }
    }

    let (width, height) =
        extents.ok_or_else(|| SimError::MapParse("missing M record".to_string()))?;
    let start = start.ok_or_else(|| SimError::MapParse("missing S record".to_string()))?;
    let goal = goal.ok_or_else(|| SimError::MapParse("missing G record".to_string()))?;

    debug!(
        "parsed map: {}x{}, start ({}, {}), goal ({}, {}), {} walls",
        width,
        height,
        start.0,
        start.1,
        goal.0,
        goal.1,
        walls.len()
    );
    GridMap::new(width, height, start, goal, &walls)
}

/// Parse an obstacle schedule. The sequence ends at a timestep of -1 or at
/// end of input.
pub fn parse_schedule(input: &str) -> Result<ObstacleSchedule> {
    let mut tokens = input.split_whitespace();
    let mut schedule = ObstacleSchedule::new();

    while let Some(token) = tokens.next() {
        let timestep: i32 = token
            .parse()
            .map_err(|_| SimError::ScheduleParse(format!("expected timestep, found {:?}", token)))?;
        if timestep == -1 {
            break;
        }

        let y = next_int(&mut tokens, "obstacle y").map_err(SimError::ScheduleParse)?;
        let x = next_int(&mut tokens, "obstacle x").map_err(SimError::ScheduleParse)?;
        schedule.declare(timestep, x, y);
    }

    debug!("parsed obstacle schedule with {} entries", schedule.len());
    Ok(schedule)
}

/// Read and parse a map file.
pub fn load_map(path: &Path) -> Result<GridMap> {
    let contents = fs::read_to_string(path).map_err(|source| SimError::MapFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&contents)
}

/// Read and parse an obstacle schedule file.
pub fn load_schedule(path: &Path) -> Result<ObstacleSchedule> {
    let contents = fs::read_to_string(path).map_err(|source| SimError::ScheduleFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_schedule(&contents)
}

/// Resolve the map and schedule file paths for a scenario name.
///
/// The schedule path always uses the given name. When the expected map file
/// is absent, one alternate spelling is tried for the scenario names whose
/// shipped map files carry a misspelled name.
pub fn resolve_scenario_paths(
    dir: &Path,
    name: &str,
    map_prefix: &str,
    schedule_prefix: &str,
) -> (PathBuf, PathBuf) {
    let schedule_path = dir.join(format!("{}{}.txt", schedule_prefix, name));

    let mut map_name = name;
    let map_path = dir.join(format!("{}{}.txt", map_prefix, map_name));
    if !map_path.exists() {
        map_name = match name {
            "goaround" => "goaraound",
            "goaroundfake" => "goaraoundfake",
            _ => map_name,
        };
    }
    let map_path = dir.join(format!("{}{}.txt", map_prefix, map_name));

    (map_path, schedule_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Occupant;

    #[test]
    fn test_parse_map_y_before_x() {
        // M gives the Y extent first; S/G/W give y then x
        let grid = parse_map("M 3 5\nS 0 1\nG 2 4\nW 1 2\nE\n").unwrap();
        assert_eq!(grid.width, 5);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.start(), (1, 0));
        assert_eq!(grid.goal(), (4, 2));
        assert_eq!(grid.cell(2, 1).occupant, Occupant::Wall);
    }

    #[test]
    fn test_parse_map_stops_at_terminator() {
        let grid = parse_map("M 2 2 S 0 0 G 1 1 E W 0 1").unwrap();
        // the wall after E is never consumed
        assert_eq!(grid.cell(1, 0).occupant, Occupant::Empty);
    }

    #[test]
    fn test_parse_map_rejects_garbage() {
        assert!(parse_map("M 2 2 S 0 0 G 1 1 Q E").is_err());
        assert!(parse_map("M 2 two S 0 0 G 1 1 E").is_err());
        assert!(parse_map("S 0 0 G 1 1 E").is_err());
        assert!(parse_map("M 2 2 G 1 1 E").is_err());
        assert!(parse_map("M 2 2 S 0").is_err());
    }

    #[test]
    fn test_parse_schedule_triples() {
        let schedule = parse_schedule("0 1 2\n3 0 4\n3 1 1\n-1\n").unwrap();
        assert_eq!(schedule.occupants_at(0), &[(2, 1)]);
        assert_eq!(schedule.occupants_at(3), &[(4, 0), (1, 1)]);
        assert!(schedule.occupants_at(1).is_empty());
    }

    #[test]
    fn test_parse_schedule_terminator_cuts_rest() {
        let schedule = parse_schedule("1 0 0 -1 2 3 3").unwrap();
        assert_eq!(schedule.len(), 1);
        assert!(schedule.occupants_at(2).is_empty());
    }

    #[test]
    fn test_parse_schedule_accepts_end_of_input() {
        let schedule = parse_schedule("2 0 1").unwrap();
        assert_eq!(schedule.occupants_at(2), &[(1, 0)]);

        assert!(parse_schedule("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_schedule_rejects_truncated_triple() {
        assert!(parse_schedule("2 0").is_err());
        assert!(parse_schedule("x 0 0").is_err());
    }

    #[test]
    fn test_resolve_scenario_paths_plain() {
        let dir = Path::new("InputFiles");
        let (map, schedule) = resolve_scenario_paths(dir, "cup", "map", "barber");
        assert_eq!(map, dir.join("mapcup.txt"));
        assert_eq!(schedule, dir.join("barbercup.txt"));
    }

    #[test]
    fn test_resolve_scenario_paths_alternate_spelling() {
        // no file exists in this directory, so the fallback kicks in; the
        // schedule path keeps the given name
        let dir = std::env::temp_dir().join("gridsim_missing_scenarios");
        let (map, schedule) = resolve_scenario_paths(&dir, "goaround", "map", "barber");
        assert_eq!(map, dir.join("mapgoaraound.txt"));
        assert_eq!(schedule, dir.join("barbergoaround.txt"));
    }

    #[test]
    fn test_resolve_scenario_paths_existing_file_wins() {
        let dir = std::env::temp_dir().join("gridsim_resolve_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("mapgoaround.txt"), "M 1 1 S 0 0 G 0 0 E").unwrap();

        let (map, _) = resolve_scenario_paths(&dir, "goaround", "map", "barber");
        assert_eq!(map, dir.join("mapgoaround.txt"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_map_missing_file_error() {
        let err = load_map(Path::new("no_such_dir/mapnothing.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 1);

        let err = load_schedule(Path::new("no_such_dir/barbernothing.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
