//! Console display of the grid.
//!
//! One frame per tick: a `Step: N` header, a dashed rule, then one row per x
//! coordinate printed between vertical bars with one symbol per cell. Symbol
//! choice and precedence live in `Cell::display`.

use crate::grid::GridMap;

/// Render one frame as a string.
pub fn frame(grid: &GridMap, timestep: i32) -> String {
    let rule = "-".repeat((grid.height * 2 + 3) as usize);

    let mut out = String::new();
    out.push_str(&format!("Step: {}\n", timestep));
    out.push_str(&rule);
    out.push('\n');
    for x in 0..grid.width {
        out.push_str("| ");
        for y in 0..grid.height {
            out.push(grid.cell(x, y).display());
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Print a frame to stdout, followed by the blank line separating steps.
pub fn print_frame(grid: &GridMap, timestep: i32) {
    println!("{}", frame(grid, timestep));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Occupant;

    #[test]
    fn test_frame_layout() {
        let mut grid = GridMap::new(2, 3, (0, 0), (1, 2), &[(0, 2)]).unwrap();
        grid.set_occupant(0, 0, Occupant::Agent);

        let text = frame(&grid, 4);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Step: 4");
        // rule spans height * 2 + 3 dashes
        assert_eq!(lines[1], "---------");
        assert_eq!(lines.len(), 2 + 2 + 2); // header + rules + one row per x

        // row for x = 0: agent at y 0, empty at y 1, wall at y 2
        assert_eq!(lines[2], "| S   W |");
        // row for x = 1: goal marker shows through the empty occupant
        assert_eq!(lines[3], "|     G |");
    }
}
