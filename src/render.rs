//! ASCII rendering of the maze snapshot
//!
//! Drawing works off the read-only game state only: wall flags, marker and
//! goal positions. Everything pixel- (here: character-) related lives on
//! this side of the model/view split.

use itertools::Itertools;

use crate::grid::{Direction, Grid};
use crate::Point;

/// Draw the maze as `+---+` ASCII art, with `o` for the marker and `X`
/// for the goal.
///
/// Each cell contributes its up and left walls; the bottom and right
/// borders close the frame. Wall symmetry makes that enough to show every
/// wall exactly once.
pub fn render_ascii(grid: &Grid, marker: Point, goal: Point) -> String {
    let mut lines = Vec::with_capacity(grid.rows() * 2 + 1);

    for y in 0..grid.rows() {
        let mut top = String::new();
        let mut mid = String::new();
        for x in 0..grid.cols() {
            let Some(cell) = grid.cell(x, y) else {
                continue;
            };
            top.push('+');
            top.push_str(if cell.has_wall(Direction::Up) { "---" } else { "   " });
            mid.push(if cell.has_wall(Direction::Left) { '|' } else { ' ' });

            let here = Point { x, y };
            mid.push_str(if here == marker {
                " o "
            } else if here == goal {
                " X "
            } else {
                "   "
            });
        }
        top.push('+');
        // The right border is never carved
        mid.push('|');
        lines.push(top);
        lines.push(mid);
    }

    let mut bottom = String::new();
    for _ in 0..grid.cols() {
        bottom.push_str("+---");
    }
    bottom.push('+');
    lines.push(bottom);

    lines.into_iter().join("\n")
}
