//! Core engine for a roll-the-marker maze game
//!
//! A rectangular grid of cells is carved into a perfect maze by randomized
//! depth-first search, and a player marker is steered through it one cell
//! at a time. Reaching the goal corner immediately carves a fresh maze and
//! returns the marker to the start.
//!
//! Rendering and input mapping are the caller's business: the engine deals
//! only in grid coordinates and exposes read-only wall state for drawing.
//! Feed it one [`MazeGame::attempt_move`] per recognized input event and
//! draw from [`MazeGame::grid`], [`MazeGame::marker`] and
//! [`MazeGame::goal`].
//!
//! # Examples
//! ```
//! use tilt_maze::grid::Direction;
//! use tilt_maze::{MazeGame, Point};
//!
//! let mut game = MazeGame::new(10, 10, Some(7)).unwrap();
//!
//! // The start corner is walled on its outside edges, so these moves are
//! // absorbed without effect.
//! game.attempt_move(Direction::Up);
//! game.attempt_move(Direction::Left);
//! assert_eq!(game.marker(), Point { x: 0, y: 0 });
//! ```

use anyhow::bail;

use crate::grid::{Direction, Grid};
use crate::maze_generator::MazeGenerator;

pub mod grid;
pub mod maze_generator;
pub mod render;

/// Location on the grid, in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// What a single [`MazeGame::attempt_move`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move accepted; the marker is on the target cell.
    Moved,
    /// Move absorbed: the target is walled off or outside the grid.
    Blocked,
    /// Move accepted and the marker landed on the goal; a fresh maze has
    /// been carved and the marker is back at the start.
    GoalReached,
}

/// Complete state of one running maze game.
///
/// Owns the grid, the marker, the goal and the carver; there is no other
/// mutable state. All operations are synchronous and complete in the call.
pub struct MazeGame {
    /// Wall layout of the current maze
    grid: Grid,
    /// Player marker position, in grid coordinates
    marker: Point,
    /// Fixed target cell of the current maze
    goal: Point,
    /// Carver, reused across regenerations
    generator: MazeGenerator,
}

impl MazeGame {
    /// Start a game on a `cols` x `rows` grid, carving the first maze.
    ///
    /// The marker starts in the top-left corner and the goal sits in the
    /// opposite corner. Pass a seed to reproduce a maze sequence, or `None`
    /// for entropy from the OS.
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(cols: usize, rows: usize, seed: Option<u64>) -> anyhow::Result<Self> {
        if cols == 0 || rows == 0 {
            bail!("maze dimensions must be at least 1x1, got {cols}x{rows}");
        }
        let mut generator = MazeGenerator::new(seed);
        let grid = generator.generate(cols, rows);
        Ok(MazeGame {
            grid,
            marker: Point { x: 0, y: 0 },
            goal: Point {
                x: cols - 1,
                y: rows - 1,
            },
            generator,
        })
    }

    /// Try to move the marker one cell towards `direction`.
    ///
    /// A move whose target lies outside the grid, or which would pass
    /// through a standing wall, is absorbed with no state change; repeating
    /// it is a no-op. An accepted move is a single atomic update, and if it
    /// lands on the goal the maze is regenerated on the spot.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let Some((x, y)) = self.grid.neighbor(self.marker.x, self.marker.y, direction) else {
            return MoveOutcome::Blocked;
        };
        // The marker always sits on a valid cell; if it somehow does not,
        // absorb the move rather than panic.
        let Some(cell) = self.grid.cell(self.marker.x, self.marker.y) else {
            return MoveOutcome::Blocked;
        };
        if cell.has_wall(direction) {
            return MoveOutcome::Blocked;
        }

        self.marker = Point { x, y };
        if self.marker == self.goal {
            self.regenerate();
            MoveOutcome::GoalReached
        } else {
            MoveOutcome::Moved
        }
    }

    /// Throw the current maze away, carve a fresh one and put the marker
    /// back on the start cell.
    ///
    /// Runs on every goal arrival; also usable as an external reset.
    pub fn regenerate(&mut self) {
        self.grid = self.generator.generate(self.grid.cols(), self.grid.rows());
        self.marker = Point { x: 0, y: 0 };
    }

    /// Current maze layout, for drawing.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current marker position.
    pub fn marker(&self) -> Point {
        self.marker
    }

    /// Goal position of the current maze.
    pub fn goal(&self) -> Point {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::grid::{Direction, Grid};
    use crate::maze_generator::MazeGenerator;
    use crate::{MazeGame, MoveOutcome, Point};

    /// Game on a grid with every wall still standing.
    fn walled_game(cols: usize, rows: usize) -> MazeGame {
        MazeGame {
            grid: Grid::new(cols, rows),
            marker: Point { x: 0, y: 0 },
            goal: Point {
                x: cols - 1,
                y: rows - 1,
            },
            generator: MazeGenerator::new(Some(0)),
        }
    }

    /// Shortest move sequence from `from` to `to` through carved passages.
    fn path(grid: &Grid, from: Point, to: Point) -> Vec<Direction> {
        let index = |p: Point| p.y * grid.cols() + p.x;
        let mut prev: Vec<Option<(Point, Direction)>> = vec![None; grid.cols() * grid.rows()];
        let mut seen = vec![false; grid.cols() * grid.rows()];
        seen[index(from)] = true;

        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            if p == to {
                break;
            }
            for direction in Direction::ALL {
                if grid.cell(p.x, p.y).unwrap().has_wall(direction) {
                    continue;
                }
                let Some((nx, ny)) = grid.neighbor(p.x, p.y, direction) else {
                    continue;
                };
                let next = Point { x: nx, y: ny };
                if !seen[index(next)] {
                    seen[index(next)] = true;
                    prev[index(next)] = Some((p, direction));
                    queue.push_back(next);
                }
            }
        }

        let mut steps = Vec::new();
        let mut p = to;
        while p != from {
            let (q, direction) = prev[index(p)].expect("target not reachable");
            steps.push(direction);
            p = q;
        }
        steps.reverse();
        steps
    }

    #[test]
    fn fully_walled_grid_absorbs_every_move() {
        let mut game = walled_game(3, 3);
        for direction in Direction::ALL {
            assert_eq!(game.attempt_move(direction), MoveOutcome::Blocked);
        }
        assert_eq!(game.marker(), Point { x: 0, y: 0 });
    }

    #[test]
    fn blocked_moves_are_idempotent() {
        let mut game = walled_game(4, 4);
        for _ in 0..3 {
            assert_eq!(game.attempt_move(Direction::Down), MoveOutcome::Blocked);
            assert_eq!(game.marker(), Point { x: 0, y: 0 });
        }
    }

    #[test]
    fn out_of_bounds_rejected_regardless_of_wall_state() {
        let mut game = walled_game(3, 3);
        // Knock the border walls off the start cell by hand; the move must
        // still be rejected on bounds alone.
        let cell = game.grid.cell_mut(0, 0).unwrap();
        cell.clear_wall(Direction::Up);
        cell.clear_wall(Direction::Left);

        assert_eq!(game.attempt_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.attempt_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(game.marker(), Point { x: 0, y: 0 });
    }

    #[test]
    fn accepted_moves_follow_carved_passages() {
        let mut game = MazeGame::new(5, 5, Some(1)).unwrap();
        let first = *path(game.grid(), game.marker(), game.goal())
            .first()
            .unwrap();

        assert_eq!(game.attempt_move(first), MoveOutcome::Moved);
        assert_ne!(game.marker(), Point { x: 0, y: 0 });
    }

    #[test]
    fn walking_to_the_goal_regenerates_the_maze() {
        let mut game = MazeGame::new(5, 5, Some(2)).unwrap();
        let steps = path(game.grid(), game.marker(), game.goal());

        let (last, walk) = steps.split_last().unwrap();
        for &direction in walk {
            assert_eq!(game.attempt_move(direction), MoveOutcome::Moved);
        }
        assert_eq!(game.attempt_move(*last), MoveOutcome::GoalReached);

        // Back at the start of a fresh maze, never already on the goal
        assert_eq!(game.marker(), Point { x: 0, y: 0 });
        assert_ne!(game.marker(), game.goal());

        // The fresh maze is solvable too
        let steps = path(game.grid(), game.marker(), game.goal());
        assert!(!steps.is_empty());
    }

    #[test]
    fn external_regenerate_resets_the_marker() {
        let mut game = MazeGame::new(5, 5, Some(3)).unwrap();
        let first = *path(game.grid(), game.marker(), game.goal())
            .first()
            .unwrap();
        game.attempt_move(first);
        assert_ne!(game.marker(), Point { x: 0, y: 0 });

        game.regenerate();
        assert_eq!(game.marker(), Point { x: 0, y: 0 });
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert!(MazeGame::new(0, 5, None).is_err());
        assert!(MazeGame::new(5, 0, None).is_err());
    }
}
