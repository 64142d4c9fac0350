//! Maze generation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::grid::Grid;

/// Carves perfect mazes with the randomized depth-first backtracker.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a maze over a fresh `cols` x `rows` grid.
    ///
    /// Starting from all walls standing, walk a randomized depth-first
    /// search from `(0, 0)`: step into a random unvisited neighbor and
    /// knock down the wall in between, backtracking whenever the walk gets
    /// stuck. Walls are only ever removed, one per newly visited cell, so
    /// the passages form a spanning tree over the cells: the maze is fully
    /// connected and has exactly one path between any two squares.
    ///
    /// Runs to completion in one call and always terminates after visiting
    /// every cell once.
    pub fn generate(&mut self, cols: usize, rows: usize) -> Grid {
        let mut grid = Grid::new(cols, rows);

        let mut current = (0, 0);
        if let Some(cell) = grid.cell_mut(0, 0) {
            cell.visited = true;
        }
        let mut stack = vec![current];

        while !stack.is_empty() {
            let candidates = grid.unvisited_neighbors(current.0, current.1);
            if let Some(&(direction, (nx, ny))) = candidates.choose(&mut self.random) {
                grid.carve(current.0, current.1, direction);
                if let Some(cell) = grid.cell_mut(nx, ny) {
                    cell.visited = true;
                }
                stack.push((nx, ny));
                current = (nx, ny);
            } else if let Some(cell) = stack.pop() {
                current = cell;
            }
        }

        grid
    }
}
