//! Grid model: cells, wall flags and movement directions

/// One of the four cardinal movement directions.
///
/// Directions double as wall slots on a [`Cell`]; the order
/// up, right, down, left is fixed so that a direction and its
/// [opposite](Direction::opposite) sit two slots apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in wall-slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit offset `(dx, dy)` in grid coordinates; `y` grows downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Slot of this direction in a cell's wall array.
    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

/// A single grid square and its wall configuration.
///
/// Cells start with all four walls standing. During maze generation walls
/// are cleared through [`Grid::carve`]; nothing ever puts a wall back.
#[derive(Debug, Clone)]
pub struct Cell {
    x: usize,
    y: usize,
    /// Standing walls, indexed up, right, down, left
    walls: [bool; 4],
    /// Generation-time bookkeeping, meaningless once carving is done
    pub(crate) visited: bool,
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            walls: [true; 4],
            visited: false,
        }
    }

    /// Column of this cell.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of this cell.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Whether the wall towards `direction` is still standing.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub(crate) fn clear_wall(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }
}

/// Rectangular collection of [`Cell`]s, stored row-major.
///
/// The maze generator owns and mutates the grid while carving; everything
/// else only reads it through [`Grid::cell`] and the iterator.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fresh grid with every wall standing and no cell visited.
    pub(crate) fn new(cols: usize, rows: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Cell::new(x, y)))
            .collect();
        Grid { cols, rows, cells }
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.cols && y < self.rows {
            self.cells.get(self.index(x, y))
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.cols && y < self.rows {
            let index = self.index(x, y);
            self.cells.get_mut(index)
        } else {
            None
        }
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Position of the grid-adjacent neighbor of `(x, y)` towards
    /// `direction`, or `None` if that would leave the grid.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        if nx < self.cols && ny < self.rows {
            Some((nx, ny))
        } else {
            None
        }
    }

    /// In-bounds neighbors of `(x, y)` not yet visited by the carver,
    /// paired with the direction that reaches them.
    pub(crate) fn unvisited_neighbors(
        &self,
        x: usize,
        y: usize,
    ) -> Vec<(Direction, (usize, usize))> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let (nx, ny) = self.neighbor(x, y, direction)?;
                let cell = self.cell(nx, ny)?;
                (!cell.visited).then_some((direction, (nx, ny)))
            })
            .collect()
    }

    /// Remove the wall between `(x, y)` and its neighbor towards
    /// `direction`, clearing both sides to keep the wall flags symmetric.
    ///
    /// Carving towards the grid border is a no-op: border walls have no
    /// neighbor side and always stand.
    pub(crate) fn carve(&mut self, x: usize, y: usize, direction: Direction) {
        let Some((nx, ny)) = self.neighbor(x, y, direction) else {
            return;
        };
        if let Some(cell) = self.cell_mut(x, y) {
            cell.clear_wall(direction);
        }
        if let Some(cell) = self.cell_mut(nx, ny) {
            cell.clear_wall(direction.opposite());
        }
    }
}
