use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{Cell, GridError, rules::{ConwayRule, Rule}};

/// Grid is a fixed-size board of `rows` x `cols` cells stored row-major.
/// Evolution never mutates a grid; it returns a new one of the same shape.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Build a grid from rows of integers; any nonzero value is alive
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(rows.len(), cols)?;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged { row: r, expected: cols, found: row.len() });
            }
            let start = r * cols;
            grid.cells[start..start + cols]
                .iter_mut()
                .zip(row)
                .for_each(|(cell, &value)| *cell = Cell::from_value(value));
        }
        Ok(grid)
    }

    /// Random soup where each cell is alive with probability `density`
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let mut grid = Self::new(rows, cols)?;
        grid.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        Ok(grid)
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position, `None` when outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors. Positions off the board count as dead.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution under an arbitrary rule - returns new grid
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, current)| rule.evolve(current, self.count_live_neighbors(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// One generation of Conway's Game of Life
    pub fn step(&self) -> Self {
        self.evolve(&ConwayRule)
    }

    /// Copy out as rows of 0/1
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Iterate over rows as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

/// Free-function form of the transition: `next = step(&current)`
pub fn step(current: &Grid) -> Grid {
    current.step()
}

/// Plain-text boards: `O` for alive, `.` for dead, one line per row
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { 'O' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses `.cells`-style boards as well as `0`/`1` matrices.
/// Lines starting with `!` are comments; trailing blank lines are ignored.
/// `.cells` rows may omit trailing dead cells and an empty line is an all-dead
/// row, so they are padded to the widest line. `0`/`1` matrices must be rectangular.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.starts_with('!'))
            .collect();
        while lines.last().is_some_and(|(_, line)| line.is_empty()) {
            lines.pop();
        }

        let rows = lines
            .iter()
            .map(|&(line_no, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '1' | '#' | 'O' | 'o' | '*' => Ok(1),
                        '0' | '.' | '_' | ' ' => Ok(0),
                        _ => Err(GridError::InvalidChar { line: line_no, column: col + 1, ch }),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        if lines.iter().any(|(_, line)| line.contains(['0', '1'])) {
            return Self::from_rows(&rows);
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let padded: Vec<Vec<u8>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, 0);
                row
            })
            .collect();
        Self::from_rows(&padded)
    }
}
