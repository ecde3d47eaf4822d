use tracing::warn;

use super::{Cell, Grid};

/// A named starting configuration that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) of alive cells, relative to top-left
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Cells that fall off the board are dropped; returns how many were placed.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> usize {
        let (rows, cols) = grid.dimensions();
        let mut placed = 0;
        for &(dr, dc) in &self.cells {
            let (r, c) = (row + dr, col + dc);
            if r < rows && c < cols {
                grid.set(r, c, Cell::Alive);
                placed += 1;
            }
        }
        if placed < self.cells.len() {
            warn!(
                pattern = self.name,
                placed,
                total = self.cells.len(),
                "pattern clipped at grid edge"
            );
        }
        placed
    }

    /// Place pattern centered on the grid
    pub fn place_centered(&self, grid: &mut Grid) -> usize {
        let (rows, cols) = grid.dimensions();
        let row = rows.saturating_sub(self.height) / 2;
        let col = cols.saturating_sub(self.width) / 2;
        self.place_on(grid, row, col)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        // One quadrant, mirrored into the other three
        let quadrant = [
            (0, 2), (0, 3), (0, 4),
            (2, 0), (3, 0), (4, 0),
            (2, 5), (3, 5), (4, 5),
            (5, 2), (5, 3), (5, 4),
        ];
        let cells = quadrant
            .iter()
            .flat_map(|&(r, c)| [(r, c), (r, 12 - c), (12 - r, c), (12 - r, 12 - c)])
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0), (4, 1), (5, 1),
                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),
                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),
                // Right square
                (2, 34), (3, 34), (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            glider(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
        ]
    }

    /// Look up a pattern by name, ignoring case, spaces, hyphens and underscores
    pub fn find(name: &str) -> Option<Pattern> {
        let key = normalize(name);
        all_patterns().into_iter().find(|p| normalize(p.name) == key)
    }

    fn normalize(name: &str) -> String {
        name.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect()
    }
}
