use std::convert::Infallible;
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::application::Display;
use crate::domain::Grid;

/// Text frames written to any `Write` sink, one character per cell
pub struct TerminalDisplay<W: Write> {
    out: W,
    alive: char,
    dead: char,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, alive: char, dead: char) -> Self {
        Self { out, alive, dead }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout(alive: char, dead: char) -> Self {
        Self::new(io::stdout(), alive, dead)
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    type Error = io::Error;

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn render(&mut self, grid: &Grid, title: &str) -> io::Result<()> {
        queue!(self.out, Print(title), Print('\n'))?;
        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { self.alive } else { self.dead })
                .collect();
            queue!(self.out, Print(line), Print('\n'))?;
        }
        self.out.flush()
    }
}

/// Discards every frame; for headless runs and timing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn render(&mut self, _grid: &Grid, _title: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Sleeper, run};
    use std::time::Duration;

    struct NoSleep;

    impl Sleeper for NoSleep {
        fn sleep(&mut self, _pause: Duration) {}
    }

    #[test]
    fn test_render_draws_title_and_rows() {
        let grid = Grid::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        let mut display = TerminalDisplay::new(Vec::new(), '#', '.');

        display.render(&grid, "Board State at Step 1").unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(text, "Board State at Step 1\n.#.\n###\n");
    }

    #[test]
    fn test_clear_emits_escape_sequence() {
        let mut display = TerminalDisplay::new(Vec::new(), '#', '.');
        display.clear().unwrap();
        let bytes = display.into_inner();
        assert!(bytes.starts_with(b"\x1b[2J"));
    }

    #[test]
    fn test_run_streams_every_frame() {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
        let mut display = TerminalDisplay::new(Vec::new(), 'O', '.');

        run(grid, 2, Duration::ZERO, &mut display, &mut NoSleep).unwrap();

        let text = String::from_utf8(display.into_inner()).unwrap();
        assert!(text.contains("Board State at Step 1\n.O.\n.O.\n.O.\n"));
        assert!(text.contains("Board State at Step 2\n...\nOOO\n...\n"));
        assert_eq!(text.matches("\x1b[2J").count(), 2);
    }

    #[test]
    fn test_null_display_accepts_everything() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(run(grid, 3, Duration::ZERO, &mut NullDisplay, &mut NoSleep), Ok(()));
    }
}
