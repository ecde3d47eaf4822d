//! Blocking run loop: clear, step, render, pause.
//!
//! The runner has no error type of its own. Whatever the display returns is
//! handed back to the caller unchanged and ends the run.

use std::time::Duration;

use tracing::info;

use super::Simulation;
use crate::domain::Grid;

/// Where frames go
pub trait Display {
    type Error;

    /// Remove the previously shown frame
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Show `grid` annotated with `title`
    fn render(&mut self, grid: &Grid, title: &str) -> Result<(), Self::Error>;
}

/// Inter-frame delay
pub trait Sleeper {
    fn sleep(&mut self, pause: Duration);
}

/// Blocks the current thread
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, pause: Duration) {
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}

/// Run `n_steps` generations starting from `initial`.
///
/// Exactly `n_steps` transitions and renders happen, with a pause between
/// consecutive frames and none after the last one.
pub fn run<D: Display, S: Sleeper>(
    initial: Grid,
    n_steps: usize,
    pause: Duration,
    display: &mut D,
    sleeper: &mut S,
) -> Result<(), D::Error> {
    let (rows, cols) = initial.dimensions();
    info!(rows, cols, steps = n_steps, pause_ms = pause.as_millis() as u64, "simulation starting");

    let mut sim = Simulation::new(initial, n_steps, pause);
    while !sim.is_finished() {
        display.clear()?;
        sim.advance();
        display.render(sim.grid(), &sim.title())?;

        if !sim.is_finished() {
            sleeper.sleep(sim.pause());
        }
    }

    info!(population = sim.grid().population(), "simulation finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        titles: Vec<String>,
        frames: Vec<Grid>,
        fail_on_render: Option<usize>,
    }

    impl Display for Recorder {
        type Error = String;

        fn clear(&mut self) -> Result<(), String> {
            self.clears += 1;
            Ok(())
        }

        fn render(&mut self, grid: &Grid, title: &str) -> Result<(), String> {
            self.titles.push(title.to_string());
            self.frames.push(grid.clone());
            if self.fail_on_render == Some(self.titles.len()) {
                return Err(format!("backend gone at frame {}", self.titles.len()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingSleeper(Vec<Duration>);

    impl Sleeper for CountingSleeper {
        fn sleep(&mut self, pause: Duration) {
            self.0.push(pause);
        }
    }

    fn blinker() -> Grid {
        Grid::from_rows(&[[0u8, 0, 0, 0, 0], [0, 1, 1, 1, 0], [0, 0, 0, 0, 0]]).unwrap()
    }

    #[test]
    fn test_five_steps_call_counts() {
        let mut display = Recorder::default();
        let mut sleeper = CountingSleeper::default();

        run(blinker(), 5, Duration::ZERO, &mut display, &mut sleeper).unwrap();

        assert_eq!(display.clears, 5);
        assert_eq!(display.frames.len(), 5);
        assert_eq!(sleeper.0.len(), 4);
    }

    #[test]
    fn test_zero_steps_makes_no_calls() {
        let mut display = Recorder::default();
        let mut sleeper = CountingSleeper::default();

        run(blinker(), 0, Duration::from_millis(500), &mut display, &mut sleeper).unwrap();

        assert_eq!(display.clears, 0);
        assert!(display.frames.is_empty());
        assert!(sleeper.0.is_empty());
    }

    #[test]
    fn test_titles_are_one_based() {
        let mut display = Recorder::default();
        run(blinker(), 3, Duration::ZERO, &mut display, &mut CountingSleeper::default()).unwrap();
        assert_eq!(
            display.titles,
            ["Board State at Step 1", "Board State at Step 2", "Board State at Step 3"]
        );
    }

    #[test]
    fn test_frames_are_successive_generations() {
        let mut display = Recorder::default();
        run(blinker(), 4, Duration::ZERO, &mut display, &mut CountingSleeper::default()).unwrap();

        let first = blinker().step();
        assert_eq!(display.frames[0], first);
        assert_eq!(display.frames[1], blinker());
        assert_eq!(display.frames[2], first);
        assert_eq!(display.frames[3], blinker());
    }

    #[test]
    fn test_pause_is_forwarded() {
        let mut sleeper = CountingSleeper::default();
        let pause = Duration::from_millis(250);
        run(blinker(), 3, pause, &mut Recorder::default(), &mut sleeper).unwrap();
        assert_eq!(sleeper.0, vec![pause, pause]);
    }

    #[test]
    fn test_display_error_propagates_and_stops() {
        let mut display = Recorder { fail_on_render: Some(3), ..Default::default() };
        let mut sleeper = CountingSleeper::default();

        let err = run(blinker(), 10, Duration::ZERO, &mut display, &mut sleeper).unwrap_err();

        assert_eq!(err, "backend gone at frame 3");
        assert_eq!(display.frames.len(), 3);
        assert_eq!(sleeper.0.len(), 2);
    }
}
