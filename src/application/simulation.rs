use std::time::Duration;

use tracing::debug;

use crate::domain::Grid;

/// Simulation owns the current generation and counts steps toward a fixed total.
/// Both the blocking runner and the frame-driven window loop drive it.
pub struct Simulation {
    grid: Grid,
    generation: usize,
    total_steps: usize,
    pause: Duration,
    update_timer: f32,
}

impl Simulation {
    /// Create a simulation that will apply `total_steps` transitions to `initial`
    pub fn new(initial: Grid, total_steps: usize, pause: Duration) -> Self {
        Self {
            grid: initial,
            generation: 0,
            total_steps,
            pause,
            update_timer: 0.0,
        }
    }

    /// Current board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of transitions applied so far (1-based once running)
    pub const fn step_number(&self) -> usize {
        self.generation
    }

    pub const fn pause(&self) -> Duration {
        self.pause
    }

    pub const fn is_finished(&self) -> bool {
        self.generation >= self.total_steps
    }

    /// Frame title for the current generation
    pub fn title(&self) -> String {
        format!("Board State at Step {}", self.generation)
    }

    /// Apply one transition. Returns false once all steps have been taken.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.grid = self.grid.step();
        self.generation += 1;
        debug!(
            step = self.generation,
            population = self.grid.population(),
            "generation computed"
        );
        true
    }

    /// Frame-time driven update for render loops that cannot block.
    /// The first generation is produced on the first tick, later ones
    /// once `pause` has elapsed since the previous generation.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.is_finished() {
            return false;
        }

        if self.generation == 0 {
            self.update_timer = 0.0;
            return self.advance();
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.pause.as_secs_f32() {
            self.update_timer = 0.0;
            return self.advance();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        Grid::from_rows(&[[0u8, 0, 0, 0, 0], [0, 1, 1, 1, 0], [0, 0, 0, 0, 0]]).unwrap()
    }

    #[test]
    fn test_advance_stops_at_total() {
        let mut sim = Simulation::new(blinker(), 2, Duration::ZERO);
        assert!(sim.advance());
        assert_eq!(sim.title(), "Board State at Step 1");
        assert!(sim.advance());
        assert!(sim.is_finished());
        assert!(!sim.advance());
        assert_eq!(sim.step_number(), 2);
        assert_eq!(sim.grid(), &blinker());
    }

    #[test]
    fn test_zero_steps_is_finished_immediately() {
        let mut sim = Simulation::new(blinker(), 0, Duration::from_millis(500));
        assert!(sim.is_finished());
        assert!(!sim.tick(1.0));
        assert_eq!(sim.step_number(), 0);
    }

    #[test]
    fn test_tick_waits_for_pause() {
        let mut sim = Simulation::new(blinker(), 3, Duration::from_millis(500));

        // First generation appears right away
        assert!(sim.tick(0.016));
        assert_eq!(sim.step_number(), 1);

        assert!(!sim.tick(0.25));
        assert!(!sim.tick(0.125));
        assert!(sim.tick(0.125));
        assert_eq!(sim.step_number(), 2);

        assert!(sim.tick(0.75));
        assert!(!sim.tick(10.0));
        assert_eq!(sim.step_number(), 3);
    }
}
