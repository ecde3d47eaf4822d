mod runner;
mod simulation;

pub use runner::{Display, Sleeper, ThreadSleeper, run};
pub use simulation::Simulation;
