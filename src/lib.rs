// Domain layer - grid, transition rule, patterns
pub mod domain;

// Application layer - stepping and the run loop
pub mod application;

// Infrastructure layer - frame output and configuration
pub mod rendering;
pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets, step};
pub use application::{Display, Simulation, Sleeper, ThreadSleeper, run};
pub use config::{Config, ConfigError};
