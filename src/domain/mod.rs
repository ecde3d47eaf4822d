mod cell;
mod error;
mod grid;
mod rules;
mod patterns;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, step};
pub use rules::{Rule, ConwayRule};
pub use patterns::{Pattern, presets};
