//! Run configuration loaded from TOML, with defaults for every field.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::domain::{Grid, GridError, presets};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("pause must be a finite, non-negative number of seconds (got {0})")]
    InvalidPause(f64),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("grid seed is \"file\" but no file was given")]
    MissingFile,

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub grid: GridConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_pause_seconds")]
    pub pause_seconds: f64,
}

/// How the starting board is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    #[default]
    Pattern,
    Random,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default)]
    pub seed: SeedKind,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Terminal,
    Window,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub mode: DisplayMode,
    #[serde(default = "default_alive")]
    pub alive: char,
    #[serde(default = "default_dead")]
    pub dead: char,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

fn default_steps() -> usize {
    10
}

fn default_pause_seconds() -> f64 {
    0.5
}

fn default_rows() -> usize {
    20
}

fn default_cols() -> usize {
    20
}

fn default_pattern() -> String {
    "glider".to_string()
}

fn default_density() -> f64 {
    0.3
}

fn default_alive() -> char {
    '█'
}

fn default_dead() -> char {
    '·'
}

fn default_cell_size() -> f32 {
    20.0
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            pause_seconds: default_pause_seconds(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            seed: SeedKind::default(),
            pattern: default_pattern(),
            density: default_density(),
            random_seed: None,
            file: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            alive: default_alive(),
            dead: default_dead(),
            cell_size: default_cell_size(),
        }
    }
}

impl Config {
    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Check values that serde cannot: pause, density, dimensions, pattern name
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pause()?;
        match self.grid.seed {
            SeedKind::Pattern => {
                presets::find(&self.grid.pattern)
                    .ok_or_else(|| ConfigError::UnknownPattern(self.grid.pattern.clone()))?;
                Self::check_dimensions(self.grid.rows, self.grid.cols)?;
            }
            SeedKind::Random => {
                if !(0.0..=1.0).contains(&self.grid.density) {
                    return Err(GridError::InvalidDensity(self.grid.density).into());
                }
                Self::check_dimensions(self.grid.rows, self.grid.cols)?;
            }
            SeedKind::File => {
                if self.grid.file.is_none() {
                    return Err(ConfigError::MissingFile);
                }
            }
        }
        Ok(())
    }

    fn check_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty.into());
        }
        Ok(())
    }

    /// Inter-frame pause as a `Duration`
    pub fn pause(&self) -> Result<Duration, ConfigError> {
        let secs = self.simulation.pause_seconds;
        Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidPause(secs))
    }

    /// (steps, pause) for the runner
    pub fn run_settings(&self) -> Result<(usize, Duration), ConfigError> {
        Ok((self.simulation.steps, self.pause()?))
    }

    /// Build the starting board described by the `[grid]` section
    pub fn initial_grid(&self) -> Result<Grid, ConfigError> {
        let grid = &self.grid;
        match grid.seed {
            SeedKind::Pattern => {
                let pattern = presets::find(&grid.pattern)
                    .ok_or_else(|| ConfigError::UnknownPattern(grid.pattern.clone()))?;
                let mut board = Grid::new(grid.rows, grid.cols)?;
                pattern.place_centered(&mut board);
                Ok(board)
            }
            SeedKind::Random => {
                let mut rng = match grid.random_seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                Ok(Grid::random(grid.rows, grid.cols, grid.density, &mut rng)?)
            }
            SeedKind::File => {
                let path = grid.file.as_deref().ok_or(ConfigError::MissingFile)?;
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(text.parse()?)
            }
        }
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
