//! `life-sim` - run Conway's Game of Life for a fixed number of steps.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use life_sim::{
    Config, Simulation, ThreadSleeper, presets, run,
    config::{DisplayMode, SeedKind},
    rendering::{self, NullDisplay, TerminalDisplay},
};

#[derive(Parser)]
#[command(name = "life-sim")]
#[command(version)]
#[command(about = "Conway's Game of Life on a fixed, zero-padded grid")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of generations to compute
    #[arg(short, long)]
    steps: Option<usize>,

    /// Seconds to wait between frames
    #[arg(short, long)]
    pause: Option<f64>,

    /// Grid rows (pattern and random seeding)
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns (pattern and random seeding)
    #[arg(long)]
    cols: Option<usize>,

    /// Start from a preset pattern placed at the centre
    #[arg(long, conflicts_with_all = ["random", "file"])]
    pattern: Option<String>,

    /// Start from a random soup
    #[arg(long, conflicts_with = "file")]
    random: bool,

    /// Alive probability for --random
    #[arg(long)]
    density: Option<f64>,

    /// RNG seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Plain-text board (.cells or 0/1 rows)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Where frames are drawn
    #[arg(short, long, value_enum)]
    display: Option<DisplayArg>,

    /// List preset patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DisplayArg {
    Terminal,
    Window,
    None,
}

impl From<DisplayArg> for DisplayMode {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Terminal => DisplayMode::Terminal,
            DisplayArg::Window => DisplayMode::Window,
            DisplayArg::None => DisplayMode::None,
        }
    }
}

impl Cli {
    /// Command-line flags win over the config file
    fn apply(self, config: &mut Config) {
        if let Some(steps) = self.steps {
            config.simulation.steps = steps;
        }
        if let Some(pause) = self.pause {
            config.simulation.pause_seconds = pause;
        }
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }
        if let Some(pattern) = self.pattern {
            config.grid.seed = SeedKind::Pattern;
            config.grid.pattern = pattern;
        }
        if self.random {
            config.grid.seed = SeedKind::Random;
        }
        if let Some(density) = self.density {
            config.grid.density = density;
        }
        if let Some(seed) = self.seed {
            config.grid.random_seed = Some(seed);
        }
        if let Some(file) = self.file {
            config.grid.seed = SeedKind::File;
            config.grid.file = Some(file);
        }
        if let Some(display) = self.display {
            config.display.mode = display.into();
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so frames on stdout stay intact
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if cli.list_patterns {
        for pattern in presets::all_patterns() {
            println!("{:<20} {}", pattern.name, pattern.description);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let (steps, pause) = config.run_settings()?;
    let grid = config.initial_grid().context("building initial grid")?;
    info!(
        seed = ?config.grid.seed,
        display = ?config.display.mode,
        population = grid.population(),
        "initial grid ready"
    );

    match config.display.mode {
        DisplayMode::Terminal => {
            let mut display = TerminalDisplay::stdout(config.display.alive, config.display.dead);
            run(grid, steps, pause, &mut display, &mut ThreadSleeper)
                .context("writing frames to terminal")?;
        }
        DisplayMode::None => {
            run(grid, steps, pause, &mut NullDisplay, &mut ThreadSleeper)?;
        }
        DisplayMode::Window => {
            let conf = rendering::window_conf(&grid, config.display.cell_size);
            let sim = Simulation::new(grid, steps, pause);
            macroquad::Window::from_config(conf, rendering::play(sim));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("life-sim").chain(args.iter().copied()))
    }

    fn file_config() -> Config {
        "[simulation]\nsteps = 20\npause_seconds = 1.5\n\n[grid]\nseed = \"pattern\"\ndensity = 0.6\n"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut config = file_config();
        parse(&["--steps", "3", "--pause", "0"]).unwrap().apply(&mut config);
        assert_eq!(config.run_settings().unwrap(), (3, Duration::ZERO));
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let mut config = file_config();
        parse(&[]).unwrap().apply(&mut config);
        assert_eq!(config.run_settings().unwrap(), (20, Duration::from_millis(1500)));
        assert_eq!(config.grid.seed, SeedKind::Pattern);
        assert_eq!(config.display.mode, DisplayMode::Terminal);
    }

    #[test]
    fn test_file_flag_switches_seed() {
        let mut config = file_config();
        parse(&["--file", "x"]).unwrap().apply(&mut config);
        assert_eq!(config.grid.seed, SeedKind::File);
        assert_eq!(config.grid.file, Some(PathBuf::from("x")));
    }

    #[test]
    fn test_random_flag_keeps_configured_density() {
        let mut config = file_config();
        parse(&["--random", "--seed", "5"]).unwrap().apply(&mut config);
        assert_eq!(config.grid.seed, SeedKind::Random);
        assert_eq!(config.grid.density, 0.6);
        assert_eq!(config.grid.random_seed, Some(5));
    }

    #[test]
    fn test_pattern_and_display_flags() {
        let mut config = file_config();
        parse(&["--pattern", "blinker", "--rows", "5", "--cols", "7", "-d", "none"])
            .unwrap()
            .apply(&mut config);
        assert_eq!(config.grid.pattern, "blinker");
        assert_eq!((config.grid.rows, config.grid.cols), (5, 7));
        assert_eq!(config.display.mode, DisplayMode::None);
    }

    #[test]
    fn test_conflicting_seed_flags_rejected() {
        assert!(parse(&["--pattern", "glider", "--random"]).is_err());
        assert!(parse(&["--random", "--file", "board.cells"]).is_err());
        assert!(parse(&["--display", "hologram"]).is_err());
    }
}
