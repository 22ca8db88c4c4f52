//! Startup configuration: command line arguments and the fixed geometry of the game.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Default maze file looked up in the current working directory.
const DEFAULT_MAZE: &str = "level_001.txt";

/// Command line arguments of the game.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Maze file made of whitespace-separated 0 (open) and 1 (wall) cells.
    #[arg(default_value = DEFAULT_MAZE)]
    pub maze: PathBuf,
    /// Write diagnostic logs to this file. Logging is disabled when omitted.
    ///
    /// The level is read from `RUST_LOG` and defaults to `info`.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Immutable game settings.
///
/// This structure is built once at startup and lent to every component that needs the grid
/// dimensions or the tick cadence. The grid dimensions are derived from a virtual screen size and a
/// tile size, so the maze is always the same fixed size for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Width of the virtual screen, in pixels.
    screen_width: usize,
    /// Height of the virtual screen, in pixels.
    screen_height: usize,
    /// Side of a square tile, in pixels.
    tile_size: usize,
    /// Minimum wall-clock time that must pass between two game ticks.
    tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(800, 600, 20, Duration::from_millis(100))
    }
}

impl Settings {
    /// Creates settings from explicit values.
    pub(crate) const fn new(
        screen_width: usize,
        screen_height: usize,
        tile_size: usize,
        tick_interval: Duration,
    ) -> Self {
        Self {
            screen_width,
            screen_height,
            tile_size,
            tick_interval,
        }
    }

    /// Number of columns in the maze grid.
    pub(crate) const fn grid_width(&self) -> usize {
        match self.screen_width.checked_div(self.tile_size) {
            Some(columns) => columns,
            None => 0,
        }
    }

    /// Number of rows in the maze grid.
    pub(crate) const fn grid_height(&self) -> usize {
        match self.screen_height.checked_div(self.tile_size) {
            Some(rows) => rows,
            None => 0,
        }
    }

    /// Minimum time between two game ticks.
    pub(crate) const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}
