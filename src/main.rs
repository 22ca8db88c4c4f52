//! This crate contains the source code for the binary for the game maze-chase.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use maze_chase::{init_logging, App, Cli, Maze, Settings};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let settings = Settings::default();
    let maze = Maze::from_file(&cli.maze, &settings)?;

    let mut terminal = ratatui::init();
    let result = App::new(maze, settings).run(&mut terminal);
    ratatui::restore();

    result
}
