//! A terminal chase game.
//!
//! The player walks a fixed maze whose edges wrap around while two enemies close in with a greedy
//! single-step heuristic. The game core ([`Maze`] loading, movement, pursuit and the phase state
//! machine) is independent from the terminal; [`App`] wires it to Crossterm input and Ratatui
//! rendering.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod logging;
mod maze;
mod movement;
mod pursuit;
mod state;
mod types;
mod ui;

pub use app::App;
pub use config::{Cli, Settings};
pub use logging::init as init_logging;
pub use maze::Maze;
