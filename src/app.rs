//! Core application state and the main loop of the game.

use std::time::Instant;

use color_eyre::eyre::Result;
use log::info;
use ratatui::DefaultTerminal;

use crate::{config::Settings, events, maze::Maze, state::GameStateMachine, ui};

/// Application state container for the chase game.
///
/// This structure holds the state from which Ratatui renders the game and to which Crossterm events
/// are written. The game itself lives in the game state machine; the application only adds the
/// exit flag and the frame clock.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// The game being played.
    pub(crate) game: GameStateMachine,
    /// Instant the previous frame was measured at.
    last_frame: Instant,
}

impl App {
    /// Creates the application over a loaded maze, starting in the menu.
    pub fn new(maze: Maze, settings: Settings) -> Self {
        Self {
            exit: false,
            game: GameStateMachine::new(maze, settings),
            last_frame: Instant::now(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// Every frame polls input, advances the game by the time elapsed since the previous frame and
    /// draws the result. The loop continues until the exit condition is `true`, after which the
    /// function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] from polling input or drawing to the terminal.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!("entering main loop");
        self.last_frame = Instant::now();

        while !self.exit {
            events::handle_events(self)?;
            if self.exit {
                break;
            }

            let now = Instant::now();
            let _ = self.game.update(now.duration_since(self.last_frame));
            self.last_frame = now;

            let _ = terminal.try_draw(|frame| {
                ui::draw(&self.game, frame).map_err(std::io::Error::other)
            })?;
        }

        info!("leaving main loop");

        Ok(())
    }
}
