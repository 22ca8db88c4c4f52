//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::info;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    types::{Command, Direction},
    App,
};

/// Longest time spent waiting for input before the game moves on to the next frame.
pub(crate) const FRAME_POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Handles pending input events and updates the application state accordingly.
///
/// This function waits up to one frame for the first event, then drains every event already
/// queued so that fast key presses never lag behind the game.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    let mut timeout = FRAME_POLL_TIMEOUT;

    while !app.exit && event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if let Some(command) = command_for(key) {
                dispatch(app, command);
            }
        }
        timeout = Duration::ZERO;
    }

    Ok(())
}

/// Maps a key event to the game command it stands for.
///
/// Only presses are considered, so terminals reporting releases and repeats do not double
/// inputs. Arrow keys and the `h`/`j`/`k`/`l` keys steer, Enter confirms, and `q`, Esc or Ctrl-C
/// quit.
pub(crate) fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Steer(Direction::Right)),
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Routes a command to the application or the game state machine.
///
/// Quitting is handled here since it ends the loop from any phase; every other command belongs to
/// the state machine.
pub(crate) fn dispatch(app: &mut App, command: Command) {
    if command == Command::Quit {
        info!("quit requested");
        app.exit = true;
        return;
    }

    app.game.handle(command);
}
