//! Type definitions shared by the game core, the input layer and the renderer.

use ratatui::style::Color;

/// Cardinal direction an actor faces or moves in.
///
/// This enumeration is used both for the player's input-driven heading and for the direction the
/// pursuit heuristic picks for an enemy on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

/// Tile coordinates on the maze grid.
///
/// Both coordinates are always within the grid once a position has gone through a movement step,
/// because movement wraps around every edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    /// Column index, growing to the right.
    pub(crate) x: usize,
    /// Row index, growing downwards.
    pub(crate) y: usize,
}

impl Position {
    /// Builds a position from a column and a row.
    pub(crate) const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Something that moves on the grid, either the player or an enemy.
///
/// Player and enemies share the same shape and differ only in who sets their facing: the player's
/// comes from input, an enemy's from the pursuit heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Actor {
    /// Current tile of the actor.
    pub(crate) position: Position,
    /// Direction the actor will attempt to move in on the next tick.
    pub(crate) facing: Direction,
}

impl Actor {
    /// Places an actor on a tile with the given facing.
    pub(crate) const fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }
}

/// Phase of the game session.
///
/// This enumeration determines which screen the renderer draws and which commands the state
/// machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GamePhase {
    /// Title screen waiting for the confirm key.
    Menu,
    /// The chase is running and ticks are being applied.
    Playing,
    /// An enemy caught the player; waiting for the confirm key to go back to the menu.
    GameOver,
}

/// Input understood by the game, decoupled from the terminal key that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Turn the player towards a direction.
    Steer(Direction),
    /// Start from the menu or go back to the menu after a game over.
    Confirm,
    /// Leave the application from any phase.
    Quit,
}

/// Full-screen text panels shown outside of play.
///
/// This enumeration holds the specifics of each banner screen. They share their layout and
/// differ only in the strings and colors they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Banner {
    /// Title panel shown in the menu phase.
    Title,
    /// Panel shown once the player has been caught.
    GameOver,
}

impl Banner {
    /// Returns the heading shown as the banner's title.
    pub(crate) const fn heading(self) -> &'static str {
        match self {
            Self::Title => "PAC-MAN",
            Self::GameOver => "GAME OVER",
        }
    }

    /// Returns the line inviting the user to press the confirm key.
    pub(crate) const fn prompt(self) -> &'static str {
        match self {
            Self::Title => "Press ENTER to Start",
            Self::GameOver => "Press ENTER to Restart",
        }
    }

    /// Returns the color of the banner's border and heading.
    pub(crate) const fn accent(self) -> Color {
        match self {
            Self::Title => Color::White,
            Self::GameOver => Color::Red,
        }
    }
}
