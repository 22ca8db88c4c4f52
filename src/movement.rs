//! Tile-by-tile movement on the toroidal maze.

use log::trace;

use crate::{
    maze::Maze,
    types::{Direction, Position},
};

/// Returns the tile next to `position` in `direction`, wrapping around the grid edges.
///
/// Leaving the grid on one side re-enters it on the opposite side of the same axis. Both
/// dimensions must be non-zero, which every loaded [`Maze`] guarantees.
pub(crate) const fn neighbor(
    position: Position,
    direction: Direction,
    width: usize,
    height: usize,
) -> Position {
    let Position { x, y } = position;
    match direction {
        Direction::Up => Position::new(x, (y + height - 1) % height),
        Direction::Down => Position::new(x, (y + 1) % height),
        Direction::Left => Position::new((x + width - 1) % width, y),
        Direction::Right => Position::new((x + 1) % width, y),
    }
}

/// Moves one tile in `direction`, unless the destination is a wall.
///
/// A blocked move is ordinary gameplay: the original position is returned and the actor simply
/// stays put for this tick.
pub(crate) fn step(position: Position, direction: Direction, maze: &Maze) -> Position {
    let candidate = neighbor(position, direction, maze.width(), maze.height());
    if maze.is_wall(candidate) {
        trace!("move {direction:?} from {position:?} blocked by wall at {candidate:?}");
        return position;
    }

    candidate
}
