//! Greedy pursuit heuristic driving the enemies.
//!
//! Each tick an enemy looks at how far the player is along each axis and heads one tile along the
//! axis with the larger gap. This is not pathfinding: an enemy whose chosen tile is a wall stays
//! where it is rather than trying another direction, and it can keep stalling against the same
//! wall for as long as the player does not move.

use log::trace;

use crate::{
    maze::Maze,
    movement,
    types::{Actor, Direction, Position},
};

/// Picks the direction that closes the larger axis gap between an enemy and the player.
///
/// Horizontal moves are chosen only when the horizontal gap is strictly larger; ties, including an
/// enemy already standing on the player, fall through to the vertical axis. Distances are measured
/// straight across the grid and ignore wraparound.
pub(crate) const fn choose_direction(enemy: Position, player: Position) -> Direction {
    if player.x.abs_diff(enemy.x) > player.y.abs_diff(enemy.y) {
        if player.x > enemy.x {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if player.y > enemy.y {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Turns an enemy towards the player and attempts a single step.
pub(crate) fn pursue(enemy: &mut Actor, player: Position, maze: &Maze) {
    enemy.facing = choose_direction(enemy.position, player);
    let next = movement::step(enemy.position, enemy.facing, maze);
    if next == enemy.position {
        trace!("enemy at {next:?} stalled heading {:?}", enemy.facing);
    }
    enemy.position = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tests::small_maze;

    #[test]
    fn test_choose_direction_horizontal() {
        assert_eq!(
            choose_direction(Position::new(0, 0), Position::new(10, 0)),
            Direction::Right
        );
        assert_eq!(
            choose_direction(Position::new(10, 3), Position::new(2, 4)),
            Direction::Left
        );
    }

    #[test]
    fn test_choose_direction_vertical() {
        assert_eq!(
            choose_direction(Position::new(5, 1), Position::new(6, 9)),
            Direction::Down
        );
        assert_eq!(
            choose_direction(Position::new(5, 9), Position::new(4, 1)),
            Direction::Up
        );
    }

    #[test]
    fn test_choose_direction_tie_prefers_vertical() {
        assert_eq!(
            choose_direction(Position::new(2, 2), Position::new(5, 5)),
            Direction::Down
        );
        assert_eq!(
            choose_direction(Position::new(5, 5), Position::new(2, 2)),
            Direction::Up
        );
        assert_eq!(
            choose_direction(Position::new(2, 5), Position::new(5, 2)),
            Direction::Up
        );
    }

    #[test]
    fn test_choose_direction_same_tile() {
        assert_eq!(
            choose_direction(Position::new(4, 4), Position::new(4, 4)),
            Direction::Up
        );
    }

    #[test]
    fn test_choose_direction_is_deterministic() {
        let enemy = Position::new(7, 3);
        let player = Position::new(1, 12);
        let first = choose_direction(enemy, player);

        for _ in 0..16 {
            assert_eq!(choose_direction(enemy, player), first);
        }
    }

    #[test]
    fn test_choose_direction_ignores_wraparound() {
        // The player is one tile away through the left edge, but the heuristic goes the long way.
        assert_eq!(
            choose_direction(Position::new(0, 2), Position::new(7, 2)),
            Direction::Right
        );
    }

    #[test]
    fn test_pursue_moves_towards_player() {
        let maze = small_maze(&["........"; 6]);
        let mut enemy = Actor::new(Position::new(0, 0), Direction::Left);

        pursue(&mut enemy, Position::new(6, 0), &maze);

        assert_eq!(enemy.position, Position::new(1, 0));
        assert_eq!(enemy.facing, Direction::Right);
    }

    #[test]
    fn test_pursue_stalls_against_wall() {
        let maze = small_maze(&[
            "........", "........", "...#....", "........", "........", "........",
        ]);
        let mut enemy = Actor::new(Position::new(3, 1), Direction::Left);

        for _ in 0..3 {
            pursue(&mut enemy, Position::new(3, 5), &maze);
        }

        assert_eq!(
            enemy.position,
            Position::new(3, 1),
            "no alternate direction should be tried"
        );
        assert_eq!(enemy.facing, Direction::Down);
    }
}
