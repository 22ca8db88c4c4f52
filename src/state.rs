//! Game state machine: phases, actors and the fixed-cadence tick.

use std::time::Duration;

use log::{debug, info};

use crate::{
    config::Settings,
    maze::Maze,
    movement, pursuit,
    types::{Actor, Command, Direction, GamePhase, Position},
};

/// Owner of everything that changes while the game runs.
///
/// This structure is the only mutator of the player, the enemies and the phase. It advances the
/// chase on a fixed tick interval, independently of how often frames are drawn, and exposes
/// read-only accessors for the renderer.
#[derive(Debug)]
pub(crate) struct GameStateMachine {
    /// Static maze every move is checked against.
    maze: Maze,
    /// Settings the machine was created with.
    settings: Settings,
    /// Current phase of the session.
    phase: GamePhase,
    /// The actor steered by the user.
    player: Actor,
    /// Both pursuers, updated in order on every tick.
    enemies: [Actor; 2],
    /// Time accumulated since the last tick.
    since_tick: Duration,
}

impl GameStateMachine {
    /// Creates a machine in the menu phase with every actor on its spawn tile.
    pub(crate) fn new(maze: Maze, settings: Settings) -> Self {
        let (player, enemies) = spawn(&maze);

        Self {
            maze,
            settings,
            phase: GamePhase::Menu,
            player,
            enemies,
            since_tick: Duration::ZERO,
        }
    }

    /// The maze being played on.
    pub(crate) const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The current phase.
    pub(crate) const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The player actor.
    pub(crate) const fn player(&self) -> &Actor {
        &self.player
    }

    /// Both enemies, in update order.
    pub(crate) const fn enemies(&self) -> &[Actor; 2] {
        &self.enemies
    }

    /// Applies a user command.
    ///
    /// Steering only has an effect while playing. Confirm starts the game from the menu and goes
    /// back to the menu after a game over, resetting every actor on the way. Quit is left to the
    /// application loop.
    pub(crate) fn handle(&mut self, command: Command) {
        match (self.phase, command) {
            (GamePhase::Playing, Command::Steer(direction)) => self.player.facing = direction,
            (GamePhase::Menu, Command::Confirm) => {
                info!("game started");
                self.phase = GamePhase::Playing;
            }
            (GamePhase::GameOver, Command::Confirm) => {
                info!("back to the menu");
                self.reset();
                self.phase = GamePhase::Menu;
            }
            _ => {}
        }
    }

    /// Accounts for the time spent on the last frame and runs a tick when one is due.
    ///
    /// Time keeps accumulating in every phase but ticks only run while playing. At most one tick
    /// runs per call, however long the frame took, and the accumulator restarts from zero
    /// afterwards. Returns whether a tick ran.
    pub(crate) fn update(&mut self, elapsed: Duration) -> bool {
        self.since_tick = self.since_tick.saturating_add(elapsed);

        if self.phase != GamePhase::Playing || self.since_tick <= self.settings.tick_interval() {
            return false;
        }

        self.tick();
        self.since_tick = Duration::ZERO;

        true
    }

    /// Runs one step of the chase: the player moves, then each enemy pursues, then capture is
    /// checked.
    fn tick(&mut self) {
        self.player.position = movement::step(self.player.position, self.player.facing, &self.maze);

        let target = self.player.position;
        for enemy in &mut self.enemies {
            pursuit::pursue(enemy, target, &self.maze);
        }

        debug!(
            "tick: player {:?}, enemies {:?} and {:?}",
            self.player.position, self.enemies[0].position, self.enemies[1].position
        );

        if self.is_caught() {
            info!("player caught at {:?}", self.player.position);
            self.phase = GamePhase::GameOver;
        }
    }

    /// Checks whether an enemy shares the player's tile.
    fn is_caught(&self) -> bool {
        self.enemies
            .iter()
            .any(|enemy| enemy.position == self.player.position)
    }

    /// Puts every actor back on its spawn tile.
    fn reset(&mut self) {
        let (player, enemies) = spawn(&self.maze);
        self.player = player;
        self.enemies = enemies;
    }
}

/// Initial actors: the player at the center facing right, one enemy in the top-left corner facing
/// right and one in the bottom-right corner facing left, each one tile in from the edge.
fn spawn(maze: &Maze) -> (Actor, [Actor; 2]) {
    let width = maze.width();
    let height = maze.height();

    (
        Actor::new(Position::new(width / 2, height / 2), Direction::Right),
        [
            Actor::new(Position::new(1, 1), Direction::Right),
            Actor::new(
                Position::new(width.saturating_sub(2), height.saturating_sub(2)),
                Direction::Left,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tests::{maze_source, small_maze, small_settings};

    /// Time comfortably past one tick interval.
    const PAST_TICK: Duration = Duration::from_millis(101);

    /// Builds a machine over a maze picture on the small test grid.
    fn small_machine(rows: &[&str]) -> GameStateMachine {
        GameStateMachine::new(small_maze(rows), small_settings())
    }

    /// Builds a machine over a full-size maze with walls at the given tiles.
    fn full_machine(walls: &[(usize, usize)]) -> GameStateMachine {
        let settings = Settings::default();
        let mut rows = vec![vec!['.'; settings.grid_width()]; settings.grid_height()];
        for &(x, y) in walls {
            if let Some(tile) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                *tile = '#';
            }
        }
        let rows: Vec<String> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let maze = Maze::load(&maze_source(&rows), &settings).expect("test maze should be valid");

        GameStateMachine::new(maze, settings)
    }

    /// Moves a machine from the menu into the playing phase.
    fn started(mut machine: GameStateMachine) -> GameStateMachine {
        machine.handle(Command::Confirm);
        assert_eq!(machine.phase(), GamePhase::Playing, "confirm should start the game");
        machine
    }

    #[test]
    fn test_new_machine_spawns() {
        let machine = full_machine(&[]);

        assert_eq!(machine.phase(), GamePhase::Menu);
        assert_eq!(
            *machine.player(),
            Actor::new(Position::new(20, 15), Direction::Right)
        );
        assert_eq!(
            *machine.enemies(),
            [
                Actor::new(Position::new(1, 1), Direction::Right),
                Actor::new(Position::new(38, 28), Direction::Left),
            ]
        );
    }

    #[test]
    fn test_menu_ignores_ticks_and_steering() {
        let mut machine = full_machine(&[]);

        machine.handle(Command::Steer(Direction::Up));
        assert!(!machine.update(PAST_TICK), "no tick should run in the menu");

        assert_eq!(machine.player().facing, Direction::Right);
        assert_eq!(machine.player().position, Position::new(20, 15));
    }

    #[test]
    fn test_tick_needs_more_than_interval() {
        let mut machine = started(full_machine(&[]));

        assert!(!machine.update(Duration::from_millis(60)), "60ms is too early");
        assert!(!machine.update(Duration::from_millis(40)), "exactly 100ms is too early");
        assert!(machine.update(Duration::from_millis(1)), "101ms should tick");
        assert_eq!(machine.player().position, Position::new(21, 15));
    }

    #[test]
    fn test_single_tick_per_long_frame() {
        let mut machine = started(full_machine(&[]));

        assert!(machine.update(Duration::from_secs(1)), "a long frame should tick");
        assert_eq!(
            machine.player().position,
            Position::new(21, 15),
            "only one tick should run"
        );
        assert!(
            !machine.update(Duration::from_millis(1)),
            "the accumulator should restart from zero"
        );
    }

    #[test]
    fn test_time_in_menu_carries_into_play() {
        let mut machine = full_machine(&[]);

        assert!(!machine.update(PAST_TICK), "no tick should run in the menu");
        machine.handle(Command::Confirm);

        assert!(
            machine.update(Duration::ZERO),
            "time spent in the menu should make the first tick due"
        );
    }

    #[test]
    fn test_steering_changes_facing() {
        let mut machine = started(full_machine(&[]));

        machine.handle(Command::Steer(Direction::Up));
        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().facing, Direction::Up);
        assert_eq!(machine.player().position, Position::new(20, 14));
    }

    #[test]
    fn test_player_blocked_by_wall() {
        let mut machine = started(full_machine(&[(6, 5)]));
        machine.player = Actor::new(Position::new(5, 5), Direction::Right);

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().position, Position::new(5, 5));
        assert_eq!(machine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_enemy_chases_along_row() {
        let mut machine = started(full_machine(&[(11, 0)]));
        machine.player = Actor::new(Position::new(10, 0), Direction::Right);
        machine.enemies[0] = Actor::new(Position::new(0, 0), Direction::Left);

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().position, Position::new(10, 0));
        assert_eq!(
            machine.enemies()[0],
            Actor::new(Position::new(1, 0), Direction::Right)
        );
    }

    #[test]
    fn test_enemies_see_updated_player() {
        let mut machine = started(small_machine(&["........"; 6]));
        machine.player = Actor::new(Position::new(3, 2), Direction::Down);
        machine.enemies = [
            Actor::new(Position::new(3, 0), Direction::Right),
            Actor::new(Position::new(7, 5), Direction::Left),
        ];

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().position, Position::new(3, 3));
        assert_eq!(machine.enemies()[0].position, Position::new(3, 1));
        assert_eq!(machine.enemies()[1].position, Position::new(6, 5));
        assert_eq!(machine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_enemies_may_overlap() {
        let mut machine = started(small_machine(&["........"; 6]));
        machine.player = Actor::new(Position::new(0, 4), Direction::Up);
        machine.enemies = [
            Actor::new(Position::new(4, 2), Direction::Left),
            Actor::new(Position::new(4, 2), Direction::Left),
        ];

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.enemies()[0].position, Position::new(3, 2));
        assert_eq!(machine.enemies()[1].position, Position::new(3, 2));
    }

    #[test]
    fn test_caught_by_first_enemy() {
        let mut machine = started(small_machine(&["........"; 6]));
        machine.player = Actor::new(Position::new(2, 2), Direction::Right);
        machine.enemies[0] = Actor::new(Position::new(4, 2), Direction::Left);

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().position, Position::new(3, 2));
        assert_eq!(machine.enemies()[0].position, Position::new(3, 2));
        assert_eq!(machine.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_caught_by_second_enemy() {
        let mut machine = started(small_machine(&["........"; 6]));
        machine.player = Actor::new(Position::new(5, 4), Direction::Down);
        machine.enemies = [
            Actor::new(Position::new(0, 0), Direction::Right),
            Actor::new(Position::new(6, 5), Direction::Up),
        ];

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().position, Position::new(5, 5));
        assert_eq!(machine.enemies()[0].position, Position::new(0, 1));
        assert_eq!(
            machine.enemies()[1],
            Actor::new(Position::new(5, 5), Direction::Left)
        );
        assert_eq!(machine.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_not_caught_when_adjacent() {
        let mut machine = started(small_machine(&[
            "........", "........", "....#...", "........", "........", "........",
        ]));
        machine.player = Actor::new(Position::new(3, 2), Direction::Left);
        machine.enemies[0] = Actor::new(Position::new(5, 2), Direction::Left);
        machine.enemies[1] = Actor::new(Position::new(7, 5), Direction::Left);

        assert!(machine.update(PAST_TICK), "tick should run");

        assert_eq!(machine.player().position, Position::new(2, 2));
        assert_eq!(
            machine.enemies()[0].position,
            Position::new(5, 2),
            "the wall should stall the enemy"
        );
        assert_eq!(machine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_game_over_freezes_until_confirm() {
        let mut machine = started(small_machine(&["........"; 6]));
        machine.player = Actor::new(Position::new(2, 2), Direction::Right);
        machine.enemies[0] = Actor::new(Position::new(4, 2), Direction::Left);
        assert!(machine.update(PAST_TICK), "tick should run");
        assert_eq!(machine.phase(), GamePhase::GameOver);

        machine.handle(Command::Steer(Direction::Up));
        assert!(!machine.update(PAST_TICK), "no tick should run after game over");

        assert_eq!(machine.player().position, Position::new(3, 2));
        assert_eq!(machine.player().facing, Direction::Right);
    }

    #[test]
    fn test_restart_resets_actors() {
        let mut machine = started(full_machine(&[]));
        machine.player = Actor::new(Position::new(3, 1), Direction::Left);
        machine.enemies[1] = Actor::new(Position::new(9, 9), Direction::Up);
        assert!(machine.update(PAST_TICK), "tick should run");
        assert_eq!(machine.phase(), GamePhase::GameOver);

        machine.handle(Command::Confirm);

        assert_eq!(machine.phase(), GamePhase::Menu);
        assert_eq!(
            *machine.player(),
            Actor::new(Position::new(20, 15), Direction::Right)
        );
        assert_eq!(
            *machine.enemies(),
            [
                Actor::new(Position::new(1, 1), Direction::Right),
                Actor::new(Position::new(38, 28), Direction::Left),
            ]
        );

        machine.handle(Command::Confirm);
        assert_eq!(machine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_confirm_while_playing_is_ignored() {
        let mut machine = started(full_machine(&[]));

        machine.handle(Command::Confirm);

        assert_eq!(machine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_quit_is_not_handled_by_machine() {
        let mut machine = full_machine(&[]);

        machine.handle(Command::Quit);

        assert_eq!(machine.phase(), GamePhase::Menu);
    }
}
