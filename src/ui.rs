//! User interface rendering functions for every game phase.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    maze::Maze,
    state::GameStateMachine,
    types::{Banner, GamePhase, Position},
};

/// Terminal columns used to draw a single maze tile.
///
/// Terminal cells are roughly twice as tall as they are wide, so two columns per tile keep the
/// maze square.
pub(crate) const TILE_COLUMNS: usize = 2;

/// Color of wall tiles.
const WALL_COLOR: Color = Color::Blue;
/// Color of the player.
const PLAYER_COLOR: Color = Color::Yellow;
/// Color of the enemies.
const ENEMY_COLOR: Color = Color::Red;

/// Updates the application UI based on the state of the game.
///
/// This function renders the banner matching the current phase, or the maze with every actor
/// while playing.
///
/// # Errors
///
/// This function may return errors from layout or coordinate conversion failures.
pub(crate) fn draw(game: &GameStateMachine, frame: &mut Frame) -> Result<()> {
    match game.phase() {
        GamePhase::Menu => banner(frame, Banner::Title),
        GamePhase::GameOver => banner(frame, Banner::GameOver),
        GamePhase::Playing => in_game(game, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Centers a rectangle of the given size within an area, shrinking it to fit if needed.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [space] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    space
}

/// Renders one of the full-screen banners shown outside of play.
///
/// The banner is a bordered block centered on screen, titled with the banner's heading and holding
/// the prompt for the confirm key. The bottom border lists the quit key.
pub(crate) fn banner(frame: &mut Frame, banner: Banner) {
    clear(frame);

    let prompt = Line::raw(banner.prompt()).centered();
    let width = u16::try_from(prompt.width()).unwrap_or(u16::MAX).saturating_add(6);
    let layout = centered(frame.area(), width, 3);

    let block = Block::bordered()
        .title(Line::styled(banner.heading(), Style::default().fg(banner.accent())))
        .title_bottom("(q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(banner.accent()))
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);
    frame.render_widget(prompt.style(Style::default().fg(Color::White)), inner_space);
}

/// Renders the in-game screen with the maze, the player and both enemies.
///
/// Everything is drawn on a single [`Canvas`] widget whose bounds are set so that each point lands
/// on exactly one terminal cell. Enemies are drawn last so a capture shows the enemy on top.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or layout lookups.
pub(crate) fn in_game(game: &GameStateMachine, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze = game.maze();
    let maze_columns = u16::try_from(maze.width() * TILE_COLUMNS)?;
    let maze_rows = u16::try_from(maze.height())?;

    // Maze area on top, key hints below
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(2)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let space = centered(maze_content_area, maze_columns, maze_rows);
    let tooltip_area = centered(tooltip_full_area, maze_columns, 2);

    let walls: Vec<Position> = maze.walls().collect();
    let wall_coords = transform_grid_to_screen_coords(&walls, maze)?;
    let player_coords = transform_grid_to_screen_coords(&[game.player().position], maze)?;
    let enemy_positions: Vec<Position> = game
        .enemies()
        .iter()
        .map(|enemy| enemy.position)
        .collect();
    let enemy_coords = transform_grid_to_screen_coords(&enemy_positions, maze)?;

    let half_width = (f64::from(space.width) - 1.) / 2.;
    let half_height = (f64::from(space.height) - 1.) / 2.;

    let board = Canvas::default()
        .x_bounds([-half_width, half_width])
        .y_bounds([-half_height, half_height])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: WALL_COLOR,
            });
            ctx.draw(&Points {
                coords: &player_coords,
                color: PLAYER_COLOR,
            });
            ctx.draw(&Points {
                coords: &enemy_coords,
                color: ENEMY_COLOR,
            });
        });

    frame.render_widget(board, space);

    let tooltip_block = Block::bordered()
        .title("(arrows / hjkl) steer / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Transforms grid positions to canvas coordinates.
///
/// The canvas is centered on the origin with one unit per terminal cell. Every tile covers
/// [`TILE_COLUMNS`] cells of a row, so each position yields that many points: the column of cell
/// `i` maps to `i - (n - 1) / 2` and row `j` maps to `(m - 1) / 2 - j`, `n` and `m` being the
/// width and height of the canvas in cells.
///
/// # Errors
///
/// This function may return errors if a coordinate does not fit the terminal coordinate range.
pub(crate) fn transform_grid_to_screen_coords(
    positions: &[Position],
    maze: &Maze,
) -> Result<Vec<(f64, f64)>> {
    let cols_n = f64::from(u16::try_from(maze.width() * TILE_COLUMNS)?);
    let rows_n = f64::from(u16::try_from(maze.height())?);

    let mut coords = Vec::with_capacity(positions.len() * TILE_COLUMNS);
    for position in positions {
        let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(position.y)?);

        for offset in 0..TILE_COLUMNS {
            let column = u16::try_from(position.x * TILE_COLUMNS + offset)?;
            let screen_x = f64::from(column) - (cols_n - 1.) / 2.;
            coords.push((screen_x, screen_y));
        }
    }

    Ok(coords)
}
