//! Maze grid data, loading and validation.
//!
//! This module contains the [`Maze`] occupancy grid together with the parser for the maze file
//! format: one line per row, each line holding whitespace-separated `0` (open) and `1` (wall)
//! cells. The grid has a fixed size derived from [`Settings`], so any file with a different shape
//! is rejected at load time.

use std::{error::Error, fmt, fs, path::Path};

use color_eyre::eyre::{Result, WrapErr as _};
use log::info;

use crate::{config::Settings, types::Position};

/// Kind of a single maze tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Tile actors can walk onto.
    Open,
    /// Tile that blocks every move into it.
    Wall,
}

/// Reasons a maze source can be rejected.
///
/// Line and column numbers are 1-based so they can be reported to the operator as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FormatError {
    /// The settings derive a grid without rows or columns.
    EmptyGrid,
    /// A line holds more cells than the grid width.
    TooManyColumns {
        /// Offending line.
        line: usize,
    },
    /// A line holds fewer cells than the grid width.
    TooFewColumns {
        /// Offending line.
        line: usize,
        /// Number of cells found on the line.
        found: usize,
    },
    /// The source holds more lines than the grid height.
    TooManyRows {
        /// Number of rows the grid expects.
        expected: usize,
    },
    /// The source holds fewer lines than the grid height.
    TooFewRows {
        /// Number of rows the grid expects.
        expected: usize,
        /// Number of lines found in the source.
        found: usize,
    },
    /// A cell is neither `0` nor `1`.
    InvalidCell {
        /// Line holding the cell.
        line: usize,
        /// Position of the cell within its line.
        column: usize,
        /// Raw text of the cell.
        token: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(formatter, "the configured maze grid has no cells"),
            Self::TooManyColumns { line } => write!(formatter, "too many columns in line {line}"),
            Self::TooFewColumns { line, found } => {
                write!(formatter, "not enough columns in line {line} (found {found})")
            }
            Self::TooManyRows { expected } => {
                write!(formatter, "too many rows in the file (expected {expected})")
            }
            Self::TooFewRows { expected, found } => write!(
                formatter,
                "not enough lines in the file: expected {expected} lines, but got {found} lines"
            ),
            Self::InvalidCell {
                line,
                column,
                token,
            } => write!(
                formatter,
                "invalid cell {token:?} at line {line}, column {column} (expected 0 or 1)"
            ),
        }
    }
}

impl Error for FormatError {}

/// Static occupancy grid of the maze.
///
/// This structure holds the tiles of the maze in row-major order. It is built once at startup and
/// never mutated afterwards; every row has exactly `width` tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Tiles in row-major order.
    cells: Vec<Cell>,
}

impl Maze {
    /// Reads and parses a maze file.
    ///
    /// # Errors
    ///
    /// This function fails if the file cannot be read or if its contents do not describe a grid
    /// of exactly the size given by `settings`.
    pub fn from_file(path: &Path, settings: &Settings) -> Result<Self> {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not open maze file {}", path.display()))?;
        let maze = Self::load(&source, settings)
            .wrap_err_with(|| format!("failed to load maze from {}", path.display()))?;

        info!(
            "loaded {}x{} maze from {}",
            maze.width,
            maze.height,
            path.display()
        );

        Ok(maze)
    }

    /// Parses a maze from its textual form.
    ///
    /// # Errors
    ///
    /// This function returns a [`FormatError`] for any line with the wrong number of cells, a
    /// wrong number of lines, or a cell that is neither `0` nor `1`.
    pub(crate) fn load(source: &str, settings: &Settings) -> Result<Self, FormatError> {
        let width = settings.grid_width();
        let height = settings.grid_height();
        if width == 0 || height == 0 {
            return Err(FormatError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut rows = 0;

        for (idx, line) in source.lines().enumerate() {
            let line_number = idx + 1;
            if rows == height {
                return Err(FormatError::TooManyRows { expected: height });
            }

            let mut columns = 0;
            for token in line.split_whitespace() {
                if columns == width {
                    return Err(FormatError::TooManyColumns { line: line_number });
                }
                columns += 1;

                let cell = match token {
                    "0" => Cell::Open,
                    "1" => Cell::Wall,
                    _ => {
                        return Err(FormatError::InvalidCell {
                            line: line_number,
                            column: columns,
                            token: token.to_owned(),
                        })
                    }
                };
                cells.push(cell);
            }

            if columns != width {
                return Err(FormatError::TooFewColumns {
                    line: line_number,
                    found: columns,
                });
            }

            rows += 1;
        }

        if rows != height {
            return Err(FormatError::TooFewRows {
                expected: height,
                found: rows,
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns of the grid.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows of the grid.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the tile at a position, or `None` outside of the grid.
    pub(crate) fn cell(&self, position: Position) -> Option<Cell> {
        if position.x >= self.width || position.y >= self.height {
            return None;
        }

        self.cells
            .get(position.y * self.width + position.x)
            .copied()
    }

    /// Checks whether a tile blocks movement.
    ///
    /// Positions outside of the grid are never produced by movement, and are reported as walls.
    pub(crate) fn is_wall(&self, position: Position) -> bool {
        !matches!(self.cell(position), Some(Cell::Open))
    }

    /// Iterates over the positions of every wall tile, row by row.
    pub(crate) fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| *cell == Cell::Wall)
            .map(|(idx, _)| Position::new(idx % self.width, idx / self.width))
    }
}
