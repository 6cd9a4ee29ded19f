//! # Letter Grid
//!
//! The square matrix of letter cells produced by puzzle generation.

use crate::config::UNFILLED;
use crate::game::{Axis, Position, WordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single letter cell.
///
/// A cell belongs to at most one across word and at most one down word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Letter shown on the tile, or the unfilled marker
    pub letter: char,
    /// Word running across through this cell
    pub across: Option<WordId>,
    /// Word running down through this cell
    pub down: Option<WordId>,
}

impl Cell {
    /// Creates an unfilled cell with no word tags.
    pub fn unfilled() -> Self {
        Self {
            letter: UNFILLED,
            across: None,
            down: None,
        }
    }

    /// Whether a letter has been written to this cell.
    pub fn is_filled(&self) -> bool {
        self.letter != UNFILLED
    }

    /// Gets the word tag for the given axis.
    pub fn tag(&self, axis: Axis) -> Option<WordId> {
        match axis {
            Axis::Across => self.across,
            Axis::Down => self.down,
        }
    }

    /// Sets the word tag for the given axis.
    pub fn set_tag(&mut self, axis: Axis, word_id: WordId) {
        match axis {
            Axis::Across => self.across = Some(word_id),
            Axis::Down => self.down = Some(word_id),
        }
    }

    /// Whether this cell is part of any placed word.
    pub fn is_tagged(&self) -> bool {
        self.across.is_some() || self.down.is_some()
    }

    /// Whether this cell carries exactly the given tag.
    pub fn has_tag(&self, axis: Axis, word_id: WordId) -> bool {
        self.tag(axis) == Some(word_id)
    }

    /// Iterates over the (axis, word) tags present on this cell.
    pub fn tags(&self) -> impl Iterator<Item = (Axis, WordId)> + '_ {
        Axis::all()
            .into_iter()
            .filter_map(move |axis| self.tag(axis).map(|id| (axis, id)))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::unfilled()
    }
}

/// Square grid of letter cells.
///
/// # Examples
///
/// ```
/// use wordfind::{Grid, Position};
///
/// let grid = Grid::new(4);
/// assert_eq!(grid.dimension(), 4);
/// assert!(grid.get(Position::new(3, 3)).is_some());
/// assert!(grid.get(Position::new(4, 0)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimension: usize,
    /// Rows of cells, indexed `cells[y][x]`
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid with every cell unfilled.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![vec![Cell::unfilled(); dimension]; dimension],
        }
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether the position lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.dimension && pos.y < self.dimension
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x))
    }

    /// Gets the cell at a position mutably.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.cells.get_mut(pos.y).and_then(|row| row.get_mut(pos.x))
    }

    /// Gets the rows of the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |y| (0..dimension).map(move |x| Position::new(x, y)))
    }

    /// Iterates over every cell with its position in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x, y), cell))
        })
    }

    /// Reads `len` letters starting at `origin` along `axis`.
    ///
    /// Returns None if the span leaves the grid.
    pub fn read_span(&self, origin: Position, axis: Axis, len: usize) -> Option<String> {
        (0..len)
            .map(|i| self.get(origin.step(axis, i)).map(|cell| cell.letter))
            .collect()
    }

    /// Gets every position tagged with the given word on the given axis.
    pub fn positions_with_tag(&self, axis: Axis, word_id: WordId) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.has_tag(axis, word_id))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of cells still holding the unfilled marker.
    pub fn unfilled_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_filled()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.letter).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
