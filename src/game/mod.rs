//! # Game Module
//!
//! Core game state management, board representation, and selection handling.
//!
//! This module contains the fundamental building blocks of a Wordfind round:
//! - The generated letter grid and the board flags layered on top of it
//! - Round state, word table and statistics
//! - The press/drag/release gesture state machine
//! - The word-completion check run after every gesture

pub mod board;
pub mod events;
pub mod gesture;
pub mod grid;
pub mod selection;
pub mod state;
pub mod words;

pub use board::*;
pub use events::*;
pub use gesture::*;
pub use grid::*;
pub use selection::*;
pub use state::*;
pub use words::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Represents a cell coordinate on the board.
///
/// `x` is the column (grows across), `y` is the row (grows down).
///
/// # Examples
///
/// ```
/// use wordfind::{Axis, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Axis::Across, 2), Position::new(4, 3));
/// assert_eq!(pos.step(Axis::Down, 1), Position::new(2, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position `offset` cells further along `axis`.
    pub fn step(self, axis: Axis, offset: usize) -> Self {
        match axis {
            Axis::Across => Self::new(self.x + offset, self.y),
            Axis::Down => Self::new(self.x, self.y + offset),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction a word runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right along a row (the "x-word" tag)
    Across,
    /// Top to bottom along a column (the "y-word" tag)
    Down,
}

impl Axis {
    /// Returns both axes.
    pub fn all() -> [Axis; 2] {
        [Axis::Across, Axis::Down]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Across => write!(f, "across"),
            Axis::Down => write!(f, "down"),
        }
    }
}

/// Identity of a placed word within one round.
///
/// Ids index the round's word table, so two equal strings placed twice get
/// two distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub usize);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for a game round.
pub type RoundId = Uuid;

/// Creates a new unique round ID.
pub fn new_round_id() -> RoundId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.step(Axis::Across, 0), pos);
        assert_eq!(pos.step(Axis::Across, 3), Position::new(4, 1));
        assert_eq!(pos.step(Axis::Down, 3), Position::new(1, 4));
    }

    #[test]
    fn test_axis_all() {
        assert_eq!(Axis::all(), [Axis::Across, Axis::Down]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(Axis::Across.to_string(), "across");
        assert_eq!(WordId(2).to_string(), "#2");
    }

    #[test]
    fn test_round_id_uniqueness() {
        let id1 = new_round_id();
        let id2 = new_round_id();
        assert_ne!(id1, id2);
    }
}
