//! # Board
//!
//! A frozen letter grid together with the per-tile interaction flags.
//!
//! Letters and word tags never change once a board exists; only the
//! `selected` and `cleared` flags do.

use crate::game::{Axis, Cell, Grid, Position, WordId};
use crate::{WordfindError, WordfindResult};
use serde::{Deserialize, Serialize};

/// Interaction flags for one tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFlags {
    /// Tile is part of the current selection
    pub selected: bool,
    /// Tile belongs to a word that has been found
    pub cleared: bool,
}

/// Board handed to rendering and selection after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    /// Flags indexed `flags[y][x]`, same shape as the grid
    flags: Vec<Vec<TileFlags>>,
}

impl Board {
    /// Freezes a generated grid into a board with all flags cleared.
    pub fn new(grid: Grid) -> Self {
        let dimension = grid.dimension();
        Self {
            grid,
            flags: vec![vec![TileFlags::default(); dimension]; dimension],
        }
    }

    /// Read-only access to the letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.grid.get(pos)
    }

    /// Gets the flags at a position.
    pub fn flags(&self, pos: Position) -> Option<&TileFlags> {
        self.flags.get(pos.y).and_then(|row| row.get(pos.x))
    }

    fn flags_mut(&mut self, pos: Position) -> WordfindResult<&mut TileFlags> {
        self.flags
            .get_mut(pos.y)
            .and_then(|row| row.get_mut(pos.x))
            .ok_or_else(|| WordfindError::InvalidInput(format!("Position {} is off the board", pos)))
    }

    /// Whether the tile at a position is selected.
    pub fn is_selected(&self, pos: Position) -> bool {
        self.flags(pos).is_some_and(|flags| flags.selected)
    }

    /// Whether the tile at a position is cleared.
    pub fn is_cleared(&self, pos: Position) -> bool {
        self.flags(pos).is_some_and(|flags| flags.cleared)
    }

    /// Flips the selected flag of a tile and returns the new value.
    pub fn toggle_selected(&mut self, pos: Position) -> WordfindResult<bool> {
        let flags = self.flags_mut(pos)?;
        flags.selected = !flags.selected;
        Ok(flags.selected)
    }

    /// Sets the selected flag of a tile and returns whether it changed.
    pub fn set_selected(&mut self, pos: Position, selected: bool) -> WordfindResult<bool> {
        let flags = self.flags_mut(pos)?;
        let changed = flags.selected != selected;
        flags.selected = selected;
        Ok(changed)
    }

    /// Marks tiles cleared and drops their selection.
    pub fn mark_cleared(&mut self, positions: &[Position]) -> WordfindResult<()> {
        for &pos in positions {
            let flags = self.flags_mut(pos)?;
            flags.cleared = true;
            flags.selected = false;
        }
        Ok(())
    }

    /// Drops the selection from the given tiles.
    pub fn deselect(&mut self, positions: &[Position]) -> WordfindResult<()> {
        for &pos in positions {
            self.flags_mut(pos)?.selected = false;
        }
        Ok(())
    }

    /// Gets all selected positions in row-major order.
    pub fn selected_positions(&self) -> Vec<Position> {
        self.grid
            .positions()
            .filter(|&pos| self.is_selected(pos))
            .collect()
    }

    /// Gets every position tagged with the given word on the given axis.
    pub fn word_positions(&self, axis: Axis, word_id: WordId) -> Vec<Position> {
        self.grid.positions_with_tag(axis, word_id)
    }

    /// Whether every tile that belongs to a word has been cleared.
    pub fn all_words_cleared(&self) -> bool {
        self.grid
            .cells()
            .filter(|(_, cell)| cell.is_tagged())
            .all(|(pos, _)| self.is_cleared(pos))
    }
}
