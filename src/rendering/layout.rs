//! # Board Layout
//!
//! Screen geometry of the board: where each tile is drawn and which tile lies
//! under a point.

use crate::game::Position;

/// Gap between tiles as a fraction of the tile size.
const GAP_RATIO: f32 = 0.075;

/// Placement of the board on screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Left edge of the first column
    pub origin_x: f32,
    /// Top edge of the first row
    pub origin_y: f32,
    /// Side length of one tile
    pub tile_size: f32,
    /// Space between neighbouring tiles
    pub gap: f32,
    /// Tiles per row and column
    pub dimension: usize,
}

impl BoardLayout {
    /// Fits a board of `dimension` tiles into the given area, centred.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfind::{BoardLayout, Position};
    ///
    /// let layout = BoardLayout::fit(5, 0.0, 0.0, 500.0, 500.0);
    /// let (x, y, size) = layout.tile_rect(Position::new(2, 2));
    /// assert_eq!(layout.cell_at(x + size / 2.0, y + size / 2.0), Some(Position::new(2, 2)));
    /// ```
    pub fn fit(dimension: usize, area_x: f32, area_y: f32, area_width: f32, area_height: f32) -> Self {
        let side = area_width.min(area_height).max(0.0);
        let tiles = dimension.max(1) as f32;
        // side = tiles * tile + (tiles - 1) * gap, with gap = tile * GAP_RATIO
        let tile_size = side / (tiles + (tiles - 1.0) * GAP_RATIO);
        let gap = tile_size * GAP_RATIO;
        let board_side = tiles * tile_size + (tiles - 1.0) * gap;

        Self {
            origin_x: area_x + (area_width - board_side) / 2.0,
            origin_y: area_y + (area_height - board_side) / 2.0,
            tile_size,
            gap,
            dimension,
        }
    }

    /// Distance from one tile's edge to the next.
    pub fn pitch(&self) -> f32 {
        self.tile_size + self.gap
    }

    /// Total width (and height) of the board.
    pub fn board_side(&self) -> f32 {
        self.dimension as f32 * self.pitch() - self.gap
    }

    /// Top-left corner and size of a tile.
    pub fn tile_rect(&self, pos: Position) -> (f32, f32, f32) {
        (
            self.origin_x + pos.x as f32 * self.pitch(),
            self.origin_y + pos.y as f32 * self.pitch(),
            self.tile_size,
        )
    }

    /// The tile under a screen point.
    ///
    /// The gap after a tile counts as part of that tile, so dragging across
    /// the board never falls between tiles.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        let rel_x = x - self.origin_x;
        let rel_y = y - self.origin_y;
        let side = self.board_side();
        if rel_x < 0.0 || rel_y < 0.0 || rel_x >= side || rel_y >= side {
            return None;
        }

        let col = ((rel_x / self.pitch()) as usize).min(self.dimension - 1);
        let row = ((rel_y / self.pitch()) as usize).min(self.dimension - 1);
        Some(Position::new(col, row))
    }
}
