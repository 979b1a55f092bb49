//! Board module - manages the tile grid
//!
//! The grid is 6 columns x 10 rows. Row 0 is the top (the danger zone);
//! the highest row index is the bottom spawn row. Tiles carry their own
//! identity and position and are stored in a fixed-capacity list for
//! zero-allocation lookups, with at most one tile per (row, col) cell.

use arrayvec::ArrayVec;

use crate::types::{TileId, GRID_COLS, GRID_ROWS, MAX_TILES};

/// A single numbered tile occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u8,
    pub row: u8,
    pub col: u8,
}

/// The tile grid - a bounded set of tiles with unique ids and unique cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    tiles: ArrayVec<Tile, MAX_TILES>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            tiles: ArrayVec::new(),
        }
    }

    /// Number of tiles currently on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles on the board, in insertion order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Whether a tile with this id is present
    pub fn contains(&self, id: TileId) -> bool {
        self.tile(id).is_some()
    }

    /// Look up the tile occupying a cell, if any
    pub fn at(&self, row: u8, col: u8) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|tile| tile.row == row && tile.col == col)
    }

    /// Add a tile to the board
    ///
    /// Returns false without mutating when the position is out of bounds,
    /// the cell is already occupied, the id is already present, or the
    /// board is full.
    pub fn insert(&mut self, tile: Tile) -> bool {
        if tile.row >= GRID_ROWS || tile.col >= GRID_COLS {
            return false;
        }
        if self.at(tile.row, tile.col).is_some() || self.contains(tile.id) {
            return false;
        }
        self.tiles.try_push(tile).is_ok()
    }

    /// Remove a tile by id, returning it if it was present
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.tiles.iter().position(|tile| tile.id == id)?;
        Some(self.tiles.remove(pos))
    }

    /// Shift every tile up one row
    ///
    /// Returns false and leaves the board untouched when any tile already
    /// sits at row 0: a shift would push it off the top, and the pre-shift
    /// grid is kept as the last state before loss.
    pub fn shift_up(&mut self) -> bool {
        if self.tiles.iter().any(|tile| tile.row == 0) {
            return false;
        }
        for tile in &mut self.tiles {
            tile.row -= 1;
        }
        true
    }

    /// Topmost occupied row, if the board has any tiles
    pub fn min_row(&self) -> Option<u8> {
        self.tiles.iter().map(|tile| tile.row).min()
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: TileId, value: u8, row: u8, col: u8) -> Tile {
        Tile {
            id,
            value,
            row,
            col,
        }
    }

    #[test]
    fn test_board_new_empty() {
        let board = Board::new();
        assert_eq!(board.len(), 0);
        assert!(board.is_empty());
        assert_eq!(board.min_row(), None);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut board = Board::new();

        assert!(board.insert(tile(1, 5, 9, 0)));
        assert!(board.insert(tile(2, 3, 9, 1)));

        assert_eq!(board.len(), 2);
        assert!(board.contains(1));
        assert_eq!(board.tile(2).map(|t| t.value), Some(3));
        assert_eq!(board.at(9, 0).map(|t| t.id), Some(1));
        assert_eq!(board.at(9, 2), None);
        assert!(!board.contains(3));
    }

    #[test]
    fn test_insert_rejects_occupied_cell() {
        let mut board = Board::new();

        assert!(board.insert(tile(1, 5, 9, 0)));
        assert!(!board.insert(tile(2, 3, 9, 0)));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut board = Board::new();

        assert!(board.insert(tile(1, 5, 9, 0)));
        assert!(!board.insert(tile(1, 5, 9, 1)));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_insert_rejects_out_of_bounds() {
        let mut board = Board::new();

        assert!(!board.insert(tile(1, 5, GRID_ROWS, 0)));
        assert!(!board.insert(tile(2, 5, 0, GRID_COLS)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut board = Board::new();
        board.insert(tile(1, 5, 9, 0));
        board.insert(tile(2, 3, 9, 1));

        let removed = board.remove(1);
        assert_eq!(removed.map(|t| t.id), Some(1));
        assert_eq!(board.len(), 1);
        assert!(!board.contains(1));

        // Removing again is a miss
        assert_eq!(board.remove(1), None);

        // The cell is free again
        assert!(board.insert(tile(3, 7, 9, 0)));
    }

    #[test]
    fn test_shift_up_moves_every_tile() {
        let mut board = Board::new();
        board.insert(tile(1, 5, 9, 0));
        board.insert(tile(2, 3, 6, 4));

        assert!(board.shift_up());
        assert_eq!(board.tile(1).map(|t| t.row), Some(8));
        assert_eq!(board.tile(2).map(|t| t.row), Some(5));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_shift_up_overflow_leaves_board_untouched() {
        let mut board = Board::new();
        board.insert(tile(1, 5, 0, 0));
        board.insert(tile(2, 3, 4, 2));
        let before = board.clone();

        assert!(!board.shift_up());
        assert_eq!(board, before);
    }

    #[test]
    fn test_min_row() {
        let mut board = Board::new();
        board.insert(tile(1, 5, 9, 0));
        assert_eq!(board.min_row(), Some(9));

        board.insert(tile(2, 3, 4, 2));
        assert_eq!(board.min_row(), Some(4));

        board.remove(2);
        assert_eq!(board.min_row(), Some(9));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.insert(tile(1, 5, 9, 0));
        board.insert(tile(2, 3, 9, 1));

        board.clear();
        assert!(board.is_empty());
        assert!(!board.contains(1));
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut board = Board::new();
        let mut id = 0;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                id += 1;
                assert!(board.insert(tile(id, 1, row, col)));
            }
        }
        assert_eq!(board.len(), MAX_TILES);

        // Full board cannot shift: row 0 is occupied
        assert!(!board.shift_up());
    }
}
