//! Read-only views of the game state for renderers and observers

use arrayvec::ArrayVec;

use crate::board::Tile;
use crate::types::{Mode, TileId, MAX_TILES, TIME_LIMIT};

/// One tile as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub id: TileId,
    pub value: u8,
    pub row: u8,
    pub col: u8,
    pub selected: bool,
}

impl TileSnapshot {
    pub fn new(tile: &Tile, selected: bool) -> Self {
        Self {
            id: tile.id,
            value: tile.value,
            row: tile.row,
            col: tile.col,
            selected,
        }
    }
}

/// A full view of one game state, fillable without allocation
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub tiles: ArrayVec<TileSnapshot, MAX_TILES>,
    pub target: u32,
    pub score: u32,
    pub selection_sum: u32,
    pub mode: Mode,
    pub time_remaining: f32,
    pub overflow_warning: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.target = 0;
        self.score = 0;
        self.selection_sum = 0;
        self.mode = Mode::Classic;
        self.time_remaining = TIME_LIMIT;
        self.overflow_warning = false;
        self.paused = false;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: ArrayVec::new(),
            target: 0,
            score: 0,
            selection_sum: 0,
            mode: Mode::Classic,
            time_remaining: TIME_LIMIT,
            overflow_warning: false,
            paused: false,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_playable() {
        let snap = GameSnapshot::default();
        assert!(snap.playable());
        assert!(snap.tiles.is_empty());
        assert_eq!(snap.time_remaining, TIME_LIMIT);
    }

    #[test]
    fn test_playable_flags() {
        let mut snap = GameSnapshot::default();
        snap.paused = true;
        assert!(!snap.playable());

        snap.paused = false;
        snap.game_over = true;
        assert!(!snap.playable());
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut snap = GameSnapshot::default();
        snap.score = 120;
        snap.target = 17;
        snap.game_over = true;
        snap.tiles.push(TileSnapshot {
            id: 1,
            value: 5,
            row: 9,
            col: 0,
            selected: true,
        });

        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }

    #[test]
    fn test_tile_snapshot_from_tile() {
        let tile = Tile {
            id: 7,
            value: 3,
            row: 2,
            col: 4,
        };
        let snap = TileSnapshot::new(&tile, true);
        assert_eq!(snap.id, 7);
        assert_eq!(snap.value, 3);
        assert_eq!(snap.row, 2);
        assert_eq!(snap.col, 4);
        assert!(snap.selected);
    }
}
