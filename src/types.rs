//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_COLS: u8 = 6;
pub const GRID_ROWS: u8 = 10;

/// Rows pre-filled with tiles when a session starts
pub const INITIAL_ROWS: u8 = 4;

/// Maximum number of tiles the grid can hold
pub const MAX_TILES: usize = GRID_COLS as usize * GRID_ROWS as usize;

/// Timed-mode round clock (seconds)
pub const TIME_LIMIT: f32 = 10.0;

/// Reference tick cadence (seconds); `advance_time` accepts arbitrary deltas
pub const TICK_INTERVAL: f32 = 0.1;

/// Target-sum range (inclusive)
pub const TARGET_MIN: u32 = 10;
pub const TARGET_MAX: u32 = 25;

/// Tile-value range (inclusive)
pub const TILE_MIN: u32 = 1;
pub const TILE_MAX: u32 = 9;

/// Points awarded per cleared tile
pub const POINTS_PER_TILE: u32 = 10;

/// Cleared-tile count at which the celebration signal fires
pub const CELEBRATION_THRESHOLD: usize = 4;

/// Tiles at or above this row trigger the near-top warning
pub const WARNING_ROW: u8 = 1;

/// Tile identity, unique for the tile's lifetime within a session
pub type TileId = u32;

/// Game pacing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Move-paced: every cleared match pushes a new row onto the grid
    Classic,
    /// Time-paced: an expiring round clock pushes a new row onto the grid
    Timed,
}

impl Mode {
    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use sumstack::Mode;
    ///
    /// assert_eq!(Mode::from_str("classic"), Some(Mode::Classic));
    /// assert_eq!(Mode::from_str("Timed"), Some(Mode::Timed));
    /// assert_eq!(Mode::from_str("time"), Some(Mode::Timed));
    /// assert_eq!(Mode::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Mode::Classic),
            "timed" | "time" => Some(Mode::Timed),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Timed => "timed",
        }
    }

    /// Whether the round clock is active in this mode
    pub fn is_timed(&self) -> bool {
        matches!(self, Mode::Timed)
    }
}

/// Engine-side event emitted when a selection resolves as a match.
///
/// This is consumed by observers via `GameState::take_last_event`; the
/// `celebration` flag is a cosmetic signal for the feedback collaborator,
/// not a state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub tiles_cleared: u32,
    pub score_delta: u32,
    /// Timed-mode portion of `score_delta` (zero in classic mode)
    pub time_bonus: u32,
    pub celebration: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("classic"), Some(Mode::Classic));
        assert_eq!(Mode::from_str("CLASSIC"), Some(Mode::Classic));
        assert_eq!(Mode::from_str("timed"), Some(Mode::Timed));
        assert_eq!(Mode::from_str("time"), Some(Mode::Timed));
        assert_eq!(Mode::from_str(""), None);
        assert_eq!(Mode::from_str("endless"), None);
    }

    #[test]
    fn test_mode_as_str_round_trip() {
        for mode in [Mode::Classic, Mode::Timed] {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_mode_is_timed() {
        assert!(!Mode::Classic.is_timed());
        assert!(Mode::Timed.is_timed());
    }

    #[test]
    fn test_grid_constants_consistent() {
        assert_eq!(MAX_TILES, 60);
        assert!(INITIAL_ROWS < GRID_ROWS);
        assert!(TARGET_MIN <= TARGET_MAX);
        assert!(TILE_MIN <= TILE_MAX);
        // The smallest target must exceed the largest tile value, so a
        // single selected tile can never match and an empty selection
        // (sum zero) never spuriously matches.
        assert!(TARGET_MIN > TILE_MAX);
    }
}
