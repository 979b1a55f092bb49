//! Scoring module - match scoring rules
//!
//! A resolved match is worth a fixed number of points per cleared tile.
//! In timed mode the seconds left on the round clock, rounded up, are
//! added as a bonus; classic mode has no time term.

use crate::types::{Mode, CELEBRATION_THRESHOLD, POINTS_PER_TILE, TIME_LIMIT};

/// Timed-mode bonus for the remaining round clock
///
/// The clock is clamped to [0, TIME_LIMIT] before rounding up, so a full
/// clock yields the maximum bonus and an expired one yields zero.
pub fn time_bonus(mode: Mode, time_remaining: f32) -> u32 {
    match mode {
        Mode::Classic => 0,
        Mode::Timed => time_remaining.clamp(0.0, TIME_LIMIT).ceil() as u32,
    }
}

/// Total score for clearing `tile_count` tiles
pub fn match_score(tile_count: usize, mode: Mode, time_remaining: f32) -> u32 {
    POINTS_PER_TILE * tile_count as u32 + time_bonus(mode, time_remaining)
}

/// Whether a clear of this size fires the celebration signal
pub fn qualifies_for_celebration(tile_count: usize) -> bool {
    tile_count >= CELEBRATION_THRESHOLD
}
