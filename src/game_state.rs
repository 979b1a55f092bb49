//! Game state module - manages the complete game state
//!
//! This module ties together the board, RNG, and scoring rules. It handles
//! selection toggling, match resolution, row advancement, the timed-mode
//! round clock, pause, and game lifecycle.
//!
//! Every public operation runs to completion before returning; in
//! particular a selection toggle and its match resolution are a single
//! transaction, so callers never observe a selection whose sum has not
//! been checked against the target.

use arrayvec::ArrayVec;

use crate::board::{Board, Tile};
use crate::rng::SimpleRng;
use crate::scoring::{match_score, qualifies_for_celebration, time_bonus};
use crate::types::{
    MatchEvent, Mode, TileId, GRID_COLS, GRID_ROWS, INITIAL_ROWS, MAX_TILES, TIME_LIMIT,
    WARNING_ROW,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Selected tile ids in insertion order.
    selection: ArrayVec<TileId, MAX_TILES>,
    mode: Mode,
    target: u32,
    score: u32,
    /// Seconds left on the round clock (timed mode only).
    time_remaining: f32,
    paused: bool,
    game_over: bool,
    /// Monotonic id for spawned tiles (increments on every spawn).
    next_tile_id: TileId,
    /// Last resolved match (consumed by observers).
    last_event: Option<MatchEvent>,
    rng: SimpleRng,
}

impl GameState {
    /// Start a new session in the given mode with the given RNG seed
    ///
    /// The board is filled with `INITIAL_ROWS` full rows of random tiles at
    /// the bottom of the grid and a fresh target is drawn. Always succeeds.
    pub fn new(mode: Mode, seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            selection: ArrayVec::new(),
            mode,
            target: 0,
            score: 0,
            time_remaining: TIME_LIMIT,
            paused: false,
            game_over: false,
            next_tile_id: 0,
            last_event: None,
            rng: SimpleRng::new(seed),
        };
        state.target = state.rng.target_sum();
        for row in (GRID_ROWS - INITIAL_ROWS)..GRID_ROWS {
            state.fill_row(row);
        }
        state
    }

    /// Start a fresh session, carrying the RNG stream forward
    pub fn restart(&mut self, mode: Mode) {
        *self = Self::new(mode, self.rng.state());
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Currently selected tile ids, in the order they were selected
    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    /// Sum of the values of all selected tiles
    pub fn selection_sum(&self) -> u32 {
        self.selection
            .iter()
            .filter_map(|&id| self.board.tile(id))
            .map(|tile| tile.value as u32)
            .sum()
    }

    /// Whether any tile has reached the near-top danger rows
    pub fn is_overflow_warning(&self) -> bool {
        matches!(self.board.min_row(), Some(row) if row <= WARNING_ROW)
    }

    /// Take and clear the last match event
    pub fn take_last_event(&mut self) -> Option<MatchEvent> {
        self.last_event.take()
    }

    /// Fill a caller-owned snapshot with the current state
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        use crate::snapshot::TileSnapshot;

        out.tiles.clear();
        for tile in self.board.tiles() {
            out.tiles
                .push(TileSnapshot::new(tile, self.selection.contains(&tile.id)));
        }
        out.target = self.target;
        out.score = self.score;
        out.selection_sum = self.selection_sum();
        out.mode = self.mode;
        out.time_remaining = self.time_remaining;
        out.overflow_warning = self.is_overflow_warning();
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut snap = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Suspend or resume play
    ///
    /// While paused, `select_tile` and `advance_time` are no-ops; board,
    /// selection, score, and clock are all preserved for resumption.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Toggle a tile in or out of the selection and resolve the result
    ///
    /// Ignored while paused or game over. An id that is not on the board is
    /// tolerated: it toggles nothing (and is dropped from the selection if
    /// it somehow lingers there). Returns true when the selection changed.
    pub fn select_tile(&mut self, id: TileId) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        if !self.board.contains(id) {
            // Stale reference from a caller holding an old snapshot.
            if let Some(pos) = self.selection.iter().position(|&sel| sel == id) {
                self.selection.remove(pos);
            }
            return false;
        }

        match self.selection.iter().position(|&sel| sel == id) {
            Some(pos) => {
                self.selection.remove(pos);
            }
            None => self.selection.push(id),
        }
        self.resolve_selection();
        true
    }

    /// Match evaluation - runs after every selection change
    fn resolve_selection(&mut self) {
        let sum = self.selection_sum();
        if !self.selection.is_empty() && sum == self.target {
            self.resolve_match();
        } else if sum > self.target {
            // Bust: overshooting forfeits the selection with no other
            // effect on score, board, or target.
            self.selection.clear();
        }
    }

    /// Clear the matched tiles, score them, and set up the next round
    fn resolve_match(&mut self) {
        let selected = std::mem::take(&mut self.selection);
        let bonus = time_bonus(self.mode, self.time_remaining);
        let delta = match_score(selected.len(), self.mode, self.time_remaining);

        for &id in &selected {
            self.board.remove(id);
        }
        self.score += delta;
        self.target = self.rng.target_sum();
        self.time_remaining = TIME_LIMIT;
        self.last_event = Some(MatchEvent {
            tiles_cleared: selected.len() as u32,
            score_delta: delta,
            time_bonus: bonus,
            celebration: qualifies_for_celebration(selected.len()),
        });

        if self.mode == Mode::Classic {
            // Clearing costs a row in classic mode.
            self.advance_row();
        }
    }

    /// Shift the grid up one row and append a fresh bottom row
    ///
    /// If any tile already sits at row 0 the session ends instead: the
    /// board is left untouched as the last state before loss, and no new
    /// row is appended.
    pub fn advance_row(&mut self) {
        if self.game_over {
            return;
        }
        if !self.board.shift_up() {
            self.game_over = true;
            return;
        }
        self.fill_row(GRID_ROWS - 1);
    }

    /// Timed-mode clock tick
    ///
    /// Accepts an arbitrary elapsed delta so the caller's scheduler cadence
    /// does not matter. When the clock reaches zero, one row advancement is
    /// forced and the clock resets to the full limit; the overshoot is
    /// discarded rather than carried into the next round. Returns true when
    /// a row advancement was forced. Ignored outside timed mode and while
    /// paused or game over.
    pub fn advance_time(&mut self, delta: f32) -> bool {
        if !self.mode.is_timed() || self.game_over || self.paused {
            return false;
        }
        let remaining = self.time_remaining - delta;
        if remaining <= 0.0 {
            self.advance_row();
            self.time_remaining = TIME_LIMIT;
            true
        } else {
            self.time_remaining = remaining.min(TIME_LIMIT);
            false
        }
    }

    /// Fill one grid row with freshly drawn tiles
    fn fill_row(&mut self, row: u8) {
        for col in 0..GRID_COLS {
            self.next_tile_id = self.next_tile_id.wrapping_add(1);
            let tile = Tile {
                id: self.next_tile_id,
                value: self.rng.tile_value(),
                row,
                col,
            };
            let inserted = self.board.insert(tile);
            debug_assert!(inserted, "spawn cell ({}, {}) must be vacant", row, col);
        }
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_target(&mut self, target: u32) {
        self.target = target;
    }

    #[cfg(test)]
    pub fn set_time_remaining(&mut self, secs: f32) {
        self.time_remaining = secs;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::Classic, 1)
    }
}
