//! Sum-matching puzzle game engine - pure, deterministic, and testable
//!
//! Numbered tiles fill a 6x10 grid from the bottom; the player selects
//! tiles whose values sum exactly to the round target, clearing them for
//! points. Two pacing modes share the same rules: in **classic** mode every
//! cleared match pushes a new row onto the grid, in **timed** mode an
//! expiring round clock does. The session ends when a row advancement would
//! push a tile above the top of the grid.
//!
//! The engine has no UI, networking, or rendering dependencies, making it:
//!
//! - **Deterministic**: the same seed produces an identical session
//! - **Testable**: every rule is exercised without a renderer
//! - **Portable**: drive it from a terminal, a GUI, or a headless harness
//!
//! # Module Structure
//!
//! - [`board`]: the 6x10 tile grid with cell-uniqueness and row shifting
//! - [`game_state`]: selection, match resolution, scoring, clock, lifecycle
//! - [`rng`]: seeded value generation for tiles and targets
//! - [`scoring`]: match score and celebration rules
//! - [`snapshot`]: read-only views for renderers and observers
//! - [`store`]: the durable high-score scalar
//!
//! # Example
//!
//! ```
//! use sumstack::{GameState, Mode};
//!
//! let mut game = GameState::new(Mode::Classic, 12345);
//! assert_eq!(game.board().len(), 24);
//! assert!((10..=25).contains(&game.target()));
//!
//! // Toggle a tile and read the running sum.
//! let first = game.board().tiles()[0].id;
//! game.select_tile(first);
//! assert!(game.selection_sum() >= 1);
//! ```
//!
//! # Driving the clock
//!
//! In timed mode an external scheduler calls
//! [`GameState::advance_time`](game_state::GameState::advance_time) with
//! the elapsed seconds (the reference cadence is 0.1 s); the engine accepts
//! arbitrary deltas so jitter and missed ticks are harmless. Classic mode
//! needs no ticks at all.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod store;
pub mod types;

pub use board::{Board, Tile};
pub use game_state::GameState;
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use store::HighScoreStore;
pub use types::{MatchEvent, Mode, TileId};
