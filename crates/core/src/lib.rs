//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all mutable game state. It has no
//! dependency on terminals or I/O, so it can be driven by the terminal front-end,
//! by tests feeding synthetic frame deltas, or by benchmarks.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, merging and row clearing
//! - [`shape`]: tetromino cell matrices and pure clockwise rotation
//! - [`piece`]: the active falling piece and its spawn position
//! - [`placement`]: collision tests and horizontal wall kicks
//! - [`scoring`]: line rewards, drop points, levels and gravity speed
//! - [`clock`]: gravity accumulator and frame time sources
//! - [`rng`]: piece sources (uniform random, fixed sequence)
//! - [`session`]: [`GameSession`], the single owner of game state
//! - [`snapshot`]: read-only per-frame view for presentation
//!
//! # Game Rules
//!
//! - Pieces spawn centred on row 0 and fall one row each time the drop interval
//!   elapses (900ms at level 1, 70ms faster per level, never below 100ms).
//! - A piece that cannot fall locks immediately; there is no lock delay.
//! - Rotation is clockwise only and tries horizontal kicks `0, -1, +1, -2, +2`.
//! - Full rows are cleared in a single pass after each lock.
//! - The game ends when a lock reaches above the board or a new piece has no room.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameSession::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // hard drop awards points
//! game.step(16);
//! ```

pub mod board;
pub mod clock;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, MergeError};
pub use clock::{DropClock, InstantTicks, ScriptedTicks, TickSource};
pub use piece::Piece;
pub use placement::{collides, collides_with_shape, drop_distance, try_rotate};
pub use rng::{FixedPieces, PieceSource, RandomPieces};
pub use scoring::{drop_interval_ms, drop_score, level_for_lines, line_clear_score};
pub use session::{GameSession, LockEvent};
pub use shape::{rotate_matrix, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
