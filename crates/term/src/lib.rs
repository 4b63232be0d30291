//! Terminal presentation for the game.
//!
//! The view reads a `GameSnapshot` and paints a framebuffer; the renderer
//! pushes changed rows to the terminal through crossterm. Nothing here mutates
//! game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport, BOARD_BG};
pub use renderer::{dirty_rows, encode_frame, TerminalRenderer};
