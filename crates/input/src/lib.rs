//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]. The mapping is a
//! flat lookup: one key press produces at most one action and there is no
//! auto-repeat handling beyond what the terminal itself sends.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
