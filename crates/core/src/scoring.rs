//! Scoring module - line clear rewards, drop points and level progression
//!
//! Rules:
//! - Clearing `r` rows at level `L` awards `LINE_SCORES[r] * L`, where `L` is the
//!   level before the clear is counted.
//! - Level is `lines / 10 + 1`; it only ever grows because lines only grow.
//! - Soft drop awards 1 point per row, hard drop 2 per row, regardless of level.

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS,
    SOFT_DROP_POINTS, START_LEVEL,
};

/// Reward for clearing `rows` rows in a single lock at `level`.
///
/// Anything outside 1..=4 rows scores nothing.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(rows)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Points for a drop of `cells` rows
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    let per_cell = if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    cells.saturating_mul(per_cell)
}

/// Level for a total line count
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level (milliseconds per row)
///
/// `max(100, 900 - (level - 1) * 70)`
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}
