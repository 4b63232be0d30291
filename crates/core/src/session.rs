//! Game session - owns the board, the active piece and the score
//!
//! All mutation goes through three entry points: [`GameSession::step`] for
//! elapsed time, [`GameSession::apply_action`] for player input and
//! [`GameSession::reset`] for restart. Everything runs on the caller's thread;
//! input and frames never interleave.

use log::{debug, info, trace};

use crate::board::Board;
use crate::clock::{DropClock, TickSource};
use crate::piece::Piece;
use crate::placement::{collides, drop_distance, try_rotate};
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{drop_interval_ms, drop_score, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, START_LEVEL};

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub game_over: bool,
}

/// Complete game state for one player
#[derive(Debug, Clone)]
pub struct GameSession<P: PieceSource = RandomPieces> {
    board: Board,
    active: Piece,
    source: P,
    clock: DropClock,
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
}

impl GameSession<RandomPieces> {
    /// New game with a reproducible random piece sequence
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandomPieces::seeded(seed))
    }
}

impl<P: PieceSource> GameSession<P> {
    /// New game on an empty board
    pub fn with_source(source: P) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// New game on a pre-filled board.
    ///
    /// If the first piece cannot spawn the session starts out game-over.
    pub fn with_board(board: Board, mut source: P) -> Self {
        let active = Piece::spawn(source.next_kind());
        let game_over = collides(&board, &active, 0, 0);
        Self {
            board,
            active,
            source,
            clock: DropClock::new(),
            last_event: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            game_over,
        }
    }

    /// Empty the board, zero the score and spawn a fresh piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = Piece::spawn(self.source.next_kind());
        self.clock.reset();
        self.last_event = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.game_over = false;
        info!("session reset, first piece {}", self.active.kind.letter());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    pub fn clock(&self) -> &DropClock {
        &self.clock
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by `delta_ms`.
    ///
    /// Returns true if gravity fired this step (the piece moved down or locked).
    pub fn step(&mut self, delta_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        let interval = self.drop_interval_ms();
        if !self.clock.advance(delta_ms, interval) {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Pull one frame's delta from `ticks` and step
    pub fn run_frame(&mut self, ticks: &mut impl TickSource) -> bool {
        let delta = ticks.elapsed_ms();
        self.step(delta)
    }

    /// Apply a player action; returns whether anything changed.
    ///
    /// Everything except [`GameAction::Restart`] is ignored once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Shift one column left (`-1`) or right (`1`) if the target is free
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        !self.game_over && self.try_move(dx, 0)
    }

    /// Move one row down for 1 point; no lock when blocked
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over || !self.try_move(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(drop_score(1, false));
        true
    }

    /// Rotate clockwise with horizontal kicks; unchanged if nothing fits
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match try_rotate(&self.board, &self.active) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => {
                trace!("rotation of {} rejected", self.active.kind.letter());
                false
            }
        }
    }

    /// Drop straight down, 2 points per row, then lock. Returns rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let distance = drop_distance(&self.board, &self.active);
        self.active.y += distance as i8;
        self.score = self.score.saturating_add(drop_score(distance, true));
        self.lock_piece();
        distance
    }

    /// Merge the active piece, clear rows, score and spawn the next piece.
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }

        if let Err(err) = self.board.merge_piece(&self.active) {
            info!("game over: {err}");
            self.game_over = true;
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                line_clear_score: 0,
                game_over: true,
            });
            return;
        }

        let cleared = self.board.clear_full_rows();
        let mut reward = 0;
        if cleared > 0 {
            reward = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(reward);
            self.lines = self.lines.saturating_add(cleared as u32);

            let level = level_for_lines(self.lines);
            if level > self.level {
                info!("level up: {} -> {}", self.level, level);
            }
            self.level = level;
            debug!(
                "cleared {cleared} rows for {reward} points (lines {}, score {})",
                self.lines, self.score
            );
        }

        self.active = Piece::spawn(self.source.next_kind());
        if collides(&self.board, &self.active, 0, 0) {
            info!(
                "game over: {} blocked at spawn, final score {}",
                self.active.kind.letter(),
                self.score
            );
            self.game_over = true;
        } else {
            debug!("spawned {}", self.active.kind.letter());
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            line_clear_score: reward,
            game_over: self.game_over,
        });
    }

    /// Whether the active piece could move by (dx, dy)
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        !collides(&self.board, &self.active, dx, dy)
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_move(dx, dy) {
            return false;
        }
        self.active = self.active.shifted(dx, dy);
        true
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut Piece {
        &mut self.active
    }
}
