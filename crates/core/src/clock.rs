//! Clock module - gravity accumulator and frame time sources
//!
//! The session never reads a clock itself. A [`TickSource`] reports how much
//! time passed since the previous frame and [`DropClock`] turns accumulated
//! time into gravity steps.

use std::collections::VecDeque;
use std::time::Instant;

/// Elapsed-time accumulator since the last forced descent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropClock {
    accumulated_ms: u32,
}

impl DropClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta_ms`; returns true (and restarts from zero) once the total
    /// exceeds `interval_ms`.
    pub fn advance(&mut self, delta_ms: u32, interval_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(delta_ms);
        if self.accumulated_ms > interval_ms {
            self.accumulated_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

/// Source of per-frame elapsed time
pub trait TickSource {
    /// Milliseconds elapsed since the previous call
    fn elapsed_ms(&mut self) -> u32;
}

/// Monotonic wall-clock ticks; the first call reports 0
#[derive(Debug, Default)]
pub struct InstantTicks {
    last: Option<Instant>,
}

impl InstantTicks {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for InstantTicks {
    fn elapsed_ms(&mut self) -> u32 {
        let now = Instant::now();
        let delta = self
            .last
            .map_or(0, |last| now.duration_since(last).as_millis());
        self.last = Some(now);
        u32::try_from(delta).unwrap_or(u32::MAX)
    }
}

/// Replays a fixed list of deltas, then reports 0 forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedTicks {
    deltas: VecDeque<u32>,
}

impl ScriptedTicks {
    pub fn new(deltas: impl IntoIterator<Item = u32>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
        }
    }

    /// `count` frames of `delta_ms` each
    pub fn repeat(delta_ms: u32, count: usize) -> Self {
        Self::new(std::iter::repeat(delta_ms).take(count))
    }

    pub fn push(&mut self, delta_ms: u32) {
        self.deltas.push_back(delta_ms);
    }

    pub fn remaining(&self) -> usize {
        self.deltas.len()
    }
}

impl TickSource for ScriptedTicks {
    fn elapsed_ms(&mut self) -> u32 {
        self.deltas.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_clock_fires_only_past_interval() {
        let mut clock = DropClock::new();
        assert!(!clock.advance(500, 900));
        assert!(!clock.advance(400, 900)); // exactly 900 is not enough
        assert_eq!(clock.accumulated_ms(), 900);
        assert!(clock.advance(1, 900));
        assert_eq!(clock.accumulated_ms(), 0);
    }

    #[test]
    fn drop_clock_discards_overshoot() {
        let mut clock = DropClock::new();
        assert!(clock.advance(5000, 100));
        assert_eq!(clock.accumulated_ms(), 0);
        assert!(!clock.advance(50, 100));
    }

    #[test]
    fn scripted_ticks_drain_then_zero() {
        let mut ticks = ScriptedTicks::new([16, 33]);
        assert_eq!(ticks.elapsed_ms(), 16);
        assert_eq!(ticks.elapsed_ms(), 33);
        assert_eq!(ticks.elapsed_ms(), 0);
        assert_eq!(ticks.remaining(), 0);
    }

    #[test]
    fn instant_ticks_start_at_zero() {
        let mut ticks = InstantTicks::new();
        assert_eq!(ticks.elapsed_ms(), 0);
    }
}
