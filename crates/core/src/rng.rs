//! Piece sources - where the next piece kind comes from
//!
//! Gameplay draws every kind uniformly at random. Tests and benchmarks use a
//! fixed repeating sequence so scenarios are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplier of piece kinds for spawning
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniformly random kinds
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: StdRng,
}

impl RandomPieces {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct FixedPieces {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl FixedPieces {
    /// Panics if `kinds` is empty
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "FixedPieces needs at least one kind");
        Self { kinds, next: 0 }
    }

    /// Always the same kind
    pub fn only(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for FixedPieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
