use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::core::piece::{Piece, PieceKind};

/// Piece generator: random kind, monotonically increasing id
#[derive(Debug, Clone)]
pub struct PieceGenerator<R> {
    rng: R,
    next_id: u64,
}

impl<R: Rng> PieceGenerator<R> {
    /// Create a generator around an injected random source, ids starting at 0
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Produce the next piece and advance the id counter
    pub fn generate(&mut self) -> Piece {
        let kind: PieceKind = self.rng.random();
        let id = self.tick();
        Piece::new(kind, id)
    }

    /// Id the next call to `generate` will assign
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of pieces produced so far
    pub fn generated(&self) -> u64 {
        // ids start at 0, so the next id is also the count
        self.peek_next_id()
    }

    fn tick(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        // --post operation assertion: ids never repeat
        assert!(self.next_id > id, "Piece id counter must strictly increase");
        id
    }
}

impl PieceGenerator<StdRng> {
    /// Deterministic generator, same seed gives the same kinds
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}
