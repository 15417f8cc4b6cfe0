use std::fmt::{Display, Formatter};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Serialize, Deserialize};

/// Shape symbol of an upcoming piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// The full alphabet, in sampling order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    pub fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// A piece identity: its shape plus the order in which it was created.
///
/// Only [`PieceGenerator`](crate::core::generator::PieceGenerator) hands out
/// fresh ids, so within one run no two pieces share an `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    id: u64,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}
