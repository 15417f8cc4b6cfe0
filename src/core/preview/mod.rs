use rand::Rng;
pub use crate::core::{
    command::Command,
    generator::PieceGenerator,
    log::{LogEntry, Logger, Op, State},
    piece::Piece,
    queue::{PieceQueue, QueueError},
};

/// Result of applying one menu command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Head piece was played and a fresh one appended
    Played { piece: Piece, replacement: Option<Piece> },
    /// Nothing to play
    Empty,
    Inserted(Piece),
    /// Queue was full, the generated piece was dropped
    Full { discarded: Piece },
    Exit,
}

/// Upcoming-pieces preview: queue, generator and journal wired together
pub struct PiecePreview<R> {
    queue: PieceQueue,
    generator: PieceGenerator<R>,
    logger: Logger,
}

impl<R: Rng> PiecePreview<R> {
    /// Create an empty preview; call [`prime`](Self::prime) to fill it
    pub fn new(capacity: usize, generator: PieceGenerator<R>) -> Result<Self, QueueError> {
        Ok(Self {
            queue: PieceQueue::new(capacity)?,
            generator,
            logger: Logger::new(),
        })
    }

    /// Fill the queue to capacity with generated pieces
    pub fn prime(&mut self) -> usize {
        let mut added = 0;
        while !self.queue.is_full() {
            let piece = self.generator.generate();
            if self.push(piece).is_err() {
                break;
            }
            added += 1;
        }
        added
    }

    /// Play the head piece; the queue is topped up with a fresh one
    pub fn consume(&mut self) -> Option<Piece> {
        self.play().map(|(piece, _)| piece)
    }

    /// Generate a piece and append it without removing any
    pub fn insert(&mut self) -> Result<Piece, QueueError> {
        let piece = self.generator.generate();
        self.push(piece).map(|_| piece)
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Consume => match self.play() {
                Some((piece, replacement)) => Outcome::Played { piece, replacement },
                None => Outcome::Empty,
            },
            Command::Insert => {
                let piece = self.generator.generate();
                match self.push(piece) {
                    Ok(()) => Outcome::Inserted(piece),
                    Err(_) => Outcome::Full { discarded: piece },
                }
            }
            Command::Exit => Outcome::Exit,
        }
    }

    fn play(&mut self) -> Option<(Piece, Option<Piece>)> {
        let played = self.queue.dequeue();
        match played {
            Some(piece) => {
                self.logger.log(Op::Dequeue, Some(piece), State::Delivered, self.queue.len());
                let replacement = self.generator.generate();
                let replacement = self.push(replacement).ok().map(|_| replacement);
                Some((piece, replacement))
            }
            None => {
                // empty queue: no replacement is generated
                self.logger.log(Op::Dequeue, None, State::Rejected, 0);
                None
            }
        }
    }

    fn push(&mut self, piece: Piece) -> Result<(), QueueError> {
        let result = self.queue.enqueue(piece);
        let state = if result.is_ok() { State::Committed } else { State::Rejected };
        self.logger.log(Op::Enqueue, Some(piece), state, self.queue.len());
        result
    }

    /// Pieces from head to tail
    pub fn snapshot(&self) -> Vec<Piece> {
        self.queue.snapshot()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> &[LogEntry] {
        self.logger.entries()
    }

    /// Human-readable view of the queue
    pub fn render(&self) -> String {
        let body = if self.queue.is_empty() {
            "   The queue is EMPTY.".to_string()
        } else {
            let pieces: Vec<String> = self.queue.iter().map(Piece::to_string).collect();
            format!("   Queue (head -> tail): {}", pieces.join(" -> "))
        };
        format!(
            "=== UPCOMING PIECES (next {}) ===\n   Capacity: {} | Occupancy: {} | Free: {}\n{}\n==================================",
            self.queue.len(),
            self.queue.capacity(),
            self.queue.len(),
            self.queue.free(),
            body
        )
    }
}
