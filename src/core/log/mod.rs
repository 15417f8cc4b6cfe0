use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use crate::core::piece::Piece;
use serde::{Serialize, Deserialize};

/// Queue operation recorded in the journal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Enqueue,
    Dequeue,
}

/// Outcome of a queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Committed,
    Delivered,
    Rejected,
}

/// Log entry recording an operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,
    pub op: Op,
    pub piece: Option<Piece>, // None for a dequeue on an empty queue
    pub state: State,
    pub occupancy: usize,     // queue length after the operation
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {:?} ", self.seq, self.op)?;
        match &self.piece {
            Some(piece) => write!(f, "{piece}")?,
            None => write!(f, "-")?,
        }
        write!(f, " {:?} (occupancy {})", self.state, self.occupancy)
    }
}

/// Logger storing all entries
#[derive(Clone, Debug)]
pub struct Logger {
    entries: Vec<LogEntry>,
    next_seq: u64,
}

impl Logger {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_seq: 1 }
    }

    /// Log an operation, returning its sequence number
    pub fn log(&mut self, op: Op, piece: Option<Piece>, state: State, occupancy: usize) -> u64 {
        // --- Negative-space assertion: state must match operation ---
        match op {
            Op::Enqueue => assert!(
                matches!(state, State::Committed | State::Rejected),
                "Enqueue must be Committed or Rejected"
            ),
            Op::Dequeue => assert!(
                matches!(state, State::Delivered | State::Rejected),
                "Dequeue must be Delivered or Rejected"
            ),
        }

        let seq = self.next_seq;
        self.next_seq = seq + 1;

        let before = self.entries.len();
        self.entries.push(LogEntry { seq, op, piece, state, occupancy });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
        seq
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries recorded after the given sequence number
    pub fn since(&self, seq: u64) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.seq > seq)
            .cloned()
            .collect()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Append entries to `path` as NDJSON, one object per line
pub fn append_logs(log: &[LogEntry], path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).map_err(io::Error::other)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}
