use std::num::NonZeroUsize;
use std::path::PathBuf;
use clap::Parser;

/// Command-line parameters for the piece preview.
#[derive(Parser, Debug, Clone)]
#[command(name = "next-pieces", author, version, about)]
pub struct Config {
    /// Number of upcoming pieces kept in the preview.
    #[arg(long = "capacity", default_value = "5")]
    pub capacity: NonZeroUsize,

    /// Seed for the piece randomizer; omit for an OS-seeded run.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Append the operation journal to this NDJSON file on exit.
    #[arg(long = "journal")]
    pub journal: Option<PathBuf>,
}
