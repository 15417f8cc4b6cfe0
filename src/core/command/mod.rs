use std::str::FromStr;

/// Menu choice read from the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play the head piece, refilling the preview
    Consume,
    /// Add one more piece at the tail
    Insert,
    Exit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid option: {0:?}")]
    Invalid(String),
}

impl Command {
    pub const MENU: &'static str = "\
--- Actions ---
1. Play next piece (dequeue)
2. Insert new piece (enqueue)
0. Exit";
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(Command::Consume),
            "2" => Ok(Command::Insert),
            "0" => Ok(Command::Exit),
            other => Err(CommandError::Invalid(other.to_string())),
        }
    }
}
