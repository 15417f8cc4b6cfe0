pub mod command;
pub mod config;
pub mod generator;
pub mod log;
pub mod piece;
pub mod preview;
pub mod queue;
