mod commands;
pub mod history;

pub use commands::{Command, CommandOutcome};
pub use history::History;
