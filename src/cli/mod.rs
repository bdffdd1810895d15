pub mod commands;
pub mod views;

pub use commands::{Cli, Commands, run};
