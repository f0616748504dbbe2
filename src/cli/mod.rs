//! CLI module for fruitstand
//!
//! Provides the `serve` command: connect to the record store named by the
//! connection URI and serve the fruit pages.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
