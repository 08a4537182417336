//! Assessment Finder CLI library.
//!
//! Configuration and profiles, command execution, the interactive REPL and
//! output formatting for the `finder` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;
