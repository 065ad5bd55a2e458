//! CLI module for quillwiki
//!
//! Provides command-line interface for:
//! - init: Create the store file
//! - save: Write page content and append a history entry
//! - view/render: Print raw or transformed page content
//! - history: List history entries
//! - diff: Render an HTML diff between two versions

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
pub use io::read_content;
