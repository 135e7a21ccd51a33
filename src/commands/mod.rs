//! Subcommand implementations

mod config;
mod pick;

pub use config::cmd_config;
pub use pick::{build_dropdown, cmd_pick};

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Print shell completions on stdout
pub fn cmd_completions(shell: Shell) {
    generate(shell, &mut Cli::command(), "droplist", &mut io::stdout());
}
