//! Command-line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Config;
use crate::sources::SourceKind;

#[derive(Parser)]
#[command(name = "droplist")]
#[command(author, version, about = "Searchable dropdown picker for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick an item interactively and print its value
    Pick(PickArgs),

    /// Show the effective configuration
    Config {
        /// Only print the config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PickArgs {
    /// Where items come from
    #[arg(short, long, value_enum)]
    pub source: Option<SourceKind>,

    /// Options file (.json or .toml); implies `--source file`
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Quiet period before searching, in ms (0 = every keystroke)
    #[arg(short, long)]
    pub throttle: Option<u64>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Simulated latency for the word list, in ms
    #[arg(long)]
    pub latency: Option<u64>,

    /// Don't move the highlight when the pointer hovers an item
    #[arg(long)]
    pub no_hover: bool,

    /// Text shown before anything is picked
    #[arg(short, long)]
    pub placeholder: Option<String>,
}

impl PickArgs {
    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = self.source {
            config.source = source;
        } else if self.options.is_some() {
            config.source = SourceKind::File;
        }
        if let Some(ms) = self.throttle {
            config.throttle_ms = ms;
        }
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        if let Some(ms) = self.latency {
            config.latency_ms = ms;
        }
        if self.no_hover {
            config.select_on_hover = false;
        }
        if self.placeholder.is_some() {
            config.placeholder = self.placeholder.clone();
        }
    }
}
