//! Ready-made item sources
//!
//! - `words`: built-in list of command-line tools, paged in memory
//! - `crates`: crates.io search
//! - `file`: a JSON or TOML options file, filtered synchronously

mod crates_io;
mod static_list;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use crates_io::CratesIoSource;
pub use static_list::StaticSource;

use crate::model::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Words,
    Crates,
    File,
}

/// Built-in demo data
pub const WORDS: &[&str] = &[
    "bat", "bottom", "broot", "choose", "delta", "difftastic", "dust", "eza", "fd", "fzf",
    "gitui", "glow", "grex", "helix", "hexyl", "htop", "hyperfine", "jless", "jq", "just",
    "lazygit", "lsd", "mcfly", "miniserve", "navi", "nushell", "ouch", "pastel", "procs",
    "ripgrep", "ruff", "sd", "skim", "starship", "tealdeer", "tokei", "topgrade", "xh",
    "yazi", "zellij", "zoxide", "atuin", "bandwhich", "bacon", "cargo-edit", "cargo-watch",
    "dog", "du-dust", "fselect", "gping", "kondo", "macchina", "onefetch", "qsv",
    "rga", "silicon", "tailspin", "trippy", "watchexec", "xsv",
];

pub fn words() -> Vec<Choice> {
    WORDS.iter().map(|w| Choice::new(*w)).collect()
}

#[derive(Debug, Deserialize)]
struct OptionsFile {
    options: Vec<Choice>,
}

/// Read choices from a `.json` or `.toml` file with a top-level `options`
/// array. A JSON file may also be a bare array.
pub fn load_options(path: &Path) -> Result<Vec<Choice>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options from {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let options = match ext {
        "toml" => {
            toml::from_str::<OptionsFile>(&content)
                .with_context(|| format!("Failed to parse options from {}", path.display()))?
                .options
        }
        "json" => serde_json::from_str::<Vec<Choice>>(&content)
            .or_else(|_| serde_json::from_str::<OptionsFile>(&content).map(|f| f.options))
            .with_context(|| format!("Failed to parse options from {}", path.display()))?,
        other => bail!("Unsupported options file type '{other}' (expected .json or .toml)"),
    };
    Ok(options)
}
