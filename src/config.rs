//! User configuration
//!
//! Read from `<config dir>/droplist/config.toml`. Every field is optional in
//! the file; anything missing falls back to its default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_THROTTLE_MS;
use crate::sources::SourceKind;

/// Color theme for the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuiTheme {
    #[default]
    CatppuccinMocha,
    Dracula,
    Nord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before a search fires, in ms (0 = on every keystroke)
    pub throttle_ms: u64,
    /// Items requested per page
    pub page_size: usize,
    /// Hovering an item makes it current
    pub select_on_hover: bool,
    /// Skip the initial load; fetch when the dropdown first opens
    pub load_only_when_needed: bool,
    /// Text shown before anything is selected
    pub placeholder: Option<String>,
    /// Shown when a search has no results; `{term}` is replaced
    pub no_results: String,
    /// Default source for `droplist pick`
    pub source: SourceKind,
    /// Simulated latency for the built-in word list, in ms
    pub latency_ms: u64,
    pub theme: TuiTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            page_size: 20,
            select_on_hover: true,
            load_only_when_needed: false,
            placeholder: None,
            no_results: "No results for '{term}'".to_string(),
            source: SourceKind::default(),
            latency_ms: 0,
            theme: TuiTheme::default(),
        }
    }
}

impl Config {
    /// Directory holding the config file
    pub fn config_dir() -> Result<PathBuf> {
        ProjectDirs::from("", "", "droplist")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .context("Could not determine config directory")
    }

    /// Directory for logs
    pub fn data_dir() -> Result<PathBuf> {
        ProjectDirs::from("", "", "droplist")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("Could not determine data directory")
    }

    pub fn path() -> Result<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// No-results text for `term`
    pub fn no_results_text(&self, term: &str) -> String {
        self.no_results.replace("{term}", term)
    }
}
