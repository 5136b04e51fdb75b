//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Wondrous sequence settings
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Fibonacci printer settings
    #[serde(default)]
    pub fibonacci: FibonacciConfig,

    /// Flag renderer settings
    #[serde(default)]
    pub flag: FlagConfig,
}

/// Wondrous sequence settings
#[derive(Debug, Deserialize, Clone)]
pub struct SequenceConfig {
    /// Give up after this many transformations. `0` disables the guard
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

impl SequenceConfig {
    /// Step guard as used by `SequenceCounter`
    pub fn step_limit(&self) -> Option<u64> {
        (self.max_steps > 0).then_some(self.max_steps)
    }
}

fn default_max_steps() -> u64 {
    1_000_000
}

/// Fibonacci printer settings
#[derive(Debug, Deserialize, Clone)]
pub struct FibonacciConfig {
    /// Print terms strictly below this value
    #[serde(default = "default_fib_limit")]
    pub limit: u64,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            limit: default_fib_limit(),
        }
    }
}

fn default_fib_limit() -> u64 {
    2000
}

/// Flag renderer settings, defaults draw the Danish flag
#[derive(Debug, Deserialize, Clone)]
pub struct FlagConfig {
    #[serde(default = "default_flag_width")]
    pub width: usize,

    #[serde(default = "default_flag_height")]
    pub height: usize,

    /// Row of the horizontal bar
    #[serde(default = "default_cross")]
    pub cross_row: usize,

    /// Column of the vertical bar
    #[serde(default = "default_cross")]
    pub cross_col: usize,

    #[serde(default = "default_fill")]
    pub fill: char,

    #[serde(default = "default_gap")]
    pub gap: char,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            width: default_flag_width(),
            height: default_flag_height(),
            cross_row: default_cross(),
            cross_col: default_cross(),
            fill: default_fill(),
            gap: default_gap(),
        }
    }
}

fn default_flag_width() -> usize {
    12
}
fn default_flag_height() -> usize {
    5
}
fn default_cross() -> usize {
    2
}
fn default_fill() -> char {
    '*'
}
fn default_gap() -> char {
    ' '
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
