//! Error types for the wondrous CLI
//!
//! Messages are meant to be read by a person at a terminal, with a hint
//! on how to fix the input where one exists.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the wondrous CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Sequence Errors ===
    #[error("Invalid start term '{input}': {reason}")]
    InvalidStart { input: String, reason: String },

    #[error("Sequence from {start} did not reach 1 within {steps} steps. Raise --max-steps or set [sequence] max_steps in the config")]
    NonTerminatingSequence { start: u64, steps: u64 },

    #[error("Term {term} is too large: 3 * {term} + 1 overflows a 64-bit integer")]
    TermOverflow { term: u64 },

    // === Regex Errors ===
    #[error("Pattern '{pattern}' does not match '{text}'")]
    NoMatch { pattern: String, text: String },

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid substitution '{0}'. Expected PATTERN=REPLACEMENT")]
    InvalidSubstitution(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Test Errors ===
    #[error("Test assertion failed: {0}")]
    TestAssertion(String),
}

impl Error {
    /// Create an invalid start error
    pub fn invalid_start(input: &str, reason: &str) -> Self {
        Self::InvalidStart {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a no match error
    pub fn no_match(pattern: &str, text: &str) -> Self {
        Self::NoMatch {
            pattern: pattern.to_string(),
            text: text.to_string(),
        }
    }
}
