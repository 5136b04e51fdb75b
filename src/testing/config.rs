//! Check scenario configuration types
//!
//! Defines the data structures for deserializing YAML check scenarios.

use serde::Deserialize;

/// A complete check scenario loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct CheckScenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario verifies
    pub description: Option<String>,
    /// The steps to execute, in order
    pub steps: Vec<CheckStep>,
}

/// A single step of a scenario
#[derive(Deserialize, Debug)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CheckStep {
    /// Compute a wondrous sequence
    Wondrous {
        start: u64,
        /// Step guard; falls back to the loaded configuration
        max_steps: Option<u64>,
        #[serde(default)]
        expect: Expectation,
    },
    /// Print the Fibonacci series
    Fibonacci {
        limit: Option<u64>,
        #[serde(default)]
        expect: Expectation,
    },
    /// Render a flag
    Flag {
        width: Option<usize>,
        height: Option<usize>,
        cross_row: Option<usize>,
        cross_col: Option<usize>,
        #[serde(default)]
        expect: Expectation,
    },
    /// Run the regex demo
    Regex {
        number: Option<String>,
        line: Option<String>,
        /// `PATTERN=REPLACEMENT` entries; defaults to the built-in demo
        substitutions: Option<Vec<String>>,
        #[serde(default)]
        expect: Expectation,
    },
}

/// Assertions about a step's result; unset fields are not checked
#[derive(Deserialize, Debug, Default)]
pub struct Expectation {
    /// Expected number of terms
    pub count: Option<u64>,
    /// Expected terms, in order
    pub terms: Option<Vec<u64>>,
    /// Expected substring in printed output
    pub contains: Option<String>,
    /// Expected printed output (compared after trimming)
    pub equals: Option<String>,
    /// The step must fail with an error containing this text
    pub error_contains: Option<String>,
}
