//! YAML check scenarios
//!
//! Reads a scenario file and runs each step against the library directly,
//! so assertions are made against structured data (term lists, counts)
//! as well as printed output.

mod config;
mod runner;

pub use config::*;
pub use runner::{run_scenario, run_scenario_str, TestResult};
