//! Wondrous - a Collatz sequence counter with small companion demos
//!
//! The core is [`sequence`]: a lazy term iterator and a counter with an
//! optional step guard. The Fibonacci, flag, and regex modules are short
//! command-line demos that share the same error, logging, and config layers.

pub mod cli;
pub mod commands;
pub mod common;
pub mod fibonacci;
pub mod flag;
pub mod regex_demo;
pub mod sequence;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use sequence::{SequenceCounter, SequenceReport};
