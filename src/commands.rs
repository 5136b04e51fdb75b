//! CLI command definitions
//!
//! Defines the clap commands for the wondrous CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the wondrous (Collatz) sequence for a start term
    #[command(alias = "collatz")]
    Wondrous {
        /// Start term; read from stdin when omitted
        start: Option<String>,

        /// Give up after this many transformations (0 = never)
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print the number of terms after the sequence
        #[arg(long)]
        count: bool,

        /// Output the sequence as JSON
        #[arg(long, conflicts_with = "count")]
        json: bool,
    },

    /// Print the Fibonacci series below a limit
    #[command(alias = "fibonacci")]
    Fib {
        /// Print terms strictly below this value
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Draw a cross flag in ASCII (Danish by default)
    Flag {
        #[arg(long)]
        width: Option<usize>,

        #[arg(long)]
        height: Option<usize>,

        /// Row of the horizontal bar
        #[arg(long)]
        cross_row: Option<usize>,

        /// Column of the vertical bar
        #[arg(long)]
        cross_col: Option<usize>,
    },

    /// Regular expression match and substitution demo
    Regex {
        /// Decimal number to split into integer and fraction
        #[arg(long)]
        number: Option<String>,

        /// Line to rewrite
        #[arg(long)]
        line: Option<String>,

        /// Substitution as PATTERN=REPLACEMENT, applied in order.
        /// Can be specified multiple times: --sub cat=dog --sub hat=watermelon
        #[arg(long = "sub", short = 's')]
        substitutions: Vec<String>,
    },

    /// Execute a check scenario defined in a YAML file
    Verify {
        /// Path to the YAML scenario file
        path: PathBuf,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },
}
