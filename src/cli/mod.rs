//! CLI command handling
//!
//! Dispatches CLI commands to the library and writes their output.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::fibonacci;
use crate::flag::FlagSpec;
use crate::regex_demo::{self, Substitution};
use crate::sequence::{self, SequenceCounter};
use crate::testing;

/// Prompt shown when the start term comes from an interactive stdin
pub const START_PROMPT: &str = "Please enter a start term for wondrous: ";

/// Dispatch a CLI command
pub fn dispatch(command: Commands, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Wondrous {
            start,
            max_steps,
            count,
            json,
        } => {
            let input = match start {
                Some(text) => text,
                None => read_start_line(&mut out)?,
            };
            let start = sequence::parse_start(&input)?;

            let max_steps = match max_steps {
                Some(0) => None,
                Some(n) => Some(n),
                None => config.sequence.step_limit(),
            };
            let counter = SequenceCounter::new(max_steps);

            if json {
                let report = counter.report(start)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                let terms = counter.print(start, &mut out)?;
                if count {
                    writeln!(out, "Terms: {terms}")?;
                }
            }
            Ok(())
        }

        Commands::Fib { limit } => {
            let limit = limit.unwrap_or(config.fibonacci.limit);
            fibonacci::print_series(limit, &mut out)?;
            Ok(())
        }

        Commands::Flag {
            width,
            height,
            cross_row,
            cross_col,
        } => {
            let flag = FlagSpec::from(config.flag.clone())
                .with_overrides(width, height, cross_row, cross_col);

            tracing::debug!(flag = %flag.describe(), "rendering flag");
            flag.write_to(&mut out)
        }

        Commands::Regex {
            number,
            line,
            substitutions,
        } => {
            let subs = if substitutions.is_empty() {
                regex_demo::default_substitutions()
            } else {
                substitutions
                    .iter()
                    .map(|s| Substitution::parse(s))
                    .collect::<Result<Vec<_>>>()?
            };

            regex_demo::run(
                number.as_deref().unwrap_or(regex_demo::DEFAULT_NUMBER),
                line.as_deref().unwrap_or(regex_demo::DEFAULT_LINE),
                &subs,
                &mut out,
            )
        }

        Commands::Verify { path, verbose } => {
            drop(out);
            let result = testing::run_scenario(&path, config, verbose)?;
            if result.passed {
                Ok(())
            } else {
                Err(Error::TestAssertion(format!(
                    "scenario '{}' failed at step {} of {}",
                    result.name, result.steps_run, result.steps_total
                )))
            }
        }
    }
}

/// Read one line from stdin, prompting first if a person is typing
fn read_start_line<W: Write>(out: &mut W) -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        write!(out, "{START_PROMPT}")?;
        out.flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}
