//! Scenario runner implementation

use std::path::Path;

use colored::Colorize;

use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::fibonacci::{self, Fibonacci};
use crate::flag::FlagSpec;
use crate::regex_demo::{self, Substitution};
use crate::sequence::SequenceCounter;

use super::config::{CheckScenario, CheckStep, Expectation};

/// Result of a scenario run
#[derive(Debug)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub error: Option<String>,
}

/// What a step produced, for comparison against its expectation
#[derive(Debug, Default)]
struct StepOutput {
    text: String,
    terms: Option<Vec<u64>>,
    count: Option<u64>,
}

/// Run a check scenario from a YAML file
pub fn run_scenario(path: &Path, config: &Config, verbose: bool) -> Result<TestResult> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read scenario '{}': {}",
            path.display(),
            e
        ))
    })?;

    run_scenario_str(&content, config, verbose)
}

/// Run a check scenario from YAML text
pub fn run_scenario_str(content: &str, config: &Config, verbose: bool) -> Result<TestResult> {
    let scenario: CheckScenario = serde_yaml::from_str(content)
        .map_err(|e| Error::Config(format!("Failed to parse scenario: {}", e)))?;

    let steps_total = scenario.steps.len();

    println!(
        "\n{} {}",
        "Running Scenario:".blue().bold(),
        scenario.name.white().bold()
    );

    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    println!("\n{}", "Steps:".cyan());

    for (i, step) in scenario.steps.iter().enumerate() {
        let step_num = i + 1;

        if let Err(e) = execute_step(step, config, step_num, verbose) {
            println!("  {} Step {}: {}", "✗".red(), step_num, e);
            println!(
                "\n{} {}\n",
                "✗".red().bold(),
                "Scenario Failed".red().bold()
            );

            return Ok(TestResult {
                name: scenario.name,
                passed: false,
                steps_run: step_num,
                steps_total,
                error: Some(e.to_string()),
            });
        }
    }

    println!(
        "\n{} {}\n",
        "✓".green().bold(),
        "Scenario Passed".green().bold()
    );

    Ok(TestResult {
        name: scenario.name,
        passed: true,
        steps_run: steps_total,
        steps_total,
        error: None,
    })
}

/// Execute a single step and check its expectation
fn execute_step(step: &CheckStep, config: &Config, step_num: usize, verbose: bool) -> Result<()> {
    let (label, outcome, expect) = match step {
        CheckStep::Wondrous {
            start,
            max_steps,
            expect,
        } => {
            let limit = match max_steps {
                Some(0) => None,
                Some(n) => Some(*n),
                None => config.sequence.step_limit(),
            };
            (
                format!("wondrous {start}"),
                run_wondrous(*start, SequenceCounter::new(limit)),
                expect,
            )
        }

        CheckStep::Fibonacci { limit, expect } => {
            let limit = limit.unwrap_or(config.fibonacci.limit);
            (format!("fibonacci below {limit}"), run_fibonacci(limit), expect)
        }

        CheckStep::Flag {
            width,
            height,
            cross_row,
            cross_col,
            expect,
        } => {
            let flag = FlagSpec::from(config.flag.clone())
                .with_overrides(*width, *height, *cross_row, *cross_col);
            (format!("flag {}", flag.describe()), run_flag(&flag), expect)
        }

        CheckStep::Regex {
            number,
            line,
            substitutions,
            expect,
        } => (
            "regex".to_string(),
            run_regex(number.as_deref(), line.as_deref(), substitutions.as_deref()),
            expect,
        ),
    };

    if verbose {
        if let Ok(output) = &outcome {
            for line in output.text.lines() {
                println!("      {}", line.dimmed());
            }
        }
    }

    check_expectation(&label, outcome, expect)?;

    println!("  {} Step {}: {}", "✓".green(), step_num, label);
    Ok(())
}

fn run_wondrous(start: u64, counter: SequenceCounter) -> Result<StepOutput> {
    let terms = counter.collect(start)?;
    let mut buf = Vec::new();
    let count = counter.print(start, &mut buf)?;

    Ok(StepOutput {
        text: String::from_utf8_lossy(&buf).into_owned(),
        terms: Some(terms),
        count: Some(count),
    })
}

fn run_fibonacci(limit: u64) -> Result<StepOutput> {
    let mut buf = Vec::new();
    let count = fibonacci::print_series(limit, &mut buf)?;

    Ok(StepOutput {
        text: String::from_utf8_lossy(&buf).into_owned(),
        terms: Some(Fibonacci::below(limit).collect()),
        count: Some(count as u64),
    })
}

fn run_flag(flag: &FlagSpec) -> Result<StepOutput> {
    Ok(StepOutput {
        text: flag.render()?,
        ..StepOutput::default()
    })
}

fn run_regex(
    number: Option<&str>,
    line: Option<&str>,
    substitutions: Option<&[String]>,
) -> Result<StepOutput> {
    let subs = match substitutions {
        Some(raw) => raw
            .iter()
            .map(|s| Substitution::parse(s))
            .collect::<Result<Vec<_>>>()?,
        None => regex_demo::default_substitutions(),
    };

    let mut buf = Vec::new();
    regex_demo::run(
        number.unwrap_or(regex_demo::DEFAULT_NUMBER),
        line.unwrap_or(regex_demo::DEFAULT_LINE),
        &subs,
        &mut buf,
    )?;

    Ok(StepOutput {
        text: String::from_utf8_lossy(&buf).into_owned(),
        ..StepOutput::default()
    })
}

fn check_expectation(label: &str, outcome: Result<StepOutput>, expect: &Expectation) -> Result<()> {
    let output = match (outcome, &expect.error_contains) {
        (Err(e), Some(expected)) => {
            let message = e.to_string();
            if message.contains(expected.as_str()) {
                return Ok(());
            }
            return Err(Error::TestAssertion(format!(
                "Error does not contain '{}'. Got: '{}'",
                expected, message
            )));
        }
        (Err(e), None) => {
            return Err(Error::TestAssertion(format!("{} failed: {}", label, e)));
        }
        (Ok(_), Some(expected)) => {
            return Err(Error::TestAssertion(format!(
                "Expected an error containing '{}', but {} succeeded",
                expected, label
            )));
        }
        (Ok(output), None) => output,
    };

    if let Some(expected) = expect.count {
        if output.count != Some(expected) {
            return Err(Error::TestAssertion(format!(
                "Count mismatch. Expected: {}, got: {:?}",
                expected, output.count
            )));
        }
    }

    if let Some(expected) = &expect.terms {
        if output.terms.as_ref() != Some(expected) {
            return Err(Error::TestAssertion(format!(
                "Terms mismatch. Expected: {:?}, got: {:?}",
                expected, output.terms
            )));
        }
    }

    if let Some(expected_substr) = &expect.contains {
        if !output.text.contains(expected_substr.as_str()) {
            return Err(Error::TestAssertion(format!(
                "Output does not contain '{}'. Got: '{}'",
                expected_substr,
                if output.text.chars().count() > 200 {
                    format!("{}...", output.text.chars().take(200).collect::<String>())
                } else {
                    output.text.clone()
                }
            )));
        }
    }

    if let Some(expected_exact) = &expect.equals {
        if output.text.trim_end_matches('\n') != expected_exact.trim_end_matches('\n') {
            return Err(Error::TestAssertion(format!(
                "Output mismatch. Expected: '{}', got: '{}'",
                expected_exact, output.text
            )));
        }
    }

    Ok(())
}
