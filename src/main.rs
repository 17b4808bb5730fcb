//! Spotcheck CLI
//!
//! Demonstration caller for the spotcheck library: runs the inline-testing
//! scenarios through a counting harness and exposes the slice/range helpers
//! as subcommands.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use spotcheck::{check, seq, Harness};

#[derive(Parser)]
#[command(name = "spotcheck")]
#[command(version = "0.1.0")]
#[command(about = "Inline assertion harness and sequence utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the inline-testing and slices/ranges demonstrations
    Demo {
        /// Print the run summary as JSON instead of colored text
        #[arg(long)]
        json: bool,
    },
    /// Slice a comma-separated list of integers
    ///
    /// Example: spotcheck slice 10,20,30,40,50 1 4
    Slice {
        /// Comma-separated integer values
        #[arg(value_name = "VALUES")]
        values: String,
        /// Start index (inclusive)
        #[arg(value_name = "START")]
        start: usize,
        /// End index (exclusive)
        #[arg(value_name = "END")]
        end: usize,
    },
    /// Generate a stepped integer range
    ///
    /// Example: spotcheck range 0 10 2
    Range {
        /// First value (inclusive)
        #[arg(value_name = "START")]
        start: i64,
        /// Stop boundary (exclusive)
        #[arg(value_name = "END")]
        end: i64,
        /// Step between values, may be negative
        #[arg(value_name = "STEP")]
        step: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo { json } => run_demo(json),
        Commands::Slice { values, start, end } => run_slice(&values, start, end),
        Commands::Range { start, end, step } => run_range(start, end, step),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn add(a: i64, b: i64) -> i64 {
    a + b
}

fn is_even(number: i64) -> bool {
    number % 2 == 0
}

fn run_demo(json: bool) -> anyhow::Result<()> {
    let mut harness = Harness::new();

    harness.run_test("Addition Test", |h| {
        check!(h, add(2, 3) == 5);
        check!(h, add(-1, 1) == 0);
    });

    harness.run_test("Even Number Test", |h| {
        check!(h, is_even(4));
        check!(h, !is_even(5));
    });

    harness.run_test("String Equality Test", |h| {
        let hello = "Hello".to_string();
        let world = "World";
        check!(h, hello + " " + world == "Hello World");
    });

    let nums = vec![10, 20, 30, 40, 50];
    let sub = seq::slice(&nums, 1, 4)?;
    println!("Sliced Array: {}", join(&sub));
    println!("Range-based Loop: {}", join(&seq::generate_range(0, 10, 2)?));

    let summary = harness.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let tag = if summary.all_passed() {
            "ok".green().bold()
        } else {
            "FAILED".red().bold()
        };
        println!(
            "{}: {} passed, {} failed",
            tag, summary.passed, summary.failed
        );
    }

    if !summary.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_slice(values: &str, start: usize, end: usize) -> anyhow::Result<()> {
    let nums = parse_values(values)?;
    let sub = seq::slice(&nums, start, end)?;
    println!("{}", join(&sub));
    Ok(())
}

fn run_range(start: i64, end: i64, step: i64) -> anyhow::Result<()> {
    let values = seq::generate_range(start, end, step)?;
    println!("{}", join(&values));
    Ok(())
}

fn parse_values(values: &str) -> anyhow::Result<Vec<i64>> {
    values
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid integer: {}", v.trim()))
        })
        .collect()
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
