//! Command-line driver for the sum and product puzzle.
//!
//! Peter is told the product and Sandy the sum of two numbers below N.
//! They take turns saying whether they know the numbers; this prints the
//! rounds at which one of them could.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use sumproduct::game::{exit_codes, puzzle_runner, Settings};

#[derive(Parser)]
#[command(
    name = "sumproduct",
    version,
    about = "Find the rounds at which Peter (product) or Sandy (sum) can know the numbers"
)]
struct Cli {
    /// Max number to choose from (default: 100, numbers 1-99). Must be an integer > 1.
    #[arg(short = 'n', value_name = "NUM", value_parser = clap::value_parser!(u64).range(2..))]
    max_number: Option<u64>,

    /// Target round for the answer; stop there even without a result.
    /// Omit to print every possible solution. Must be an integer > 0.
    #[arg(short = 'r', value_name = "NUM", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    target_round: Option<usize>,

    /// Print results as JSON lines.
    #[arg(long)]
    json: bool,

    /// JSON settings file; flags given on the command line take precedence.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("load settings from {}", path.display()))?,
            None => Settings::default(),
        }
        .with_overrides(self.max_number, self.target_round, self.json);
        settings.validate()?;
        Ok(settings)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::USAGE);
        }
    };

    match run(&settings) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::NO_SOLUTION);
        }
    }
}

fn run(settings: &Settings) -> Result<i32> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    puzzle_runner::run(settings, &mut stdout.lock(), &mut stderr.lock()).context("write report")
}
