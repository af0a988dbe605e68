use std::io::{self, Write};

use log::{debug, trace};
use serde::Serialize;

use super::exit_codes;
use super::settings::Settings;
use crate::model::{Deduction, RoundResult};
use crate::solver::generate_solutions;

/// What happened when looking for a solution at a specific round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TargetOutcome {
    Solved { round: usize, deduction: Deduction },
    NoSolution { round: usize },
    NotReached { target: usize, stopped_at: usize },
}

impl TargetOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            TargetOutcome::Solved { .. } => exit_codes::OK,
            _ => exit_codes::NO_SOLUTION,
        }
    }
}

/// Plays rounds until `target`, stopping early if the puzzle runs out of progress.
pub fn find_round(max_number: u64, target: usize) -> TargetOutcome {
    let mut stopped_at = 0;
    for result in generate_solutions(max_number) {
        stopped_at = result.round;
        if result.round == target {
            return match result.result {
                Some(deduction) => TargetOutcome::Solved {
                    round: result.round,
                    deduction,
                },
                None => TargetOutcome::NoSolution {
                    round: result.round,
                },
            };
        }
    }
    debug!(
        target: "puzzle_runner",
        "Progress stopped at round {} before round {}",
        stopped_at,
        target
    );
    TargetOutcome::NotReached { target, stopped_at }
}

/// Every round in which somebody could know the numbers.
pub fn all_solutions(max_number: u64) -> Vec<RoundResult> {
    generate_solutions(max_number)
        .filter(RoundResult::is_solved)
        .collect()
}

fn write_round<W: Write>(out: &mut W, round: usize, deduction: &Deduction) -> io::Result<()> {
    writeln!(out, "Round: {} {}", round, deduction)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Runs the puzzle as configured, reporting to `out` and `err`. Returns the exit code.
pub fn run<O: Write, E: Write>(settings: &Settings, out: &mut O, err: &mut E) -> io::Result<i32> {
    trace!(target: "puzzle_runner", "Running with {:?}", settings);
    match settings.target_round {
        Some(target) => run_targeted(settings, target, out, err),
        None => run_exhaustive(settings, Settings::is_debug_mode(), out),
    }
}

fn run_targeted<O: Write, E: Write>(
    settings: &Settings,
    target: usize,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let outcome = find_round(settings.max_number, target);

    if settings.json {
        write_json(out, &outcome)?;
        return Ok(outcome.exit_code());
    }

    writeln!(
        out,
        "Finding a solution for N = {} targeting {} rounds.",
        settings.max_number, target
    )?;
    match &outcome {
        TargetOutcome::Solved { round, deduction } => write_round(out, *round, deduction)?,
        TargetOutcome::NoSolution { round } => writeln!(err, "no solution at round {}", round)?,
        TargetOutcome::NotReached { target, stopped_at } => writeln!(
            err,
            "did not reach round {} (progress stopped at round {})",
            target, stopped_at
        )?,
    }
    Ok(outcome.exit_code())
}

fn run_exhaustive<O: Write>(settings: &Settings, show_unsolved: bool, out: &mut O) -> io::Result<i32> {
    if !settings.json {
        writeln!(out, "Finding all solutions for N = {}", settings.max_number)?;
    }

    for result in generate_solutions(settings.max_number) {
        if settings.json {
            if result.is_solved() || show_unsolved {
                write_json(out, &result)?;
            }
            continue;
        }
        match &result.result {
            Some(deduction) => write_round(out, result.round, deduction)?,
            None if show_unsolved => writeln!(out, "Round: {} nobody knows", result.round)?,
            None => (),
        }
    }
    Ok(exit_codes::OK)
}
