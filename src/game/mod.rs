pub mod exit_codes;
pub mod puzzle_runner;
pub mod settings;

pub use puzzle_runner::{all_solutions, find_round, run, TargetOutcome};
pub use settings::{Settings, SettingsError};
