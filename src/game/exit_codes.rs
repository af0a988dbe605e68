//! Stable exit codes for the `sumproduct` binary.

/// A solution was found at the target round, or every solution was listed.
pub const OK: i32 = 0;
/// The target round was reached without a solution, or never reached at all.
pub const NO_SOLUTION: i32 = 1;
/// Invalid arguments or settings.
pub const USAGE: i32 = 2;
