pub mod game;
pub mod model;
pub mod solver;

pub use model::{Deduction, Pair, Person, RoundResult};
pub use solver::generate_solutions;
