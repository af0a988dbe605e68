pub mod candidate_space;
pub mod elimination;
pub mod solution_generator;

pub use candidate_space::CandidateSpace;
pub use elimination::{find_possible_solution, remove_candidates};
pub use solution_generator::{generate_solutions, SolutionGenerator};
