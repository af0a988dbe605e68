mod pair;
mod pair_index;
mod person;
mod round_result;

pub use pair::Pair;
pub use pair_index::PairIndex;
pub use person::Person;
pub use round_result::{Deduction, RoundResult};
