pub mod permutation;
pub mod random;

pub use random::{RandomSource, SeededRandom};
