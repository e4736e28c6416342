//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::category::Category;
use crate::core::state::QuizState;

pub const TEST_SEED: u64 = 0x5eed;

/// A deterministic random source.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

/// Creates a test quiz on Addition with a fixed seed.
pub fn test_quiz() -> QuizState {
    QuizState::with_rng(Category::Addition, seeded_rng())
}
