//! # Question Generation
//!
//! Builds one question for a category from a random source.
//!
//! ```text
//! Addition        a + b           a, b ∈ [1, 50]
//! Subtract        max - min       drawn from [1, 50], never negative
//! Multiply        a × b           a, b ∈ [2, 20]
//! Division        (d1·d2) ÷ d1    d1, d2 ∈ [2, 20], always exact
//! ```

use rand::Rng;

use super::category::Category;

/// Inclusive bounds for addition and subtraction operands.
pub const ADD_SUB_RANGE: (i64, i64) = (1, 50);
/// Inclusive bounds for multiplication factors and division divisor/quotient.
pub const MUL_DIV_RANGE: (i64, i64) = (2, 20);

/// A single question as displayed, plus the answer that grades it correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub left: i64,
    pub right: i64,
    pub answer: i64,
}

impl Question {
    /// Draw a fresh question for `category`.
    pub fn generate<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Self {
        match category {
            Category::Addition => {
                let left = rand_int(rng, ADD_SUB_RANGE);
                let right = rand_int(rng, ADD_SUB_RANGE);
                Self { left, right, answer: left + right }
            }
            Category::Subtract => {
                let a = rand_int(rng, ADD_SUB_RANGE);
                let b = rand_int(rng, ADD_SUB_RANGE);
                let (left, right) = (a.max(b), a.min(b));
                Self { left, right, answer: left - right }
            }
            Category::Multiply => {
                let left = rand_int(rng, MUL_DIV_RANGE);
                let right = rand_int(rng, MUL_DIV_RANGE);
                Self { left, right, answer: left * right }
            }
            Category::Division => {
                let divisor = rand_int(rng, MUL_DIV_RANGE);
                let quotient = rand_int(rng, MUL_DIV_RANGE);
                Self {
                    left: divisor * quotient,
                    right: divisor,
                    answer: quotient,
                }
            }
        }
    }
}

fn rand_int<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (i64, i64)) -> i64 {
    rng.gen_range(lo..=hi)
}
