//! # Quiz State
//!
//! The quiz engine: current category, the question on screen, and the
//! running tally. This module contains domain logic only - no TUI types.
//!
//! ```text
//! QuizState
//! ├── category: Category        // active question type
//! ├── question: Question        // operands + correct answer
//! ├── correct_count: u32        // only grows
//! ├── incorrect_count: u32      // only grows
//! └── rng: R                    // injected random source
//! ```
//!
//! Two operations mutate it: `setup_question` (new question, counters kept)
//! and `submit_answer` (exactly one counter bumped, then a new question in
//! the same category). Everything else reads through `state()`, which hands
//! back a `Copy` snapshot.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use super::answer::Answer;
use super::category::Category;
use super::question::Question;

/// Result of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { expected: i64 },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Immutable copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub category: Category,
    pub left_operand: i64,
    pub right_operand: i64,
    pub correct_answer: i64,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

pub struct QuizState<R: Rng = StdRng> {
    category: Category,
    question: Question,
    correct_count: u32,
    incorrect_count: u32,
    rng: R,
}

impl QuizState<StdRng> {
    /// Engine seeded from the OS, or from `seed` for a reproducible session.
    pub fn from_seed(category: Category, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(category, rng)
    }
}

impl Default for QuizState<StdRng> {
    fn default() -> Self {
        Self::from_seed(Category::default(), None)
    }
}

impl<R: Rng> QuizState<R> {
    /// Starts a session on `category` with a freshly generated question.
    pub fn with_rng(category: Category, mut rng: R) -> Self {
        let question = Question::generate(category, &mut rng);
        debug!("Quiz started on {:?}: {:?}", category, question);
        Self {
            category,
            question,
            correct_count: 0,
            incorrect_count: 0,
            rng,
        }
    }

    /// Switch to `category` (or stay on it) and draw a new question.
    /// Counters are untouched.
    pub fn setup_question(&mut self, category: Category) {
        self.category = category;
        self.question = Question::generate(category, &mut self.rng);
        debug!("New {:?} question: {:?}", category, self.question);
    }

    /// Grade `answer`, bump exactly one counter, then move on to a new
    /// question in the current category.
    pub fn submit_answer(&mut self, answer: Answer) -> Outcome {
        let expected = self.question.answer;
        let outcome = if answer.matches(expected) {
            self.correct_count += 1;
            Outcome::Correct
        } else {
            self.incorrect_count += 1;
            Outcome::Incorrect { expected }
        };
        debug!("Graded {:?} against {}: {:?}", answer, expected, outcome);

        self.setup_question(self.category);
        outcome
    }

    pub fn state(&self) -> QuizSnapshot {
        QuizSnapshot {
            category: self.category,
            left_operand: self.question.left,
            right_operand: self.question.right,
            correct_answer: self.question.answer,
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replace the question on screen. Only tests need to pin operands.
    #[cfg(test)]
    pub(crate) fn force_question(&mut self, question: Question) {
        self.question = question;
    }
}
