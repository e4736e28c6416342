//! # Actions
//!
//! Everything the user can do to the quiz becomes an `Action`.
//! Clicks a category button? That's `Action::SelectCategory(category)`.
//! Presses Enter in the answer field? That's `Action::SubmitAnswer(answer)`.
//!
//! The `update()` function applies an action to the quiz and returns an
//! `Effect` telling the adapter what to do next. No I/O happens here.
//!
//! ```text
//! QuizState + Action  →  update()  →  Effect
//! ```

use log::debug;
use rand::Rng;

use super::answer::Answer;
use super::category::Category;
use super::state::{Outcome, QuizState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectCategory(Category),
    SubmitAnswer(Answer),
    Quit,
}

/// What the adapter should do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State changed; redraw.
    Render,
    /// An answer was graded; redraw and report the outcome.
    Graded(Outcome),
    Quit,
}

pub fn update<R: Rng>(quiz: &mut QuizState<R>, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectCategory(category) => {
            quiz.setup_question(category);
            Effect::Render
        }
        Action::SubmitAnswer(answer) => Effect::Graded(quiz.submit_answer(answer)),
        Action::Quit => Effect::Quit,
    }
}
