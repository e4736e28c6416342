use crate::core::category::Category;
use crate::core::state::QuizSnapshot;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::submit_button::SUBMIT_BUTTON_WIDTH;
use crate::tui::components::{
    CategoryBar, QuestionView, Scoreboard, SubmitButton, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Screen regions, computed the same way for drawing and for hit testing.
///
/// ```text
/// ┌ title ──────────────────────────────┐  1
/// │ [F1 Add] [F2 Sub] [F3 Mul] [F4 Div] │  3
/// │            question                 │  rest
/// │ [answer .................] [Submit] │  3
/// └ score ──────────────────────────────┘  1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLayout {
    pub title: Rect,
    pub categories: Rect,
    pub question: Rect,
    pub answer: Rect,
    pub submit: Rect,
    pub score: Rect,
}

impl QuizLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [title, categories, question, answer_row, score] =
            Layout::vertical([Length(1), Length(3), Min(3), Length(3), Length(1)]).areas(area);
        let [answer, submit] =
            Layout::horizontal([Min(0), Length(SUBMIT_BUTTON_WIDTH)]).areas(answer_row);
        Self {
            title,
            categories,
            question,
            answer,
            submit,
            score,
        }
    }
}

/// Clickable thing under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Category(Category),
    Submit,
}

/// Hit test: given a screen cell, find which button (if any) is there.
pub fn hit_test(column: u16, row: u16, frame_area: Rect) -> Option<Hit> {
    let layout = QuizLayout::new(frame_area);
    if layout.submit.contains(Position::new(column, row)) {
        return Some(Hit::Submit);
    }
    CategoryBar::hit_test(layout.categories, column, row).map(Hit::Category)
}

pub fn draw_ui(frame: &mut Frame, snapshot: &QuizSnapshot, tui: &mut TuiState) {
    let layout = QuizLayout::new(frame.area());

    TitleBar::new(tui.status_message.clone(), tui.status_positive).render(frame, layout.title);
    CategoryBar::new(snapshot.category).render(frame, layout.categories);
    QuestionView::from_snapshot(snapshot).render(frame, layout.question);
    tui.answer_box.render(frame, layout.answer);
    SubmitButton.render(frame, layout.submit);
    Scoreboard::new(snapshot.correct_count, snapshot.incorrect_count).render(frame, layout.score);
}
