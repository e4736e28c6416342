//! # Event Dispatch
//!
//! The one table that turns terminal input into quiz actions.
//!
//! ```text
//! Ctrl+C, Esc                → Action::Quit
//! F1..F4                     → Action::SelectCategory(nth)
//! Tab / Shift+Tab            → Action::SelectCategory(next / prev)
//! click on category button   → Action::SelectCategory(that one)
//! click on Submit, Enter     → Action::SubmitAnswer(parse(answer box))
//! typing, paste, backspace   → answer box only, no action
//! ```
//!
//! The engine never sees raw text: parsing to `Answer` happens here.

use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::answer::Answer;
use crate::core::category::Category;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::AnswerEvent;
use crate::tui::event::TuiEvent;
use crate::tui::ui::{self, Hit};

pub fn dispatch(
    event: &TuiEvent,
    tui: &mut TuiState,
    current: Category,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::FunctionKey(n) => function_key_category(*n).map(Action::SelectCategory),
        TuiEvent::NextCategory => Some(Action::SelectCategory(current.next())),
        TuiEvent::PrevCategory => Some(Action::SelectCategory(current.prev())),
        TuiEvent::MouseClick(column, row) => match ui::hit_test(*column, *row, frame_area)? {
            Hit::Category(category) => Some(Action::SelectCategory(category)),
            Hit::Submit => Some(submit(&tui.answer_box.buffer)),
        },
        TuiEvent::Resize => None,
        _ => match tui.answer_box.handle_event(event)? {
            AnswerEvent::Submit(text) => Some(submit(&text)),
            AnswerEvent::ContentChanged => None,
        },
    }
}

fn submit(raw: &str) -> Action {
    Action::SubmitAnswer(Answer::parse(raw))
}

/// F1 → first category ... F4 → last. Other function keys do nothing.
fn function_key_category(n: u8) -> Option<Category> {
    let index = usize::from(n).checked_sub(1)?;
    Category::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0, 0, 80, 24);

    fn run(event: TuiEvent, tui: &mut TuiState, current: Category) -> Option<Action> {
        dispatch(&event, tui, current, AREA)
    }

    #[test]
    fn test_quit_keys() {
        let mut tui = TuiState::new(true);
        assert_eq!(run(TuiEvent::Quit, &mut tui, Category::Addition), Some(Action::Quit));
        assert_eq!(run(TuiEvent::ForceQuit, &mut tui, Category::Addition), Some(Action::Quit));
    }

    #[test]
    fn test_function_keys_pick_categories() {
        let mut tui = TuiState::new(true);
        for (n, category) in (1u8..=4).zip(Category::ALL) {
            assert_eq!(
                run(TuiEvent::FunctionKey(n), &mut tui, Category::Addition),
                Some(Action::SelectCategory(category))
            );
        }
        assert_eq!(run(TuiEvent::FunctionKey(0), &mut tui, Category::Addition), None);
        assert_eq!(run(TuiEvent::FunctionKey(5), &mut tui, Category::Addition), None);
    }

    #[test]
    fn test_tab_cycles_from_current() {
        let mut tui = TuiState::new(true);
        assert_eq!(
            run(TuiEvent::NextCategory, &mut tui, Category::Multiply),
            Some(Action::SelectCategory(Category::Division))
        );
        assert_eq!(
            run(TuiEvent::PrevCategory, &mut tui, Category::Addition),
            Some(Action::SelectCategory(Category::Division))
        );
    }

    #[test]
    fn test_typing_then_enter_submits_parsed_value() {
        let mut tui = TuiState::new(true);
        assert_eq!(run(TuiEvent::InputChar('4'), &mut tui, Category::Addition), None);
        assert_eq!(run(TuiEvent::InputChar('2'), &mut tui, Category::Addition), None);
        assert_eq!(
            run(TuiEvent::Submit, &mut tui, Category::Addition),
            Some(Action::SubmitAnswer(Answer::Value(42)))
        );
    }

    #[test]
    fn test_enter_on_empty_box_is_not_a_number() {
        let mut tui = TuiState::new(true);
        assert_eq!(
            run(TuiEvent::Submit, &mut tui, Category::Addition),
            Some(Action::SubmitAnswer(Answer::NotANumber))
        );
    }

    #[test]
    fn test_click_category_button() {
        let mut tui = TuiState::new(true);
        assert_eq!(
            run(TuiEvent::MouseClick(30, 2), &mut tui, Category::Addition),
            Some(Action::SelectCategory(Category::Subtract))
        );
    }

    #[test]
    fn test_click_submit_uses_answer_box() {
        let mut tui = TuiState::new(true);
        tui.answer_box.buffer = "17".to_string();
        assert_eq!(
            run(TuiEvent::MouseClick(75, 21), &mut tui, Category::Addition),
            Some(Action::SubmitAnswer(Answer::Value(17)))
        );
    }

    #[test]
    fn test_click_elsewhere_does_nothing() {
        let mut tui = TuiState::new(true);
        assert_eq!(run(TuiEvent::MouseClick(10, 10), &mut tui, Category::Addition), None);
        assert_eq!(run(TuiEvent::Resize, &mut tui, Category::Addition), None);
    }
}
