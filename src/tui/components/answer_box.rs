//! # AnswerBox Component
//!
//! The answer field. It holds raw text exactly as typed; parsing into an
//! `Answer` happens in the dispatcher, so "abc" or an empty box still reach
//! the engine and get graded incorrect.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text
//! - Backspace editing
//! - Emit `Submit` on Enter
//! - Keep the terminal cursor parked in the field (it always has focus)

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

/// Characters after which typing is ignored. Long enough for any answer.
pub const MAX_ANSWER_LEN: usize = 32;

/// High-level events emitted by the AnswerBox
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerEvent {
    /// User submitted the raw text (Enter pressed)
    Submit(String),
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct AnswerBox {
    pub buffer: String,
}

impl AnswerBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the field. Called after every render-worthy change so each
    /// question starts with a blank answer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.buffer.chars().count() >= MAX_ANSWER_LEN {
            return false;
        }
        self.buffer.push(c);
        true
    }
}

impl Component for AnswerBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Answer (Enter to submit)");
        let inner = block.inner(area);

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let typed = self.buffer.chars().count() as u16;
        let cursor_x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

impl EventHandler for AnswerBox {
    type Event = AnswerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.push(*c).then_some(AnswerEvent::ContentChanged),
            TuiEvent::Paste(text) => {
                let mut changed = false;
                for c in text.chars() {
                    changed |= self.push(c);
                }
                changed.then_some(AnswerEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| AnswerEvent::ContentChanged),
            TuiEvent::Submit => Some(AnswerEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
