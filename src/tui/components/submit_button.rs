//! # SubmitButton Component
//!
//! Clickable twin of the Enter key.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub const SUBMIT_BUTTON_WIDTH: u16 = 12;

pub struct SubmitButton;

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new("Submit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(button, area);
    }
}
