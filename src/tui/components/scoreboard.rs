//! # Scoreboard Component
//!
//! Running tally of correct and incorrect answers.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct Scoreboard {
    pub correct: u32,
    pub incorrect: u32,
}

impl Scoreboard {
    pub fn new(correct: u32, incorrect: u32) -> Self {
        Self { correct, incorrect }
    }
}

impl Component for Scoreboard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bold = Modifier::BOLD;
        let line = Line::from(vec![
            Span::raw("Correct: "),
            Span::styled(
                self.correct.to_string(),
                Style::default().fg(Color::Green).add_modifier(bold),
            ),
            Span::raw("   Incorrect: "),
            Span::styled(
                self.incorrect.to_string(),
                Style::default().fg(Color::Red).add_modifier(bold),
            ),
            Span::styled("   Tab: next category  Esc: quit", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }
}
