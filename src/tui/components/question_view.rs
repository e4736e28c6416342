//! # QuestionView Component
//!
//! The question itself: `left <operator> right = ?`, centred in a box.

use crate::core::state::QuizSnapshot;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub struct QuestionView {
    pub left: i64,
    pub right: i64,
    pub operator: &'static str,
}

impl QuestionView {
    pub fn from_snapshot(snapshot: &QuizSnapshot) -> Self {
        Self {
            left: snapshot.left_operand,
            right: snapshot.right_operand,
            operator: snapshot.category.operator(),
        }
    }

    pub fn text(&self) -> String {
        format!("{} {} {} = ?", self.left, self.operator, self.right)
    }
}

impl Component for QuestionView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Question");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let operand = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled(self.left.to_string(), operand),
            Span::styled(
                format!(" {} ", self.operator),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.right.to_string(), operand),
            Span::raw(" = ?"),
        ]);

        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}
