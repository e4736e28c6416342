//! # CategoryBar Component
//!
//! A row of four buttons, one per category, with the active one
//! highlighted. The same geometry is used for drawing and for mouse hit
//! testing, so a click always lands on the button it visibly hit.

use crate::core::category::Category;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub struct CategoryBar {
    pub active: Category,
}

impl CategoryBar {
    pub fn new(active: Category) -> Self {
        Self { active }
    }

    /// Split `area` into one button per category, in `Category::ALL` order.
    pub fn button_areas(area: Rect) -> [Rect; 4] {
        Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area)
    }

    /// Which category button (if any) sits at the given screen cell.
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Category> {
        let position = Position::new(column, row);
        Self::button_areas(area)
            .into_iter()
            .zip(Category::ALL)
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, category)| category)
    }
}

impl Component for CategoryBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (index, (rect, category)) in Self::button_areas(area)
            .into_iter()
            .zip(Category::ALL)
            .enumerate()
        {
            let is_active = category == self.active;
            let style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let button = Paragraph::new(category.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .title(format!("F{}", index + 1)),
                );
            frame.render_widget(button, rect);
        }
    }
}
