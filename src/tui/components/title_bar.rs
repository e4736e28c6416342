//! # TitleBar Component
//!
//! Top line of the screen: app name, plus the latest status message
//! ("Correct!", "Incorrect, the answer was 42") when there is one.
//!
//! Stateless: everything it shows arrives as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub status_message: String,
    /// Colors the status green (true) or red (false); `None` leaves it plain.
    pub status_positive: Option<bool>,
}

impl TitleBar {
    pub fn new(status_message: String, status_positive: Option<bool>) -> Self {
        Self {
            status_message,
            status_positive,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Math Quiz",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if !self.status_message.is_empty() {
            let style = match self.status_positive {
                Some(true) => Style::default().fg(Color::Green),
                Some(false) => Style::default().fg(Color::Red),
                None => Style::default(),
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.as_str(), style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status() {
        let mut title_bar = TitleBar::new("Correct!".to_string(), Some(true));
        let text = render_text(&mut title_bar);
        assert!(text.contains("Math Quiz"));
        assert!(text.contains("| Correct!"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(String::new(), None);
        let text = render_text(&mut title_bar);
        assert!(text.contains("Math Quiz"));
        assert!(!text.contains('|'));
    }
}
