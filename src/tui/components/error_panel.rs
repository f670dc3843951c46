//! # ErrorPanel Component
//!
//! Bordered panel showing the last request's error message. Rendered above
//! the response panel so any partial text that arrived before the failure
//! stays visible.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// A stateless component that renders a single error message.
pub struct ErrorPanel<'a> {
    pub message: &'a str,
}

impl<'a> Component for ErrorPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red);
        let paragraph = Paragraph::new(self.message)
            .block(
                Block::bordered()
                    .title("ERROR")
                    .border_style(style)
                    .title_style(style),
            )
            .style(style)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
