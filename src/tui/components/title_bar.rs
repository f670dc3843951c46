//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the backend endpoint
//! - Display status messages (e.g. "Waiting for response...")
//! - Show "↓ New" indicator when streamed text sits below the scroll position
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state. The three props come from different owners:
//! - `base_url`: Core App state (configuration)
//! - `status_message`: Core App state (set by the reducer)
//! - `has_unseen_content`: TUI state (scroll position indicator)
//!
//! The TitleBar doesn't care where they come from — it just renders what
//! it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Backend endpoint (e.g. "http://localhost:8080")
    pub base_url: String,
    /// Transient status (e.g. "Waiting for response...")
    pub status_message: String,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(base_url: String, status_message: String, has_unseen_content: bool) -> Self {
        Self {
            base_url,
            status_message,
            has_unseen_content,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    ///
    /// Priority order keeps the most important information visible even on
    /// narrow terminals: endpoint, then status, then the "↓ New" indicator.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.has_unseen_content {
            format!("Brook ({}) | {} | ↓ New", self.base_url, self.status_message)
        } else if self.status_message.is_empty() {
            format!("Brook ({})", self.base_url)
        } else {
            format!("Brook ({}) | {}", self.base_url, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
