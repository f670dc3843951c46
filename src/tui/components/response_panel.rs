//! # ResponsePanel Component
//!
//! Scrollable view of the accumulated response text.
//!
//! ## Responsibilities
//!
//! - Display the "Response:" block with the streamed text so far
//! - Manage scrolling (stick to the bottom while text streams in)
//! - Track whether content sits below the viewport ("↓ New" indicator)
//!
//! ## Architecture
//!
//! `ResponsePanel` is a transient component (created each frame) that wraps
//! `&'a mut ResponsePanelState` (persistent state) and the response text
//! (props). Since `Component::render` takes `&mut self`, we can safely
//! mutate scroll state during the render pass, aligning with Ratatui's
//! `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the response panel.
/// Must be persisted in the parent TuiState.
pub struct ResponsePanelState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Whether content sits below the current scroll position
    pub has_unseen_content: bool,
    /// Last known viewport height (for scroll clamping between frames)
    viewport_height: u16,
    /// Last rendered content height (for repin checks between frames)
    content_height: u16,
}

impl Default for ResponsePanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponsePanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            has_unseen_content: false,
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the end of the response.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Re-engage auto-scroll if the user has scrolled back to the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

/// Scrollable response view component.
/// Created fresh each frame with references to state and data.
pub struct ResponsePanel<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut ResponsePanelState,
    pub response: &'a str,
    pub is_loading: bool,
}

impl<'a> ResponsePanel<'a> {
    pub fn new(state: &'a mut ResponsePanelState, response: &'a str, is_loading: bool) -> Self {
        Self {
            state,
            response,
            is_loading,
        }
    }
}

impl<'a> Component for ResponsePanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.response.is_empty() {
            // A fresh request cleared the response; the next stream starts
            // pinned to the bottom.
            self.state.has_unseen_content = false;
            self.state.stick_to_bottom = true;
            self.state.scroll_state.set_offset(Position::ORIGIN);
            if !self.is_loading {
                let placeholder = Paragraph::new("Type a message and press Enter.")
                    .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
                    .alignment(Alignment::Center);
                frame.render_widget(placeholder, area);
            }
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        let style = Style::default().fg(Color::Blue);
        let border_style = if self.is_loading {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        };

        let paragraph = Paragraph::new(self.response)
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title("Response:")
                    .border_style(border_style)
                    .title_style(border_style),
            )
            .style(style)
            .wrap(Wrap { trim: false });

        let inner_width = content_width.saturating_sub(2);
        let content_height = paragraph.line_count(inner_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        self.state.viewport_height = area.height;
        self.state.content_height = content_height;

        // Auto-scroll logic (Mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        } else {
            self.state.clamp_scroll();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // Update the unseen content indicator from the settled offset
        let current_offset = self.state.scroll_state.offset().y;
        if content_height <= area.height {
            self.state.has_unseen_content = false;
        } else {
            let max_scroll = content_height.saturating_sub(area.height);
            self.state.has_unseen_content = current_offset < max_scroll;
        }
    }
}

/// EventHandler is implemented on `ResponsePanelState` rather than
/// `ResponsePanel` because event handling requires persistent state and the
/// component is recreated each frame with fresh props.
impl EventHandler for ResponsePanelState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                self.scroll_state.scroll_to_bottom();
                None
            }
            _ => None,
        }
    }
}
