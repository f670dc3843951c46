//! # InputBox Component
//!
//! Single-line text input with a submit label.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Display the `[Send]` / `[Sending...]` submit label
//!
//! ## State Management
//!
//! The buffer is internal editing state, but every edit is reported to the
//! parent as `InputEvent::Edited` so the core `App.message` mirrors it
//! (a controlled input, in React terms). `disabled` is a prop from the
//! application state: while a request is in flight the component ignores
//! all events and the submit label flips.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Text content changed; payload is the full new buffer.
    Edited(String),
    /// User submitted the text (Enter pressed)
    Submit,
}

/// Text input component with a submit label.
///
/// # Props
///
/// - `disabled`: true while a request is in flight (from App state)
///
/// # State
///
/// - `buffer`: current text being typed
/// - `cursor`: byte offset into the buffer
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Request in flight: ignore edits, flip the submit label (Prop)
    pub disabled: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: 0,
        }
    }

    fn edited(&self) -> Option<InputEvent> {
        Some(InputEvent::Edited(self.buffer.clone()))
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = if self.disabled { "[Sending...]" } else { "[Send]" };
        let label_style = if self.disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green)
        };

        let style = if self.disabled {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(style)
            .title("Input")
            .title_bottom(Line::styled(label, label_style).right_aligned());

        // Horizontal scroll so the cursor stays visible in a narrow box.
        let inner_width = area.width.saturating_sub(2);
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        let scroll_x = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let input = if self.buffer.is_empty() && !self.disabled {
            Paragraph::new("Type your message...")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(style)
                .scroll((0, scroll_x))
        };

        frame.render_widget(input.block(block), area);

        // No cursor while disabled: the field doesn't accept input.
        if !self.disabled {
            frame.set_cursor_position((area.x + 1 + (cursor_col - scroll_x), area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }

        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.edited()
            }
            TuiEvent::Paste(text) => {
                // Single-line input: pasted newlines become spaces.
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.edited()
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    self.edited()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    self.edited()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
