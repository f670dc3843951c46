//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, mirroring React:
//!
//! - **Stateless (props-based)**: `TitleBar`, `ErrorPanel` receive all
//!   data as props and just render it.
//! - **Stateful (event-driven)**: `InputBox`, `ResponsePanel` manage
//!   local presentation state (cursor, scroll) and emit events.
//!
//! Each component file co-locates its state types, event types, rendering
//! logic, and tests.

pub mod error_panel;
pub mod input_box;
pub mod response_panel;
pub mod title_bar;

pub use error_panel::ErrorPanel;
pub use input_box::{InputBox, InputEvent};
pub use response_panel::{ResponsePanel, ResponsePanelState};
pub use title_bar::TitleBar;
