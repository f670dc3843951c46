//! # Application State
//!
//! Core business state for Brook. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>  // chat backend (HTTP)
//! ├── message: String                // current input box contents
//! ├── response: String               // accumulated response text so far
//! ├── is_loading: bool               // request in flight
//! ├── error: Option<String>          // last error message
//! ├── status_message: String         // status bar text
//! ├── base_url: String               // backend endpoint (for display)
//! └── streaming: bool                // stream the response vs fetch whole
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::backend::ChatBackend;
use crate::core::config::ResolvedConfig;
use std::sync::Arc;

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    /// Current input box contents. Not cleared on submit: the input keeps
    /// its text while disabled, mirroring the rendered form.
    pub message: String,
    /// Accumulated decoded response text for the current/last request.
    pub response: String,
    /// True between submit and the completion (success or failure) of
    /// exactly one request.
    pub is_loading: bool,
    /// Last error message. Cleared on each new submit, before any
    /// response text accumulates.
    pub error: Option<String>,
    pub status_message: String,
    pub base_url: String,
    pub streaming: bool,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>, base_url: String) -> Self {
        Self {
            backend,
            message: String::new(),
            response: String::new(),
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to Brook!"),
            base_url,
            streaming: true,
        }
    }

    pub fn from_config(backend: Arc<dyn ChatBackend>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(backend, config.base_url.clone());
        app.streaming = config.streaming;
        app
    }
}
