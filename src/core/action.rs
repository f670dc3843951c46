//! # Actions
//!
//! Everything that can happen in Brook becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! A response chunk arrives? That's `Action::ResponseChunk(text)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns an `Effect` for the caller to run.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply a sequence of actions and assert
//! on the resulting state. And debuggable: log every action, replay the
//! exact session.

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input box contents changed.
    MessageChanged(String),
    /// The user asked to send the current message.
    Submit,
    /// A decoded chunk of response text arrived.
    ResponseChunk(String),
    /// The response stream finished.
    ResponseDone,
    /// The request failed; the payload is the user-visible message.
    RequestFailed(String),
    Quit,
}

/// What the caller must do after an `update()`. The reducer never spawns
/// tasks itself; that happens in the TUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnRequest,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::MessageChanged(text) => {
            app.message = text;
            Effect::None
        }
        Action::Submit => {
            // Guard: one request in flight at a time, and nothing to send
            // means nothing happens.
            if app.is_loading || app.message.trim().is_empty() {
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.response.clear();
            app.status_message = String::from("Waiting for response...");
            Effect::SpawnRequest
        }
        Action::ResponseChunk(text) => {
            app.response.push_str(&text);
            Effect::None
        }
        Action::ResponseDone => {
            // RequestFailed may have settled the request already; don't
            // overwrite its status line.
            if app.is_loading {
                app.is_loading = false;
                app.status_message = String::from("Ready");
            }
            Effect::None
        }
        Action::RequestFailed(message) => {
            app.error = Some(message);
            app.is_loading = false;
            app.status_message = String::from("Request failed");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn submitted_app(message: &str) -> App {
        let mut app = test_app();
        update(&mut app, Action::MessageChanged(message.to_string()));
        assert_eq!(update(&mut app, Action::Submit), Effect::SpawnRequest);
        app
    }

    #[test]
    fn test_message_changed_replaces_input() {
        let mut app = test_app();
        update(&mut app, Action::MessageChanged("hello".to_string()));
        assert_eq!(app.message, "hello");
        update(&mut app, Action::MessageChanged("hell".to_string()));
        assert_eq!(app.message, "hell");
    }

    #[test]
    fn test_submit_empty_message_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_submit_whitespace_only_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::MessageChanged("   \t  ".to_string()));
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_submit_while_loading_is_noop() {
        let mut app = submitted_app("hello");
        assert!(app.is_loading);
        // A second submit while the first is in flight does nothing.
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_submit_clears_error_and_response() {
        let mut app = test_app();
        app.error = Some("old error".to_string());
        app.response = "old response".to_string();
        update(&mut app, Action::MessageChanged("hello".to_string()));
        assert_eq!(update(&mut app, Action::Submit), Effect::SpawnRequest);
        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert!(app.response.is_empty());
        // The input itself is untouched.
        assert_eq!(app.message, "hello");
    }

    #[test]
    fn test_chunks_accumulate_in_arrival_order() {
        let mut app = submitted_app("hi");

        update(&mut app, Action::ResponseChunk("Hel".to_string()));
        assert_eq!(app.response, "Hel");
        update(&mut app, Action::ResponseChunk("lo, ".to_string()));
        assert_eq!(app.response, "Hello, ");
        update(&mut app, Action::ResponseChunk("world!".to_string()));
        assert_eq!(app.response, "Hello, world!");

        update(&mut app, Action::ResponseDone);
        assert_eq!(app.response, "Hello, world!");
        assert!(!app.is_loading);
    }

    #[test]
    fn test_request_failed_keeps_partial_response() {
        let mut app = submitted_app("hi");
        update(&mut app, Action::ResponseChunk("partial".to_string()));
        update(&mut app, Action::RequestFailed("connection reset".to_string()));

        assert_eq!(app.error.as_deref(), Some("connection reset"));
        assert_eq!(app.response, "partial");
        assert!(!app.is_loading);
    }

    #[test]
    fn test_response_done_after_failure_keeps_error_status() {
        let mut app = submitted_app("hi");
        update(&mut app, Action::RequestFailed("boom".to_string()));
        // The forward task's fallback ResponseDone arrives second.
        update(&mut app, Action::ResponseDone);

        assert_eq!(app.error.as_deref(), Some("boom"));
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "Request failed");
    }

    #[test]
    fn test_loading_always_cleared_after_cycle() {
        // Success path
        let mut app = submitted_app("hi");
        update(&mut app, Action::ResponseDone);
        assert!(!app.is_loading);

        // Failure path
        let mut app = submitted_app("hi");
        update(&mut app, Action::RequestFailed("nope".to_string()));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_resubmit_after_completion_spawns_again() {
        let mut app = submitted_app("hi");
        update(&mut app, Action::ResponseDone);
        assert_eq!(update(&mut app, Action::Submit), Effect::SpawnRequest);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
