//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: polls with a short (~80ms) timeout so streamed chunks
//!   arriving on the action channel render promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::backend::{ChatBackend, HttpBackend, StreamChunk};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ResponsePanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub response_panel: ResponsePanelState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            response_panel: ResponsePanelState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the backend from a resolved config.
pub fn build_backend(config: &ResolvedConfig) -> Arc<dyn ChatBackend> {
    Arc::new(HttpBackend::new(config.base_url.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config);
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state: the input accepts keystrokes
        // exactly when no request is in flight.
        tui.input_box.disabled = app.is_loading;

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while streaming, long when idle
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events always go to the response panel
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToBottom
            ) {
                tui.response_panel.handle_event(&event);
                continue;
            }

            // InputBox handles everything else (and ignores it while disabled)
            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Edited(text) => {
                        update(&mut app, Action::MessageChanged(text));
                    }
                    InputEvent::Submit => {
                        if update(&mut app, Action::Submit) == Effect::SpawnRequest {
                            spawn_request(&app, tx.clone());
                        }
                        // The input is disabled the instant a request
                        // starts, including for events queued in this batch.
                        tui.input_box.disabled = app.is_loading;
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (streaming responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                }
                Effect::SpawnRequest => {
                    spawn_request(&app, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_request(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning chat request");

    // Clone what we need for the async task
    let backend = app.backend.clone();
    let message = app.message.trim().to_string();

    if !app.streaming {
        tokio::spawn(async move {
            match backend.complete(&message).await {
                Ok(text) => {
                    if tx.send(Action::ResponseChunk(text)).is_err() {
                        warn!("Failed to send completion: receiver dropped");
                        return;
                    }
                    if tx.send(Action::ResponseDone).is_err() {
                        warn!("Failed to send ResponseDone: receiver dropped");
                    }
                }
                Err(e) => {
                    warn!("Completion request failed: {}", e);
                    if tx.send(Action::RequestFailed(e.user_message())).is_err() {
                        warn!("Failed to send request error action: receiver dropped");
                    }
                }
            }
        });
        return;
    }

    // Async channel for streaming chunks
    let (chunk_tx, mut chunk_rx) = tokio::sync::mpsc::channel::<StreamChunk>(100);

    // Clone tx for the streaming task
    let tx_stream = tx.clone();

    // Spawn the backend streaming task
    tokio::spawn(async move {
        if let Err(e) = backend.stream_chat(&message, chunk_tx).await {
            warn!("Stream error: {}", e);
            if tx_stream
                .send(Action::RequestFailed(e.user_message()))
                .is_err()
            {
                warn!("Failed to send stream error action: receiver dropped");
            }
        }
    });

    // Spawn a task to forward chunks to the Action channel
    tokio::spawn(async move {
        let mut forwarded_count = 0usize;
        let mut total_content_len = 0usize;

        while let Some(chunk) = chunk_rx.recv().await {
            match chunk {
                StreamChunk::Content(text) => {
                    forwarded_count += 1;
                    total_content_len += text.len();
                    debug!(
                        "Forwarding Action::ResponseChunk (len={}, total={})",
                        text.len(),
                        total_content_len
                    );
                    if tx.send(Action::ResponseChunk(text)).is_err() {
                        warn!("Failed to forward ResponseChunk: receiver dropped");
                        return;
                    }
                }
                StreamChunk::Completed => {
                    info!(
                        "Forwarding complete: {} actions, {} content bytes",
                        forwarded_count, total_content_len
                    );
                    if tx.send(Action::ResponseDone).is_err() {
                        warn!("Failed to send ResponseDone: receiver dropped");
                    }
                    return;
                }
            }
        }

        // Fallback: channel closed without a Completed marker (error path).
        // ResponseDone after RequestFailed is a no-op in the reducer.
        info!(
            "Stream channel closed: {} actions, {} content bytes",
            forwarded_count, total_content_len
        );
        if tx.send(Action::ResponseDone).is_err() {
            warn!("Failed to send ResponseDone: receiver dropped");
        }
    });
}
