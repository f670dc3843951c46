use std::fmt;

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

/// Errors that can occur during backend operations.
#[derive(Debug)]
pub enum BackendError {
    /// Network-level failure (timeout, DNS, connection refused, broken
    /// stream). The message is the transport error's own text.
    Network(String),
    /// Backend returned a non-success status. The body is never read.
    Status(u16),
    /// The mpsc channel was closed (TUI dropped the receiver).
    ChannelClosed,
}

impl BackendError {
    /// The string shown to the user.
    ///
    /// Status failures collapse to one fixed message regardless of code or
    /// body; the real status only goes to the log. Transport failures
    /// surface their own message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Status(_) => String::from("Failed to get response"),
            BackendError::Network(msg) => msg.clone(),
            BackendError::ChannelClosed => String::from("channel closed"),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Status(code) => write!(f, "HTTP status {code}"),
            BackendError::ChannelClosed => write!(f, "channel closed"),
        }
    }
}

impl std::error::Error for BackendError {}

/// A chunk of streamed response text.
#[derive(Debug, PartialEq, Eq)]
pub enum StreamChunk {
    /// Decoded text, in wire order.
    Content(String),
    /// The stream ended cleanly.
    Completed,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Streams the response for `message`, sending decoded text chunks to
    /// the provided channel followed by [`StreamChunk::Completed`].
    async fn stream_chat(
        &self,
        message: &str,
        sender: Sender<StreamChunk>,
    ) -> Result<(), BackendError>;

    /// Fetches the whole response for `message` at once.
    async fn complete(&self, message: &str) -> Result<String, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_collapse_to_fixed_message() {
        assert_eq!(BackendError::Status(500).user_message(), "Failed to get response");
        assert_eq!(BackendError::Status(404).user_message(), "Failed to get response");
    }

    #[test]
    fn test_network_errors_surface_verbatim() {
        let err = BackendError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_display_includes_status_code() {
        assert_eq!(BackendError::Status(503).to_string(), "HTTP status 503");
    }
}
