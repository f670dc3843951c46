//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use crate::backend::{BackendError, ChatBackend, StreamChunk};

/// A no-op backend for tests that don't need real HTTP.
pub struct NoopBackend;

#[async_trait]
impl ChatBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn stream_chat(
        &self,
        _message: &str,
        _sender: Sender<StreamChunk>,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    async fn complete(&self, _message: &str) -> Result<String, BackendError> {
        Ok(String::new())
    }
}

/// Creates a test App with a NoopBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopBackend), "http://localhost:8080".to_string())
}
