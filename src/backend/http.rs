//! HTTP backend against the local chat server.
//!
//! The server exposes two routes, both keyed on the message as a
//! percent-encoded path segment:
//! - `GET /api/v2/stream/{message}`: chunked text response
//! - `GET /api/v2/{message}`: whole text response

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::sync::mpsc::Sender;

use crate::backend::decode::Utf8StreamDecoder;
use crate::backend::provider::{BackendError, ChatBackend, StreamChunk};

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn stream_url(&self, message: &str) -> String {
        format!(
            "{}/api/v2/stream/{}",
            self.base_url,
            urlencoding::encode(message)
        )
    }

    fn complete_url(&self, message: &str) -> String {
        format!("{}/api/v2/{}", self.base_url, urlencoding::encode(message))
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn stream_chat(
        &self,
        message: &str,
        sender: Sender<StreamChunk>,
    ) -> Result<(), BackendError> {
        let url = self.stream_url(message);
        info!("GET {}", url);

        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Backend returned HTTP {}, body left unread", status);
            return Err(BackendError::Status(status));
        }

        // Read the body incrementally. The decoder holds back a multi-byte
        // character split across chunk boundaries, so every sent chunk is
        // complete, valid text. The response handle drops at scope exit on
        // every path.
        let mut decoder = Utf8StreamDecoder::new();
        let mut chunk_count = 0usize;
        let mut total_content_len = 0usize;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?
        {
            debug!("Raw chunk received: {} bytes", chunk.len());
            let text = decoder.decode(&chunk);
            if text.is_empty() {
                // The chunk only extended a still-incomplete character.
                continue;
            }
            chunk_count += 1;
            total_content_len += text.len();
            if sender.send(StreamChunk::Content(text)).await.is_err() {
                warn!("Content chunk send failed: receiver dropped");
                return Err(BackendError::ChannelClosed);
            }
        }

        let tail = decoder.finish();
        if !tail.is_empty() && sender.send(StreamChunk::Content(tail)).await.is_err() {
            warn!("Tail chunk send failed: receiver dropped");
            return Err(BackendError::ChannelClosed);
        }

        info!(
            "Stream complete: {} chunks, {} content bytes",
            chunk_count, total_content_len
        );
        if sender.send(StreamChunk::Completed).await.is_err() {
            warn!("Completed marker send failed: receiver dropped");
            return Err(BackendError::ChannelClosed);
        }
        Ok(())
    }

    async fn complete(&self, message: &str) -> Result<String, BackendError> {
        let url = self.complete_url(message);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Backend returned HTTP {}, body left unread", status);
            return Err(BackendError::Status(status));
        }

        response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))
    }
}
