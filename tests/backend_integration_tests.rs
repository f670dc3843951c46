use brook::backend::{BackendError, ChatBackend, HttpBackend, StreamChunk};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Drains the chunk channel, returning the concatenated content and whether
/// a Completed marker arrived.
async fn collect_chunks(mut receiver: mpsc::Receiver<StreamChunk>) -> (String, bool) {
    let mut content = String::new();
    let mut completed = false;

    while let Some(chunk) = receiver.recv().await {
        match chunk {
            StreamChunk::Content(s) => content.push_str(&s),
            StreamChunk::Completed => completed = true,
        }
    }

    (content, completed)
}

// ============================================================================
// Streaming Tests
// ============================================================================

#[tokio::test]
async fn test_stream_successful_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/stream/Hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello, world!"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let (tx, rx) = mpsc::channel(100);
    let result = backend.stream_chat("Hello", tx).await;

    assert!(result.is_ok());

    let (content, completed) = collect_chunks(rx).await;
    assert_eq!(content, "Hello, world!");
    assert!(completed, "stream must end with a Completed marker");
}

#[tokio::test]
async fn test_stream_message_is_percent_encoded_in_path() {
    let mock_server = MockServer::start().await;

    // The space must ride as %20 in the path segment; an unencoded space
    // would not match (and would be an invalid request line anyway).
    Mock::given(method("GET"))
        .and(path("/api/v2/stream/hello%20world"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let (tx, rx) = mpsc::channel(100);
    let result = backend.stream_chat("hello world", tx).await;

    assert!(result.is_ok());
    let (content, _) = collect_chunks(rx).await;
    assert_eq!(content, "ok");
}

#[tokio::test]
async fn test_stream_multibyte_content_survives_decoding() {
    let mock_server = MockServer::start().await;

    let body = "café — 20€ 🔥";
    Mock::given(method("GET"))
        .and(path("/api/v2/stream/chars"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let (tx, rx) = mpsc::channel(100);
    backend.stream_chat("chars", tx).await.expect("stream should succeed");

    let (content, completed) = collect_chunks(rx).await;
    assert_eq!(content, body);
    assert!(completed);
}

#[tokio::test]
async fn test_stream_error_status_maps_to_fixed_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/stream/Hello"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("stack trace the user must never see"),
        )
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let (tx, rx) = mpsc::channel(100);
    let result = backend.stream_chat("Hello", tx).await;

    let err = result.expect_err("500 must fail the request");
    assert!(matches!(err, BackendError::Status(500)));
    // The body never influences the user-visible message.
    assert_eq!(err.user_message(), "Failed to get response");

    // Nothing was streamed before the failure.
    let (content, completed) = collect_chunks(rx).await;
    assert!(content.is_empty());
    assert!(!completed);
}

#[tokio::test]
async fn test_stream_connection_refused_surfaces_transport_error() {
    // Port 1 is never listening; the connect error text becomes the
    // user-visible message.
    let backend = HttpBackend::new("http://127.0.0.1:1".to_string());

    let (tx, _rx) = mpsc::channel(100);
    let result = backend.stream_chat("Hello", tx).await;

    let err = result.expect_err("unreachable backend must fail");
    assert!(matches!(err, BackendError::Network(_)));
    assert!(!err.user_message().is_empty());
    assert_ne!(err.user_message(), "Failed to get response");
}

#[tokio::test]
async fn test_stream_channel_closed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/stream/Hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello, world!"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let (tx, rx) = mpsc::channel(1);
    // Drop receiver immediately to simulate channel closed
    drop(rx);

    let result = backend.stream_chat("Hello", tx).await;

    assert!(matches!(result, Err(BackendError::ChannelClosed)));
}

// ============================================================================
// Non-Streaming (complete) Tests
// ============================================================================

#[tokio::test]
async fn test_complete_returns_whole_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/Hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hi there!"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let result = backend.complete("Hello").await;
    assert_eq!(result.expect("request should succeed"), "Hi there!");
}

#[tokio::test]
async fn test_complete_error_status_maps_to_fixed_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/Hello"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());

    let err = backend.complete("Hello").await.expect_err("404 must fail");
    assert!(matches!(err, BackendError::Status(404)));
    assert_eq!(err.user_message(), "Failed to get response");
}
