//! # Backend
//!
//! The network seam. A [`ChatBackend`] trait hides the transport from the
//! rest of the app; [`HttpBackend`] implements it against the local chat
//! server; [`Utf8StreamDecoder`] turns raw body chunks into text without
//! corrupting characters split across chunk boundaries.

pub mod decode;
pub mod http;
pub mod provider;

pub use decode::Utf8StreamDecoder;
pub use http::HttpBackend;
pub use provider::{BackendError, ChatBackend, StreamChunk};
