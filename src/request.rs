//! Per-load request and response values exchanged with the host.

/// One intercepted load attempt. Owned by the host, read-only here;
/// the only thing this crate consumes is the URL string.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    url: String,
}

impl LoadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Bytes plus content type delivered back to the host for one request.
/// Produced fresh per request and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResponse {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl LoadResponse {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}
