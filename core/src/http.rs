//! HTTP request and response values exchanged with a `Transport`.
//!
//! # Design
//! Requests and responses are plain data. `NaviClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network, and
//! the transport in between is the only piece that does I/O. Every request
//! the gateway issues is a GET, so the method is implied rather than stored.

/// A GET request described as plain data.
///
/// `url` is absolute: base URL, endpoint path and, for endpoints that accept
/// one, the encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport for every status code, including 4xx/5xx; status
/// interpretation belongs to `NaviClient::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A response with no headers, handy for transports and fakes.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
