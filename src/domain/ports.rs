//! Ports (interfaces) the SDK depends on.
//! The HTTP transport is injected so the gateway can run against any client.

use async_trait::async_trait;
pub use reqwest::Method;

use crate::error::TransportError;

/// A fully built HTTP request, ready to hand to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code and body of a completed exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends requests over the wire.
///
/// Implementations must report a non-200 status as `Ok` and reserve `Err`
/// for exchanges that could not complete.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single round trip.
    ///
    /// # Arguments
    /// * `request` - Method, absolute URL, headers and optional body
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - Any response the server produced
    /// * `Err(TransportError)` - DNS, connection or timeout failures
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request).await
    }
}
