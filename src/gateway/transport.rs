use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::USER_AGENT;
use crate::domain::ports::{HttpRequest, RawResponse, Transport};
use crate::error::TransportError;

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with the SDK user agent and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .use_rustls_tls()
            .build()
            .map_err(|e| TransportError::new("", e))?;

        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one configured with a proxy.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(&url, e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(&url, e))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
