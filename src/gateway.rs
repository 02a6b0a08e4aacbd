//! HTTP gateway.
//!
//! Builds requests for the VeriFace API, sends them through a [`Transport`]
//! and classifies the outcome. Successful calls yield the raw body; decoding
//! is left to the caller.

mod classify;
mod transport;

pub use classify::{
    EXIT_HTTP_STATUS, EXIT_PROCESS_STATUS, SUCCESS_STATUS, classify, exit_diagnostic,
    transport_diagnostic,
};
pub use transport::ReqwestTransport;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::config::{DEFAULT_API_URL, ErrorPolicy};
use crate::domain::ports::{HttpRequest, Method, Transport};
use crate::error::{MappingError, Result};

pub const USER_AGENT: &str = concat!("veriface-rs/", env!("CARGO_PKG_VERSION"));
pub const API_KEY_HEADER: &str = "apikey";
const CONTENT_TYPE_JSON: &str = "application/json";

/// JSON request body that remembers whether it is an object or an array.
///
/// An object with no keys is always sent as `{}`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonBody {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

impl JsonBody {
    pub fn empty_object() -> Self {
        JsonBody::Object(Map::new())
    }

    /// Serializes `value` into a body. A value that serializes to `null`
    /// becomes an empty object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> std::result::Result<Self, MappingError> {
        match serde_json::to_value(value)? {
            Value::Null => Ok(Self::empty_object()),
            Value::Object(map) => Ok(JsonBody::Object(map)),
            Value::Array(items) => Ok(JsonBody::Array(items)),
            _ => Err(MappingError::unexpected("body", "object or array")),
        }
    }

    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, MappingError> {
        let bytes = match self {
            JsonBody::Object(map) => serde_json::to_vec(map)?,
            JsonBody::Array(items) => serde_json::to_vec(items)?,
        };
        Ok(bytes)
    }
}

impl From<Map<String, Value>> for JsonBody {
    fn from(map: Map<String, Value>) -> Self {
        JsonBody::Object(map)
    }
}

/// Connection settings: the API key and the base URL.
#[derive(Debug)]
pub struct Settings {
    pub api_key: SecretString,
    pub api_url: String,
}

impl Settings {
    /// An empty URL falls back to the public API.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_key: SecretString::from(api_key.into()),
            api_url: if api_url.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                api_url
            },
        }
    }
}

impl Clone for Settings {
    fn clone(&self) -> Self {
        Self {
            api_key: SecretString::from(self.api_key.expose_secret().to_string()),
            api_url: self.api_url.clone(),
        }
    }
}

/// Sends authenticated requests and applies the [`ErrorPolicy`].
#[derive(Debug)]
pub struct Gateway<T> {
    transport: T,
    settings: Settings,
    error_policy: ErrorPolicy,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T, settings: Settings, error_policy: ErrorPolicy) -> Self {
        Self {
            transport,
            settings,
            error_policy,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.settings.api_key = SecretString::from(api_key.into());
    }

    pub fn set_api_url(&mut self, api_url: impl Into<String>) {
        self.settings.api_url = api_url.into();
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn set_error_policy(&mut self, error_policy: ErrorPolicy) {
        self.error_policy = error_policy;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path such as `/public-api/v1/verification/find`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api_url.trim_end_matches('/'), path)
    }

    /// Builds the request without sending it.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonBody>,
    ) -> std::result::Result<HttpRequest, MappingError> {
        let mut headers = vec![
            (
                API_KEY_HEADER.to_string(),
                self.settings.api_key.expose_secret().to_string(),
            ),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];

        let body = match body {
            Some(body) => {
                headers.push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));
                Some(body.to_bytes()?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<Vec<u8>> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await
    }

    pub async fn post(&self, path: &str, body: &JsonBody) -> Result<Vec<u8>> {
        let request = self.build_request(Method::POST, path, Some(body))?;
        self.execute(request).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<Vec<u8>> {
        debug!(method = %request.method, url = %request.url, "Sending VeriFace request");

        let url = request.url.clone();
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(transport_error) => match self.error_policy {
                ErrorPolicy::Propagate => {
                    warn!(url = %url, error = %transport_error, "VeriFace request failed");
                    return Err(transport_error.into());
                }
                ErrorPolicy::Exit => {
                    exit_with(&transport_diagnostic(&url, &transport_error.source))
                }
            },
        };

        match classify(response.status, &response.body) {
            Ok(()) => Ok(response.body),
            Err(api_error) => match self.error_policy {
                ErrorPolicy::Propagate => {
                    warn!(
                        status = api_error.status,
                        code = %api_error.code,
                        url = %url,
                        "VeriFace API call failed"
                    );
                    Err(api_error.into())
                }
                ErrorPolicy::Exit => {
                    exit_with(&exit_diagnostic(api_error.status, &url, &response.body))
                }
            },
        }
    }
}

/// Terminates the process; only reached under [`ErrorPolicy::Exit`].
fn exit_with(diagnostic: &str) -> ! {
    error!("{diagnostic}");
    eprintln!("{diagnostic}");
    std::process::exit(EXIT_PROCESS_STATUS)
}
