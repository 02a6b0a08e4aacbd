//! Client facade for the verification lifecycle.
//!
//! Each operation performs at most one round trip through the [`Gateway`] and
//! decodes the answer with the [`crate::mapper`] functions. Webhook parsing
//! never touches the network.

use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::{ErrorPolicy, VerifaceConfig};
use crate::domain::models::{
    CreateVerificationRequest, CreateVerificationResponse, ExtendedReference, FindQuery,
    MonitoringRecord, MonitoringWebhookPayload, VerificationListEntry, VerificationResult,
    VerificationWebhookPayload,
};
use crate::domain::ports::Transport;
use crate::error::Result;
use crate::gateway::{Gateway, JsonBody, ReqwestTransport, Settings};
use crate::mapper;

pub const VERIFICATION_API_PREFIX: &str = "/public-api/v1/verification/";
pub const SETTINGS_PATH: &str = "/public-api/v1/get-settings";

/// VeriFace API client.
///
/// # Examples
///
/// ```no_run
/// use veriface::client::VeriFace;
/// use veriface::domain::models::{CreateVerificationRequest, VerificationType};
///
/// # async fn run() -> veriface::error::Result<()> {
/// let client = VeriFace::by_api_key("INSERT_YOUR_API_KEY")?;
/// let created = client
///     .create_verification(CreateVerificationRequest::new(VerificationType::LinkLong))
///     .await?;
/// let _detail = client.get_verification(&created.session_id, None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct VeriFace<T = ReqwestTransport> {
    gateway: Gateway<T>,
    default_locale: String,
}

impl VeriFace<ReqwestTransport> {
    /// Client for the public API with default settings.
    pub fn by_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&VerifaceConfig::new(api_key))
    }

    /// Client using a `reqwest` transport built from the configuration.
    pub fn from_config(config: &VerifaceConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> VeriFace<T> {
    pub fn with_transport(config: &VerifaceConfig, transport: T) -> Self {
        let settings = Settings::new(config.api_key(), config.api_url.clone());
        Self {
            gateway: Gateway::new(transport, settings, config.error_policy),
            default_locale: config.default_locale.clone(),
        }
    }

    pub fn settings(&self) -> Settings {
        self.gateway.settings().clone()
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.gateway.set_settings(settings);
    }

    pub fn api_key(&self) -> &str {
        self.gateway.settings().api_key.expose_secret()
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.gateway.set_api_key(api_key);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.gateway.settings().api_url
    }

    pub fn set_api_url(&mut self, api_url: impl Into<String>) -> &mut Self {
        self.gateway.set_api_url(api_url);
        self
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.gateway.error_policy()
    }

    pub fn set_error_policy(&mut self, error_policy: ErrorPolicy) -> &mut Self {
        self.gateway.set_error_policy(error_policy);
        self
    }

    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// Starts a new verification session.
    ///
    /// Invalid combinations (e.g. `INVITE_EMAIL` without an email) are
    /// rejected by the server with an `ApiError`.
    pub async fn create_verification(
        &self,
        request: CreateVerificationRequest,
    ) -> Result<CreateVerificationResponse> {
        let body = JsonBody::from_serialize(&request)?;
        let response = self
            .gateway
            .post(&format!("{VERIFICATION_API_PREFIX}create"), &body)
            .await?;

        let created = mapper::decode_create_response(&mapper::parse_body(&response)?)?;
        info!(session_id = %created.session_id, "Verification created");
        Ok(created)
    }

    /// Attaches another reference to an existing session; returns the raw
    /// acknowledgement body.
    pub async fn add_extended_reference(
        &self,
        session_id: &str,
        reference_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<String> {
        let reference = ExtendedReference::new(reference_type, value);
        let body = JsonBody::from_serialize(&reference)?;
        let response = self
            .gateway
            .post(&verification_path(session_id, "/extended-reference"), &body)
            .await?;
        Ok(String::from_utf8_lossy(&response).into_owned())
    }

    /// Searches verifications; no match is an empty list.
    pub async fn find_verifications(&self, query: FindQuery) -> Result<Vec<VerificationListEntry>> {
        let body = JsonBody::from(query.into_body());
        let response = self
            .gateway
            .post(&format!("{VERIFICATION_API_PREFIX}find"), &body)
            .await?;

        let found = mapper::decode_verification_list(&mapper::parse_body(&response)?)?;
        debug!(count = found.len(), "Verifications found");
        Ok(found)
    }

    pub async fn find_verifications_by_reference_id(
        &self,
        reference_id: impl Into<String>,
    ) -> Result<Vec<VerificationListEntry>> {
        self.find_verifications(FindQuery::ByReferenceId(reference_id.into()))
            .await
    }

    pub async fn find_verifications_by_extended_reference(
        &self,
        reference_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Vec<VerificationListEntry>> {
        self.find_verifications(FindQuery::ByExtendedReference {
            reference_type: reference_type.into(),
            value: value.into(),
        })
        .await
    }

    pub async fn find_verifications_by_session_id(
        &self,
        session_id: impl Into<String>,
    ) -> Result<Vec<VerificationListEntry>> {
        self.find_verifications(FindQuery::BySessionId(session_id.into()))
            .await
    }

    /// Full detail of a verification, or `None` when the server returns nothing.
    pub async fn get_verification(
        &self,
        session_id: &str,
        locale: Option<&str>,
    ) -> Result<Option<VerificationResult>> {
        let path = format!(
            "{}?locale={}",
            verification_path(session_id, ""),
            self.locale(locale)
        );
        let response = self.gateway.get(&path).await?;
        let value = mapper::parse_body(&response)?;
        Ok(mapper::decode_optional(&value, mapper::decode_verification_result)?)
    }

    /// Monitoring state of a verification, or `None` when there is none.
    pub async fn get_verification_monitoring_data(
        &self,
        session_id: &str,
        locale: Option<&str>,
    ) -> Result<Option<MonitoringRecord>> {
        let path = format!(
            "{}?locale={}",
            verification_path(session_id, "/monitoring"),
            self.locale(locale)
        );
        let response = self.gateway.get(&path).await?;
        let value = mapper::parse_body(&response)?;
        Ok(mapper::decode_optional(&value, mapper::decode_monitoring_record)?)
    }

    /// PDF report bytes, passed through unparsed.
    pub async fn get_pdf_report(&self, session_id: &str, locale: Option<&str>) -> Result<Vec<u8>> {
        let path = format!(
            "{}?locale={}",
            verification_path(session_id, "/pdf"),
            self.locale(locale)
        );
        self.gateway.get(&path).await
    }

    /// Document images archive bytes, passed through unparsed.
    pub async fn get_document_images(&self, session_id: &str, all: bool) -> Result<Vec<u8>> {
        let path = format!(
            "{}?all={all}",
            verification_path(session_id, "/images/document-all")
        );
        self.gateway.get(&path).await
    }

    /// Deletes a verification; returns the raw acknowledgement body.
    pub async fn delete(&self, session_id: &str) -> Result<String> {
        let response = self.gateway.delete(&verification_path(session_id, "")).await?;
        info!(session_id, "Verification deleted");
        Ok(String::from_utf8_lossy(&response).into_owned())
    }

    /// Account defaults as configured in the VeriFace administration.
    pub async fn get_default_settings(&self) -> Result<Value> {
        let response = self
            .gateway
            .post(SETTINGS_PATH, &JsonBody::from(Map::new()))
            .await?;
        Ok(mapper::parse_body(&response)?)
    }

    /// Parses the body of a verification webhook request.
    pub fn process_verification_webhook(&self, body: &[u8]) -> Result<VerificationWebhookPayload> {
        Ok(mapper::parse_verification_webhook(body)?)
    }

    /// Parses the body of a monitoring webhook request.
    pub fn process_monitoring_webhook(&self, body: &[u8]) -> Result<MonitoringWebhookPayload> {
        Ok(mapper::parse_monitoring_webhook(body)?)
    }

    fn locale(&self, locale: Option<&str>) -> String {
        urlencoding::encode(locale.unwrap_or(&self.default_locale)).into_owned()
    }
}

fn verification_path(session_id: &str, suffix: &str) -> String {
    format!(
        "{VERIFICATION_API_PREFIX}{}{suffix}",
        urlencoding::encode(session_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_path_encodes_session_id() {
        assert_eq!(
            verification_path("abc", "/pdf"),
            "/public-api/v1/verification/abc/pdf"
        );
        assert_eq!(
            verification_path("a/b c", ""),
            "/public-api/v1/verification/a%2Fb%20c"
        );
    }
}
