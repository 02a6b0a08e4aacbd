use serde_json::Value;

use super::fields::{object, string};
use super::verification::extended_references;
use crate::domain::models::{MonitoringWebhookPayload, VerificationWebhookPayload};
use crate::error::MappingError;

type Result<T> = std::result::Result<T, MappingError>;

pub fn decode_verification_webhook(value: &Value) -> Result<VerificationWebhookPayload> {
    let obj = object(value, "webhook")?;

    Ok(VerificationWebhookPayload {
        session_id: string(obj, "sessionId")?,
        reference_id: string(obj, "referenceId")?,
        extended_references: extended_references(obj)?,
        status: string(obj, "status")?,
        verification_end_user_status: string(obj, "verificationEndUserStatus")?,
    })
}

pub fn decode_monitoring_webhook(value: &Value) -> Result<MonitoringWebhookPayload> {
    let obj = object(value, "webhook")?;

    Ok(MonitoringWebhookPayload {
        session_id: string(obj, "sessionId")?,
        reference_id: string(obj, "referenceId")?,
        extended_references: extended_references(obj)?,
        status: string(obj, "status")?,
        service: string(obj, "service")?,
    })
}

/// Parses the raw body of a verification webhook request.
pub fn parse_verification_webhook(body: &[u8]) -> Result<VerificationWebhookPayload> {
    let value: Value = serde_json::from_slice(body)?;
    decode_verification_webhook(&value)
}

/// Parses the raw body of a monitoring webhook request.
pub fn parse_monitoring_webhook(body: &[u8]) -> Result<MonitoringWebhookPayload> {
    let value: Value = serde_json::from_slice(body)?;
    decode_monitoring_webhook(&value)
}
