use serde::Serialize;

use super::{ExtendedReference, VerificationStatus};

/// Body of the verification status webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationWebhookPayload {
    pub session_id: Option<String>,
    pub reference_id: Option<String>,
    pub extended_references: Vec<ExtendedReference>,
    pub status: Option<String>,
    pub verification_end_user_status: Option<String>,
}

impl VerificationWebhookPayload {
    pub fn status_kind(&self) -> Option<VerificationStatus> {
        self.status.as_deref().map(VerificationStatus::from)
    }
}

/// Body of the monitoring change webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringWebhookPayload {
    pub session_id: Option<String>,
    pub reference_id: Option<String>,
    pub extended_references: Vec<ExtendedReference>,
    pub status: Option<String>,
    pub service: Option<String>,
}
