use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{EndUserStatus, ExtendedReference, VerificationStatus};

/// Fields every verification-shaped record carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationIdentifiers {
    pub session_id: String,
    pub reference_id: Option<String>,
    pub extended_references: Vec<ExtendedReference>,
}

impl VerificationIdentifiers {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            reference_id: None,
            extended_references: Vec::new(),
        }
    }

    /// The `PRIMARY` reference, if the server reported one.
    pub fn primary_reference(&self) -> Option<&ExtendedReference> {
        self.extended_references.iter().find(|r| r.is_primary())
    }
}

/// One row of a `find` result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationListEntry {
    #[serde(flatten)]
    pub identifiers: VerificationIdentifiers,
    pub status: Option<String>,
    pub verification_end_user_status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub finished: Option<DateTime<Utc>>,
    pub deleted: Option<DateTime<Utc>>,
}

impl VerificationListEntry {
    pub fn new(identifiers: VerificationIdentifiers) -> Self {
        Self {
            identifiers,
            status: None,
            verification_end_user_status: None,
            created: None,
            finished: None,
            deleted: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.identifiers.session_id
    }

    pub fn status_kind(&self) -> Option<VerificationStatus> {
        self.status.as_deref().map(VerificationStatus::from)
    }

    pub fn end_user_status_kind(&self) -> Option<EndUserStatus> {
        self.verification_end_user_status
            .as_deref()
            .map(EndUserStatus::from)
    }
}

/// Full detail of a single verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    #[serde(flatten)]
    pub entry: VerificationListEntry,
    pub user_started: Option<DateTime<Utc>>,
    pub user_finished: Option<DateTime<Utc>>,

    // Extracted personal data
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub document_number: Option<String>,
    pub personal_number: Option<String>,
    pub document_country: Option<String>,
    pub document_type: Option<String>,

    pub summary_status: Option<String>,
    pub document_status: Option<String>,
    pub selfie_status: Option<String>,
    pub liveness_check_status: Option<String>,
    pub aml_status: Option<String>,
    pub monitoring_status: Option<String>,

    pub waiting_action: Option<bool>,
    pub waiting_action_confirmed: Option<bool>,
    pub waiting_manual_result: Option<bool>,
    pub incorrect_result_reported: Option<bool>,
    pub stabilized_result: Option<bool>,

    pub extracted_data: Vec<ExtractedField>,
    pub indicators: Vec<Indicator>,
}

impl VerificationResult {
    pub fn new(entry: VerificationListEntry) -> Self {
        Self {
            entry,
            user_started: None,
            user_finished: None,
            name: None,
            birth_date: None,
            document_number: None,
            personal_number: None,
            document_country: None,
            document_type: None,
            summary_status: None,
            document_status: None,
            selfie_status: None,
            liveness_check_status: None,
            aml_status: None,
            monitoring_status: None,
            waiting_action: None,
            waiting_action_confirmed: None,
            waiting_manual_result: None,
            incorrect_result_reported: None,
            stabilized_result: None,
            extracted_data: Vec::new(),
            indicators: Vec::new(),
        }
    }

    pub fn identifiers(&self) -> &VerificationIdentifiers {
        &self.entry.identifiers
    }

    pub fn session_id(&self) -> &str {
        self.entry.session_id()
    }

    pub fn status_kind(&self) -> Option<VerificationStatus> {
        self.entry.status_kind()
    }

    /// Looks up an extracted value by its key, e.g. `"DATE_OF_EXPIRY"`.
    pub fn extracted(&self, key: &str) -> Option<&ExtractedField> {
        self.extracted_data
            .iter()
            .find(|field| field.key.as_deref() == Some(key))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedField {
    pub key: Option<String>,
    pub custom_key: Option<String>,
    pub value: Option<String>,
    pub custom_value: Option<String>,
    pub end_user_value: Option<String>,
}

/// A single check outcome shown in the verification report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub code: Option<String>,
    pub localized_message: Option<String>,
    /// Message parameters, passed through untouched.
    pub params: Option<Value>,
    pub status: Option<String>,
    pub section: Option<String>,
}

/// Returned once by `create`; the open code launches the verification app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerificationResponse {
    pub open_code: String,
    pub session_id: String,
    pub reference_id: Option<String>,
    pub extended_references: Vec<ExtendedReference>,
}
