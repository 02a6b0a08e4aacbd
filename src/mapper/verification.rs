use serde_json::Value;

use super::fields::{
    Object, boolean, datetime, object, opaque, required_string, sequence, string,
};
use crate::domain::models::{
    CreateVerificationResponse, ExtendedReference, ExtractedField, Indicator,
    VerificationIdentifiers, VerificationListEntry, VerificationResult,
};
use crate::error::MappingError;

type Result<T> = std::result::Result<T, MappingError>;

pub fn decode_extended_reference(value: &Value) -> Result<ExtendedReference> {
    let obj = object(value, "")?;
    Ok(ExtendedReference {
        reference_type: required_string(obj, "type")?,
        value: required_string(obj, "value")?,
    })
}

pub(crate) fn extended_references(obj: &Object) -> Result<Vec<ExtendedReference>> {
    sequence(obj, "extendedReferences", decode_extended_reference)
}

fn identifiers(obj: &Object) -> Result<VerificationIdentifiers> {
    Ok(VerificationIdentifiers {
        session_id: required_string(obj, "sessionId")?,
        reference_id: string(obj, "referenceId")?,
        extended_references: extended_references(obj)?,
    })
}

/// Fields shared by list rows and full results.
///
/// `finished` falls back to `userFinished` when the server leaves it empty.
fn list_entry(obj: &Object) -> Result<VerificationListEntry> {
    let finished = match datetime(obj, "finished")? {
        Some(finished) => Some(finished),
        None => datetime(obj, "userFinished")?,
    };

    Ok(VerificationListEntry {
        identifiers: identifiers(obj)?,
        status: string(obj, "status")?,
        verification_end_user_status: string(obj, "verificationEndUserStatus")?,
        created: datetime(obj, "created")?,
        finished,
        deleted: datetime(obj, "deleted")?,
    })
}

pub fn decode_list_entry(value: &Value) -> Result<VerificationListEntry> {
    list_entry(object(value, "")?)
}

/// Decodes the array returned by `find`; `null` and `{}` are an empty list.
pub fn decode_verification_list(value: &Value) -> Result<Vec<VerificationListEntry>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_list_entry(item).map_err(|e| e.within(&format!("[{i}]"))))
            .collect(),
        _ => Err(MappingError::unexpected("verifications", "array")),
    }
}

pub fn decode_verification_result(value: &Value) -> Result<VerificationResult> {
    let obj = object(value, "verification")?;

    Ok(VerificationResult {
        entry: list_entry(obj)?,
        user_started: datetime(obj, "userStarted")?,
        user_finished: datetime(obj, "userFinished")?,
        name: string(obj, "name")?,
        birth_date: string(obj, "birthDate")?,
        document_number: string(obj, "documentNumber")?,
        personal_number: string(obj, "personalNumber")?,
        document_country: string(obj, "documentCountry")?,
        document_type: string(obj, "documentType")?,
        summary_status: string(obj, "summaryStatus")?,
        document_status: string(obj, "documentStatus")?,
        selfie_status: string(obj, "selfieStatus")?,
        liveness_check_status: string(obj, "livenessCheckStatus")?,
        aml_status: string(obj, "amlStatus")?,
        monitoring_status: string(obj, "monitoringStatus")?,
        waiting_action: boolean(obj, "waitingAction")?,
        waiting_action_confirmed: boolean(obj, "waitingActionConfirmed")?,
        waiting_manual_result: boolean(obj, "waitingManualResult")?,
        incorrect_result_reported: boolean(obj, "incorrectResultReported")?,
        stabilized_result: boolean(obj, "stabilizedResult")?,
        extracted_data: sequence(obj, "extractedData", decode_extracted_field)?,
        indicators: sequence(obj, "indicators", decode_indicator)?,
    })
}

pub fn decode_extracted_field(value: &Value) -> Result<ExtractedField> {
    let obj = object(value, "")?;
    Ok(ExtractedField {
        key: string(obj, "key")?,
        custom_key: string(obj, "customKey")?,
        value: string(obj, "value")?,
        custom_value: string(obj, "customValue")?,
        end_user_value: string(obj, "endUserValue")?,
    })
}

pub fn decode_indicator(value: &Value) -> Result<Indicator> {
    let obj = object(value, "")?;
    Ok(Indicator {
        code: string(obj, "code")?,
        localized_message: string(obj, "localizedMessage")?,
        params: opaque(obj, "params"),
        status: string(obj, "status")?,
        section: string(obj, "section")?,
    })
}

pub fn decode_create_response(value: &Value) -> Result<CreateVerificationResponse> {
    let obj = object(value, "createVerification")?;
    Ok(CreateVerificationResponse {
        open_code: required_string(obj, "openCode")?,
        session_id: required_string(obj, "sessionId")?,
        reference_id: string(obj, "referenceId")?,
        extended_references: extended_references(obj)?,
    })
}
