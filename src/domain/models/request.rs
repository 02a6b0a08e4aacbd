use serde::Serialize;
use serde_json::{Map, Value};

use super::ExtendedReference;

/// How the end user is brought into the verification app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationType {
    LinkLong,
    LinkShort,
    /// Requires an email address on the request.
    InviteEmail,
}

/// Parameters of a new verification session.
///
/// Unset optional parameters are still sent, as JSON `null`.
///
/// # Examples
///
/// ```
/// use veriface::domain::models::{CreateVerificationRequest, ExtendedReference, VerificationType};
///
/// let request = CreateVerificationRequest::new(VerificationType::InviteEmail)
///     .with_email("client@example.com")
///     .with_reference_id("ORDER-1")
///     .with_extended_reference(ExtendedReference::customer_id("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerificationRequest {
    #[serde(rename = "type")]
    pub verification_type: VerificationType,
    pub company_id: Option<String>,
    pub person_id: Option<String>,
    pub template_id: Option<String>,
    pub reference_id: Option<String>,
    pub email: Option<String>,
    pub redirect_uri: Option<String>,
    pub extended_references: Option<Vec<ExtendedReference>>,
    /// Additional integration parameters merged into the request object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateVerificationRequest {
    pub fn new(verification_type: VerificationType) -> Self {
        Self {
            verification_type,
            company_id: None,
            person_id: None,
            template_id: None,
            reference_id: None,
            email: None,
            redirect_uri: None,
            extended_references: None,
            extra: Map::new(),
        }
    }

    pub fn with_company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn with_person_id(mut self, person_id: impl Into<String>) -> Self {
        self.person_id = Some(person_id.into());
        self
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn with_extended_reference(mut self, reference: ExtendedReference) -> Self {
        self.extended_references
            .get_or_insert_with(Vec::new)
            .push(reference);
        self
    }

    pub fn with_extended_references(
        mut self,
        references: impl IntoIterator<Item = ExtendedReference>,
    ) -> Self {
        self.extended_references
            .get_or_insert_with(Vec::new)
            .extend(references);
        self
    }

    /// Sets a parameter the typed fields do not cover.
    ///
    /// Keys colliding with a typed field produce a duplicate key in the JSON
    /// body, so use the matching `with_*` method for those.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Search criteria accepted by the `find` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum FindQuery {
    ByReferenceId(String),
    ByExtendedReference {
        reference_type: String,
        value: String,
    },
    BySessionId(String),
    /// Arbitrary criteria; an empty map is sent as `{}`.
    Raw(Map<String, Value>),
}

impl FindQuery {
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        match self {
            FindQuery::ByReferenceId(reference_id) => {
                body.insert("referenceId".into(), reference_id.into());
            }
            FindQuery::ByExtendedReference {
                reference_type,
                value,
            } => {
                body.insert("extendedReferenceType".into(), reference_type.into());
                body.insert("extendedReferenceValue".into(), value.into());
            }
            FindQuery::BySessionId(session_id) => {
                body.insert("sessionId".into(), session_id.into());
            }
            FindQuery::Raw(map) => body = map,
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_minimal_request_sends_explicit_nulls() {
        let request = CreateVerificationRequest::new(VerificationType::LinkLong);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({
                "type": "LINK_LONG",
                "companyId": null,
                "personId": null,
                "templateId": null,
                "referenceId": null,
                "email": null,
                "redirectUri": null,
                "extendedReferences": null,
            })
        );
    }

    #[test]
    fn test_invite_email_request() {
        let request = CreateVerificationRequest::new(VerificationType::InviteEmail)
            .with_email("a@b.com")
            .with_extended_reference(ExtendedReference::customer_id("42"))
            .with_param("lang", "en");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["type"], "INVITE_EMAIL");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(
            json["extendedReferences"],
            json!([{"type": "CUSTOMER_ID", "value": "42"}])
        );
        assert_eq!(json["lang"], "en");
    }

    #[test]
    fn test_find_query_bodies() {
        let body = FindQuery::ByExtendedReference {
            reference_type: "CUSTOMER_ID".into(),
            value: "42".into(),
        }
        .into_body();
        assert_eq!(
            Value::Object(body),
            json!({"extendedReferenceType": "CUSTOMER_ID", "extendedReferenceValue": "42"})
        );

        assert!(FindQuery::Raw(Map::new()).into_body().is_empty());
    }
}
