mod monitoring;
mod reference;
mod request;
mod status;
mod verification;
mod webhook;

pub use monitoring::{MonitoringDetailEntry, MonitoringRecord};
pub use reference::{ExtendedReference, ReferenceType};
pub use request::{CreateVerificationRequest, FindQuery, VerificationType};
pub use status::{EndUserStatus, VerificationStatus};
pub use verification::{
    CreateVerificationResponse, ExtractedField, Indicator, VerificationIdentifiers,
    VerificationListEntry, VerificationResult,
};
pub use webhook::{MonitoringWebhookPayload, VerificationWebhookPayload};

/// Locale used for read endpoints when the caller does not pick one.
pub const DEFAULT_LOCALE: &str = "sk_SK";
