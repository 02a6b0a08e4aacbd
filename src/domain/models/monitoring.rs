use chrono::{DateTime, Utc};
use serde::Serialize;

/// Post-verification monitoring state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringRecord {
    pub status: Option<String>,
    pub session_id: Option<String>,
    pub name: Option<String>,
    pub verification_date: Option<DateTime<Utc>>,
    pub monitoring_start: Option<DateTime<Utc>>,
    pub monitoring_end: Option<DateTime<Utc>>,
    pub monitoring_last_change: Option<DateTime<Utc>>,
    pub monitoring_variant: Option<String>,
    pub detail: Vec<MonitoringDetailEntry>,
}

impl MonitoringRecord {
    /// Detail rows whose code changed since the previous check.
    pub fn changed_details(&self) -> impl Iterator<Item = &MonitoringDetailEntry> {
        self.detail.iter().filter(|d| d.has_changed())
    }
}

/// Result of one monitored service (e.g. AML screening) for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringDetailEntry {
    pub service: Option<String>,
    pub status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub previous_code: Option<String>,
    pub previous_localized_label: Option<String>,
    pub code: Option<String>,
    pub localized_label: Option<String>,
}

impl MonitoringDetailEntry {
    pub fn has_changed(&self) -> bool {
        self.previous_code.is_some() && self.previous_code != self.code
    }
}
