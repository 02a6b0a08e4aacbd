use serde_json::Value;

use super::fields::{datetime, object, sequence, string};
use crate::domain::models::{MonitoringDetailEntry, MonitoringRecord};
use crate::error::MappingError;

type Result<T> = std::result::Result<T, MappingError>;

pub fn decode_monitoring_record(value: &Value) -> Result<MonitoringRecord> {
    let obj = object(value, "monitoring")?;

    Ok(MonitoringRecord {
        status: string(obj, "status")?,
        session_id: string(obj, "sessionId")?,
        name: string(obj, "name")?,
        verification_date: datetime(obj, "verificationDate")?,
        monitoring_start: datetime(obj, "monitoringStart")?,
        monitoring_end: datetime(obj, "monitoringEnd")?,
        monitoring_last_change: datetime(obj, "monitoringLastChange")?,
        monitoring_variant: string(obj, "monitoringVariant")?,
        detail: sequence(obj, "detail", decode_monitoring_detail)?,
    })
}

pub fn decode_monitoring_detail(value: &Value) -> Result<MonitoringDetailEntry> {
    let obj = object(value, "")?;

    Ok(MonitoringDetailEntry {
        service: string(obj, "service")?,
        status: string(obj, "status")?,
        created: datetime(obj, "created")?,
        updated: datetime(obj, "updated")?,
        valid_until: datetime(obj, "validUntil")?,
        previous_code: string(obj, "previousCode")?,
        previous_localized_label: string(obj, "previousLocalizedLabel")?,
        code: string(obj, "code")?,
        localized_label: string(obj, "localizedLabel")?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_monitoring_fields_map_from_own_keys() {
        let record = decode_monitoring_record(&json!({
            "status": "ACTIVE",
            "sessionId": "S1",
            "name": "Jan Novak",
            "verificationDate": "2024-03-01T09:00:00Z",
            "monitoringStart": "2024-03-01T09:00:00Z",
            "monitoringEnd": "",
            "monitoringVariant": "DAILY",
        }))
        .unwrap();

        assert_eq!(record.status.as_deref(), Some("ACTIVE"));
        assert_eq!(record.session_id.as_deref(), Some("S1"));
        assert_eq!(record.name.as_deref(), Some("Jan Novak"));
        assert_eq!(
            record.verification_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
        );
        assert_eq!(record.monitoring_end, None);
        assert_eq!(record.monitoring_last_change, None);
        assert!(record.detail.is_empty());
    }

    #[test]
    fn test_monitoring_detail_entries() {
        let record = decode_monitoring_record(&json!({
            "sessionId": "S1",
            "detail": [
                {
                    "service": "AML",
                    "status": "DONE",
                    "created": "2024-03-01T09:00:00Z",
                    "validUntil": "2025-03-01",
                    "previousCode": "CLEAR",
                    "code": "HIT",
                    "localizedLabel": "Match found"
                },
                {"service": "DOCUMENT_VALIDITY"}
            ]
        }))
        .unwrap();

        assert_eq!(record.detail.len(), 2);
        let aml = &record.detail[0];
        assert_eq!(aml.service.as_deref(), Some("AML"));
        assert_eq!(aml.updated, None);
        assert_eq!(
            aml.valid_until,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
        );
        assert!(aml.has_changed());
        assert_eq!(record.detail[1].code, None);
    }

    #[test]
    fn test_bad_detail_date_reports_path() {
        let err = decode_monitoring_record(&json!({
            "detail": [{"updated": "31.12.2024"}]
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("detail[0].updated"));
    }
}
