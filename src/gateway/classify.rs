use serde_json::Value;

use crate::error::{ApiError, UNKNOWN_API_CODE};

/// The only status the API uses for success.
pub const SUCCESS_STATUS: u16 = 200;

/// Status reported in the diagnostic written before the process exits.
pub const EXIT_HTTP_STATUS: u16 = 400;

/// Process exit status used by [`crate::config::ErrorPolicy::Exit`].
pub const EXIT_PROCESS_STATUS: i32 = 1;

/// Decides whether a completed exchange succeeded.
///
/// Anything but 200 is an [`ApiError`]. Its code comes from the `code` field
/// of a JSON object body, rendered as text when numeric, or is `UNKNOWN` when
/// the body is not JSON or the code is missing, empty or zero.
pub fn classify(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if status == SUCCESS_STATUS {
        return Ok(());
    }

    Err(ApiError {
        status,
        code: error_code(body).unwrap_or_else(|| UNKNOWN_API_CODE.to_string()),
    })
}

fn error_code(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("code")? {
        Value::String(code) if !code.is_empty() => Some(code.clone()),
        Value::Number(code) if code.as_f64() != Some(0.0) => Some(code.to_string()),
        _ => None,
    }
}

/// Message written to stderr when the exit policy stops the process.
pub fn exit_diagnostic(status: u16, url: &str, body: &[u8]) -> String {
    format!(
        "HTTP {EXIT_HTTP_STATUS}: VeriFace returned {status} when calling {url}: {}",
        String::from_utf8_lossy(body)
    )
}

/// Message written to stderr when the exchange itself failed under the exit policy.
pub fn transport_diagnostic(url: &str, error: &dyn std::fmt::Display) -> String {
    format!("HTTP {EXIT_HTTP_STATUS}: VeriFace request to {url} failed: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        assert!(classify(200, br#"{"sessionId":"S1"}"#).is_ok());
        assert!(classify(200, b"").is_ok());
    }

    #[test]
    fn test_code_from_json_body() {
        let err = classify(404, br#"{"code":"NOT_FOUND","message":"no such session"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError {
                status: 404,
                code: "NOT_FOUND".into()
            }
        );
    }

    #[test]
    fn test_non_json_body_is_unknown() {
        let err = classify(500, b"<html>Internal Server Error</html>").unwrap_err();
        assert_eq!(err.status, 500);
        assert!(err.is_unknown());
    }

    #[test]
    fn test_missing_or_empty_code_is_unknown() {
        assert!(classify(400, br#"{"message":"bad"}"#).unwrap_err().is_unknown());
        assert!(classify(400, br#"{"code":""}"#).unwrap_err().is_unknown());
        assert!(classify(400, br#"{"code":null}"#).unwrap_err().is_unknown());
        assert!(classify(400, br#"["code"]"#).unwrap_err().is_unknown());
        assert!(classify(400, b"").unwrap_err().is_unknown());
    }

    #[test]
    fn test_numeric_code_is_rendered() {
        assert_eq!(classify(409, br#"{"code":4091}"#).unwrap_err().code, "4091");
        assert!(classify(409, br#"{"code":0}"#).unwrap_err().is_unknown());
        assert!(classify(409, br#"{"code":true}"#).unwrap_err().is_unknown());
    }

    #[test]
    fn test_other_2xx_is_still_an_error() {
        assert!(classify(204, b"").is_err());
        assert!(classify(201, br#"{"code":"CREATED"}"#).is_err());
    }

    #[test]
    fn test_exit_diagnostic_contents() {
        let message = exit_diagnostic(503, "https://api.veriface.eu/x", b"maintenance");
        assert!(message.starts_with("HTTP 400"));
        assert!(message.contains("503"));
        assert!(message.contains("https://api.veriface.eu/x"));
        assert!(message.ends_with("maintenance"));
    }

    #[test]
    fn test_transport_diagnostic_contents() {
        let message = transport_diagnostic("https://api.veriface.eu/x", &"connection refused");
        assert!(message.starts_with("HTTP 400"));
        assert!(message.contains("https://api.veriface.eu/x"));
        assert!(message.ends_with("connection refused"));
    }
}
