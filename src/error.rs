use std::error::Error as StdError;

use thiserror::Error;

/// Code reported when a non-200 response carries no usable `code` field.
pub const UNKNOWN_API_CODE: &str = "UNKNOWN";

pub type Result<T> = std::result::Result<T, VerifaceError>;

/// Every failure surfaced by the SDK falls into one of these three kinds.
#[derive(Debug, Error)]
pub enum VerifaceError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl VerifaceError {
    /// The API error code, if the remote rejected the request.
    pub fn code(&self) -> Option<&str> {
        match self {
            VerifaceError::Api(e) => Some(e.code.as_str()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, VerifaceError::Transport(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, VerifaceError::Api(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, VerifaceError::Mapping(_))
    }
}

/// The network call itself could not complete.
#[derive(Debug, Error)]
#[error("Request to {url} failed: {source}")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new<E>(url: impl Into<String>, error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            url: url.into(),
            source: error.into(),
        }
    }
}

/// The remote answered with a status other than 200.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("VeriFace API error {code} (HTTP {status})")]
pub struct ApiError {
    pub status: u16,
    pub code: String,
}

impl ApiError {
    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_API_CODE
    }
}

/// A payload did not have the shape the target record expects.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected {expected} at `{field}`")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },

    #[error("Missing required field `{field}`")]
    MissingField { field: String },

    #[error("Invalid date in `{field}`: {value:?}")]
    InvalidDate {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl MappingError {
    pub(crate) fn unexpected(field: impl Into<String>, expected: &'static str) -> Self {
        MappingError::UnexpectedType {
            field: field.into(),
            expected,
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        MappingError::MissingField {
            field: field.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            MappingError::Json(_) => None,
            MappingError::UnexpectedType { field, .. }
            | MappingError::MissingField { field }
            | MappingError::InvalidDate { field, .. } => Some(field.as_str()),
        }
    }

    /// Prefixes the field path with the enclosing element, e.g. `indicators[2].params`.
    pub(crate) fn within(self, parent: &str) -> Self {
        let join = |field: String| {
            if field.is_empty() {
                parent.to_string()
            } else {
                format!("{parent}.{field}")
            }
        };
        match self {
            MappingError::UnexpectedType { field, expected } => MappingError::UnexpectedType {
                field: join(field),
                expected,
            },
            MappingError::MissingField { field } => MappingError::MissingField { field: join(field) },
            MappingError::InvalidDate {
                field,
                value,
                source,
            } => MappingError::InvalidDate {
                field: join(field),
                value,
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_prefixes_field_path() {
        let err = MappingError::missing("type").within("extendedReferences[1]");
        assert_eq!(err.field(), Some("extendedReferences[1].type"));

        let err = MappingError::unexpected("", "object").within("detail[0]");
        assert_eq!(err.field(), Some("detail[0]"));
    }

    #[test]
    fn test_api_code_accessor() {
        let err = VerifaceError::from(ApiError {
            status: 404,
            code: "NOT_FOUND".into(),
        });
        assert!(err.is_api());
        assert_eq!(err.code(), Some("NOT_FOUND"));

        let err = VerifaceError::from(MappingError::missing("sessionId"));
        assert!(err.is_mapping());
        assert_eq!(err.code(), None);
    }
}
