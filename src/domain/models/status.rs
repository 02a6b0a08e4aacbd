use std::fmt;

/// Verification status as reported by the server.
///
/// Parsing never fails: values outside the known vocabulary are kept in
/// [`VerificationStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    New,
    Verified,
    VerifiedWarning,
    PartiallyVerified,
    Cancelled,
    ValidationNeeded,
    ActionNeeded,
    Refused,
    Error,
    Waiting,
    WaitingEndUser,
    VerifiedManual,
    RefusedManual,
    Unknown,
    Expired,
    Other(String),
}

impl VerificationStatus {
    pub fn as_str(&self) -> &str {
        use VerificationStatus::*;

        match self {
            New => "NEW",
            Verified => "VERIFIED",
            VerifiedWarning => "VERIFIED_WARNING",
            PartiallyVerified => "PARTIALLY_VERIFIED",
            Cancelled => "CANCELLED",
            ValidationNeeded => "VALIDATION_NEEDED",
            ActionNeeded => "ACTION_NEEDED",
            Refused => "REFUSED",
            Error => "ERROR",
            Waiting => "WAITING",
            WaitingEndUser => "WAITING_ENDUSER",
            VerifiedManual => "VERIFIED_MANUAL",
            RefusedManual => "REFUSED_MANUAL",
            Unknown => "UNKNOWN",
            Expired => "EXPIRED",
            Other(raw) => raw.as_str(),
        }
    }

    /// The session will not change status any more.
    pub fn is_terminal(&self) -> bool {
        use VerificationStatus::*;

        matches!(
            self,
            Verified
                | VerifiedWarning
                | PartiallyVerified
                | VerifiedManual
                | Refused
                | RefusedManual
                | Cancelled
                | Error
                | Expired
        )
    }

    /// Someone has to act manually before the session can finish.
    pub fn needs_intervention(&self) -> bool {
        matches!(
            self,
            VerificationStatus::ValidationNeeded | VerificationStatus::ActionNeeded
        )
    }
}

impl From<&str> for VerificationStatus {
    fn from(value: &str) -> Self {
        use VerificationStatus::*;

        match value {
            "NEW" => New,
            "VERIFIED" => Verified,
            "VERIFIED_WARNING" => VerifiedWarning,
            "PARTIALLY_VERIFIED" => PartiallyVerified,
            "CANCELLED" => Cancelled,
            "VALIDATION_NEEDED" => ValidationNeeded,
            "ACTION_NEEDED" => ActionNeeded,
            "REFUSED" => Refused,
            "ERROR" => Error,
            "WAITING" => Waiting,
            "WAITING_ENDUSER" => WaitingEndUser,
            "VERIFIED_MANUAL" => VerifiedManual,
            "REFUSED_MANUAL" => RefusedManual,
            "UNKNOWN" => Unknown,
            "EXPIRED" => Expired,
            other => Other(other.to_string()),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of the end user through the verification app.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EndUserStatus {
    Unstarted,
    NotFinishedChangeDevice,
    NotFinished,
    Success,
    Failure,
    FailureNotRetryable,
    FailureTooManyRetries,
    Cancelled,
    Postponed,
    Expired,
    Other(String),
}

impl EndUserStatus {
    pub fn as_str(&self) -> &str {
        use EndUserStatus::*;

        match self {
            Unstarted => "UNSTARTED",
            NotFinishedChangeDevice => "NOT_FINISHED_CHANGE_DEVICE",
            NotFinished => "NOT_FINISHED",
            Success => "SUCCESS",
            Failure => "FAILURE",
            FailureNotRetryable => "FAILURE_NOT_RETRYABLE",
            FailureTooManyRetries => "FAILURE_TOO_MANY_RETRIES",
            Cancelled => "CANCELLED",
            Postponed => "POSTPONED",
            Expired => "EXPIRED",
            Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for EndUserStatus {
    fn from(value: &str) -> Self {
        use EndUserStatus::*;

        match value {
            "UNSTARTED" => Unstarted,
            "NOT_FINISHED_CHANGE_DEVICE" => NotFinishedChangeDevice,
            "NOT_FINISHED" => NotFinished,
            "SUCCESS" => Success,
            "FAILURE" => Failure,
            "FAILURE_NOT_RETRYABLE" => FailureNotRetryable,
            "FAILURE_TOO_MANY_RETRIES" => FailureTooManyRetries,
            "CANCELLED" => Cancelled,
            "POSTPONED" => Postponed,
            "EXPIRED" => Expired,
            other => Other(other.to_string()),
        }
    }
}

impl fmt::Display for EndUserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
