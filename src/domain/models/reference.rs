use std::fmt;

use serde::{Deserialize, Serialize};

/// Known kinds of extended reference.
///
/// Only one `PRIMARY` reference may exist per verification. The remote service
/// enforces that, the client never checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceType {
    CustomerId,
    OrderId,
    Email,
    General,
    Primary,
}

impl ReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceType::CustomerId => "CUSTOMER_ID",
            ReferenceType::OrderId => "ORDER_ID",
            ReferenceType::Email => "EMAIL",
            ReferenceType::General => "GENERAL",
            ReferenceType::Primary => "PRIMARY",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ReferenceType> for String {
    fn from(value: ReferenceType) -> Self {
        value.as_str().to_string()
    }
}

/// A typed key/value tag attached to a verification for later lookup.
///
/// The type is kept as the raw wire string so values the server introduces
/// later still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedReference {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub value: String,
}

impl ExtendedReference {
    pub fn new(reference_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            reference_type: reference_type.into(),
            value: value.into(),
        }
    }

    pub fn customer_id(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::CustomerId, value)
    }

    pub fn order_id(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::OrderId, value)
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::Email, value)
    }

    pub fn general(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::General, value)
    }

    pub fn primary(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::Primary, value)
    }

    pub fn is_primary(&self) -> bool {
        self.reference_type == ReferenceType::Primary.as_str()
    }
}
