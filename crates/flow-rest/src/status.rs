//! Payment status codes.
//!
//! Flow reports payment state as an integer. Codes 1 through 4 have fixed
//! meanings; anything else is kept as `Unknown(code)` rather than rejected,
//! so a new remote status never breaks deserialization of the whole
//! response.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Normalized payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// 1: awaiting payment.
    Pending,
    /// 2: paid.
    Paid,
    /// 3: rejected by the payment rail.
    Rejected,
    /// 4: cancelled.
    Cancelled,
    /// Any code outside 1..=4, kept verbatim.
    Unknown(i64),
}

impl PaymentStatus {
    /// Map a raw status code. Total: never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Pending,
            2 => Self::Paid,
            3 => Self::Rejected,
            4 => Self::Cancelled,
            other => Self::Unknown(other),
        }
    }

    /// The raw code this status came from.
    pub fn code(&self) -> i64 {
        match self {
            Self::Pending => 1,
            Self::Paid => 2,
            Self::Rejected => 3,
            Self::Cancelled => 4,
            Self::Unknown(code) => *code,
        }
    }

    /// Fixed textual label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Check if the payment can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Rejected | Self::Cancelled)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl From<i64> for PaymentStatus {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "unknown ({code})"),
            other => f.write_str(other.label()),
        }
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = crate::de::int_from_str_or_number(deserializer)?;
        Ok(Self::from_code(code))
    }
}
